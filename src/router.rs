// ABOUTME: Axum router wiring the admin console, search proxy, and health endpoints
// ABOUTME: Two public paths plus a readiness probe, all sharing one state handle
//
// SPDX-License-Identifier: Apache-2.0

use axum::routing::get;
use axum::Router;

use crate::admin;
use crate::health;
use crate::search;
use crate::state::SharedState;

/// Build the application router with all endpoints
///
/// Routes:
/// - `GET|POST /admin` — operator console (login, panel, config mutation)
/// - `GET /api/search` — public search proxy
/// - `GET /health` — configuration readiness probe
pub fn build(state: SharedState) -> Router {
    Router::new()
        .route("/admin", get(admin::show).post(admin::submit))
        .route("/api/search", get(search::handle))
        .route("/health", get(health::handle))
        .with_state(state)
}
