// ABOUTME: GET /health handler reporting search-configuration readiness
// ABOUTME: Returns ok when all three config keys are set, degraded otherwise
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::state::SharedState;
use crate::store::{KEY_API_BASE_URL, KEY_API_KEY, KEY_CX_ID};

/// Response for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "ok" when fully configured, "degraded" otherwise
    pub status: &'static str,
    /// Per-key readiness: "set", "unset", or an error string
    pub config: HashMap<String, String>,
}

/// Handle GET /health
///
/// A reachability probe, not an error signal: always HTTP 200. The body
/// says whether the search proxy is fully configured.
pub async fn handle(State(state): State<SharedState>) -> impl IntoResponse {
    let mut config = HashMap::new();
    let mut all_set = true;

    for key in [KEY_API_KEY, KEY_CX_ID, KEY_API_BASE_URL] {
        match state.store().get(key).await {
            Ok(Some(value)) if !value.is_empty() => {
                config.insert(key.to_owned(), "set".to_owned());
            }
            Ok(_) => {
                config.insert(key.to_owned(), "unset".to_owned());
                all_set = false;
            }
            Err(e) => {
                debug!(key, error = %e, "Store read failed during health check");
                config.insert(key.to_owned(), format!("error: {e}"));
                all_set = false;
            }
        }
    }

    let status = if all_set { "ok" } else { "degraded" };
    Json(HealthResponse { status, config })
}
