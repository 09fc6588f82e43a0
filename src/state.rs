// ABOUTME: Shared server state holding process config, the config store, and the HTTP client
// ABOUTME: Stateless per-request handling; no cross-request mutable state lives here
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::ConfigStore;

/// Shared server state handle
pub type SharedState = Arc<AppState>;

/// Server state injected into every handler
///
/// All fields are immutable for the process lifetime. The reqwest client
/// holds the connection pool for upstream calls and is cheap to share.
pub struct AppState {
    config: AppConfig,
    store: Arc<dyn ConfigStore>,
    http: reqwest::Client,
}

impl AppState {
    /// Create server state from process config and a config store
    pub fn new(config: AppConfig, store: Arc<dyn ConfigStore>) -> Self {
        Self {
            config,
            store,
            http: reqwest::Client::new(),
        }
    }

    /// Process-wide configuration (credentials, session token)
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The durable key/value store holding search configuration
    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    /// HTTP client for upstream calls
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
