// ABOUTME: Process-wide configuration built once at startup from the environment
// ABOUTME: Carries admin credentials and the session token secret into shared state
//
// SPDX-License-Identifier: Apache-2.0

/// Environment variable name for the admin username
pub const ADMIN_USERNAME_ENV: &str = "SEARCHGATE_ADMIN_USERNAME";

/// Environment variable name for the admin password
pub const ADMIN_PASSWORD_ENV: &str = "SEARCHGATE_ADMIN_PASSWORD";

/// Environment variable name for the session token secret
pub const SESSION_TOKEN_ENV: &str = "SEARCHGATE_SESSION_TOKEN";

/// Process-wide configuration injected into handlers through shared state
///
/// Read from the environment exactly once at startup. Handlers never read
/// ambient env vars themselves, so tests can construct this directly.
///
/// The session token may be empty; authentication is then permanently
/// unavailable (fail-closed) but the server still serves the public
/// search endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Admin username, compared by exact string equality
    pub admin_username: String,
    /// Admin password, compared by exact string equality
    pub admin_password: String,
    /// Shared secret embedded in the auth cookie
    pub session_token: String,
}

impl AppConfig {
    /// Build configuration from the process environment
    ///
    /// Unset variables become empty strings: empty credentials can never
    /// match a submitted form value together with a configured token, and
    /// an empty token disables authentication outright.
    pub fn from_env() -> Self {
        Self {
            admin_username: std::env::var(ADMIN_USERNAME_ENV).unwrap_or_default(),
            admin_password: std::env::var(ADMIN_PASSWORD_ENV).unwrap_or_default(),
            session_token: std::env::var(SESSION_TOKEN_ENV).unwrap_or_default(),
        }
    }
}
