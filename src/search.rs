// ABOUTME: /api/search handler — proxies the public query to the upstream search API
// ABOUTME: Normalizes upstream transport, status, parse, and application errors into JSON envelopes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::SharedState;
use crate::store::{ConfigStore, KEY_API_BASE_URL, KEY_API_KEY, KEY_CX_ID};

/// Maximum number of characters of raw upstream body carried in diagnostics
const SNIPPET_MAX_CHARS: usize = 200;

/// Query string accepted on the search path
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Failure modes of the search proxy pipeline
///
/// Every variant maps to exactly one HTTP status and JSON envelope in
/// `failure_to_response`; nothing propagates past the handler boundary.
#[derive(Debug, Clone)]
pub enum SearchFailure {
    /// The `q` parameter was missing or empty
    MissingParameter,
    /// At least one of the three config keys is absent
    ConfigurationIncomplete,
    /// The config store itself failed on read
    StoreUnavailable(String),
    /// Transport-level failure reaching the upstream API
    UpstreamUnreachable(String),
    /// Upstream answered with a non-success HTTP status
    UpstreamError {
        /// HTTP status code the upstream returned
        upstream_status: u16,
        /// Truncated raw response body for diagnostics
        snippet: String,
    },
    /// Upstream body was not parseable as JSON
    UpstreamMalformedResponse {
        /// Truncated raw response body for diagnostics
        snippet: String,
        /// Parser error text
        debug_info: String,
    },
    /// Parsed body carried an application-level `error` field
    UpstreamApplicationError {
        /// Upstream-provided message or reason
        reason: String,
    },
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter => write!(f, "missing query parameter"),
            Self::ConfigurationIncomplete => write!(f, "search configuration incomplete"),
            Self::StoreUnavailable(msg) => write!(f, "config store unavailable: {msg}"),
            Self::UpstreamUnreachable(msg) => write!(f, "upstream unreachable: {msg}"),
            Self::UpstreamError {
                upstream_status, ..
            } => write!(f, "upstream returned status {upstream_status}"),
            Self::UpstreamMalformedResponse { debug_info, .. } => {
                write!(f, "upstream response unparseable: {debug_info}")
            }
            Self::UpstreamApplicationError { reason } => {
                write!(f, "upstream application error: {reason}")
            }
        }
    }
}

/// Handle GET /api/search
pub async fn handle(State(state): State<SharedState>, Query(params): Query<SearchParams>) -> Response {
    match run_search(&state, params.q.as_deref()).await {
        Ok(body) => json_response(StatusCode::OK, &body),
        Err(failure) => {
            warn!(failure = %failure, "Search request failed");
            failure_to_response(&failure)
        }
    }
}

/// The proxy pipeline: validate, read config, call upstream, normalize
async fn run_search(
    state: &SharedState,
    q: Option<&str>,
) -> Result<serde_json::Value, SearchFailure> {
    let query = match q {
        Some(q) if !q.is_empty() => q,
        _ => return Err(SearchFailure::MissingParameter),
    };

    let store = state.store();
    let api_key = require_key(store, KEY_API_KEY).await?;
    let cx_id = require_key(store, KEY_CX_ID).await?;
    let base_url = require_key(store, KEY_API_BASE_URL).await?;

    debug!(base_url = %base_url, "Dispatching upstream search");

    // reqwest URL-encodes the appended query pairs, including `q`
    let response = state
        .http()
        .get(&base_url)
        .query(&[("key", api_key.as_str()), ("cx", cx_id.as_str()), ("q", query)])
        .send()
        .await
        .map_err(|e| SearchFailure::UpstreamUnreachable(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SearchFailure::UpstreamUnreachable(e.to_string()))?;

    if !status.is_success() {
        return Err(SearchFailure::UpstreamError {
            upstream_status: status.as_u16(),
            snippet: truncate_snippet(&body),
        });
    }

    let parsed: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| SearchFailure::UpstreamMalformedResponse {
            snippet: truncate_snippet(&body),
            debug_info: e.to_string(),
        })?;

    if let Some(error) = parsed.get("error") {
        return Err(SearchFailure::UpstreamApplicationError {
            reason: application_error_reason(error),
        });
    }

    Ok(parsed)
}

/// Read one config key for the proxy; absence or emptiness is incomplete
/// configuration, a store failure is its own mode
async fn require_key(store: &dyn ConfigStore, key: &str) -> Result<String, SearchFailure> {
    match store.get(key).await {
        Ok(Some(value)) if !value.is_empty() => Ok(value),
        Ok(_) => Err(SearchFailure::ConfigurationIncomplete),
        Err(e) => Err(SearchFailure::StoreUnavailable(e.to_string())),
    }
}

/// Pull a human-readable reason out of the upstream `error` field
///
/// The conventional shape is `{"error": {"message": "..."}}`; anything
/// else is carried verbatim.
fn application_error_reason(error: &serde_json::Value) -> String {
    error
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| error.to_string(), str::to_owned)
}

/// Truncate a raw body to a diagnostic-sized prefix
fn truncate_snippet(body: &str) -> String {
    body.chars().take(SNIPPET_MAX_CHARS).collect()
}

/// Map a pipeline failure to its HTTP status and JSON envelope
pub fn failure_to_response(failure: &SearchFailure) -> Response {
    let (status, body) = match failure {
        SearchFailure::MissingParameter => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": "Missing query parameter 'q'." }),
        ),
        SearchFailure::ConfigurationIncomplete => (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({
                "error": "Search configuration is incomplete. Log in to /admin to set the API key, CX ID, and base URL."
            }),
        ),
        SearchFailure::StoreUnavailable(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "error": format!("Config store unavailable: {msg}") }),
        ),
        SearchFailure::UpstreamUnreachable(msg) => (
            StatusCode::BAD_GATEWAY,
            serde_json::json!({ "error": format!("Upstream search API unreachable: {msg}") }),
        ),
        SearchFailure::UpstreamError {
            upstream_status,
            snippet,
        } => (
            StatusCode::BAD_GATEWAY,
            serde_json::json!({
                "error": "Upstream search API returned an error status.",
                "upstream_status": upstream_status,
                "snippet": snippet,
            }),
        ),
        SearchFailure::UpstreamMalformedResponse { snippet, debug_info } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({
                "error": "Upstream search API returned an unparseable response.",
                "snippet": snippet,
                "debug_info": debug_info,
            }),
        ),
        SearchFailure::UpstreamApplicationError { reason } => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "error": "Upstream search API reported an error.",
                "reason": reason,
            }),
        ),
    };
    json_response(status, &body)
}

/// Build a JSON response with an explicit UTF-8 content type
fn json_response(status: StatusCode, body: &serde_json::Value) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body.to_string(),
    )
        .into_response()
}
