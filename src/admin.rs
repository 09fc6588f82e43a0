// ABOUTME: /admin handlers — login, logout, and config updates over one URL path
// ABOUTME: Per-request auth state from the session guard; renders login form or panel
//
// SPDX-License-Identifier: Apache-2.0

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::pages;
use crate::session;
use crate::state::SharedState;
use crate::store::{ConfigStore, StoreError, KEY_API_BASE_URL, KEY_API_KEY, KEY_CX_ID, UNSET_PLACEHOLDER};

/// Query string accepted on the admin path
///
/// `status` drives message display only — never an authentication decision.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: Option<String>,
}

/// Form body accepted on POST /admin
///
/// All fields are optional at the wire level; each action validates the
/// fields it needs and anything else falls through to a plain render.
#[derive(Debug, Deserialize)]
pub struct AdminForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub new_api_key: Option<String>,
    #[serde(default)]
    pub new_cx_id: Option<String>,
    #[serde(default)]
    pub new_api_base_url: Option<String>,
}

/// Handle GET /admin — render the panel or the login form
pub async fn show(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
) -> Response {
    let logged_in = request_is_authenticated(&headers, &state);
    render(&state, logged_in, None, query.status.as_deref()).await
}

/// Handle POST /admin — dispatch on the form `action` field
///
/// Mutating actions (`logout`, `update_keys`) are no-ops while anonymous:
/// they fall through to the default render without touching the store or
/// the cookie.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
    Form(form): Form<AdminForm>,
) -> Response {
    let logged_in = request_is_authenticated(&headers, &state);

    match form.action.as_deref() {
        Some("login") => handle_login(&state, &form, logged_in, query.status.as_deref()).await,
        Some("logout") if logged_in => handle_logout(),
        Some("update_keys") if logged_in => {
            if let (Some(api_key), Some(cx_id), Some(base_url)) = (
                form.new_api_key.as_deref(),
                form.new_cx_id.as_deref(),
                form.new_api_base_url.as_deref(),
            ) {
                handle_update_keys(&state, api_key, cx_id, base_url).await
            } else {
                render(&state, logged_in, None, query.status.as_deref()).await
            }
        }
        _ => render(&state, logged_in, None, query.status.as_deref()).await,
    }
}

/// Derive the per-request auth state from the Cookie header
fn request_is_authenticated(headers: &HeaderMap, state: &SharedState) -> bool {
    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    session::is_authenticated(cookie_header, &state.config().session_token)
}

/// Validate submitted credentials and establish a session on success
async fn handle_login(
    state: &SharedState,
    form: &AdminForm,
    logged_in: bool,
    status: Option<&str>,
) -> Response {
    let config = state.config();

    if config.session_token.is_empty() {
        warn!("Login rejected: no session token configured");
        let message = "Authentication is unavailable: no session token is configured.";
        return render(state, logged_in, Some(message), status).await;
    }

    let username_ok = form.username.as_deref() == Some(config.admin_username.as_str());
    let password_ok = form.password.as_deref() == Some(config.admin_password.as_str());

    if username_ok && password_ok {
        info!("Admin login succeeded");
        let cookie = session::issue_cookie(&config.session_token, session::TOKEN_MAX_AGE);
        redirect("/admin", Some(&cookie))
    } else {
        warn!("Admin login failed: credential mismatch");
        render(state, logged_in, Some("Invalid username or password."), status).await
    }
}

/// Revoke the session cookie and bounce back to the login form
fn handle_logout() -> Response {
    info!("Admin logged out");
    redirect("/admin?status=logged_out", Some(&session::revoke_cookie()))
}

/// Write the three config keys and refresh the session cookie
///
/// The three `put`s are independent; a failure part-way through leaves
/// earlier writes in place (no cross-key atomicity, per the store seam).
async fn handle_update_keys(
    state: &SharedState,
    api_key: &str,
    cx_id: &str,
    base_url: &str,
) -> Response {
    let store = state.store();
    let writes = [
        (KEY_API_KEY, api_key),
        (KEY_CX_ID, cx_id),
        (KEY_API_BASE_URL, base_url),
    ];

    for (key, value) in writes {
        if let Err(e) = store.put(key, value).await {
            error!(key, error = %e, "Config store write failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    }

    info!("Search configuration updated");
    let cookie = session::issue_cookie(&state.config().session_token, session::TOKEN_MAX_AGE);
    redirect("/admin?status=config_updated", Some(&cookie))
}

/// Render the page matching the current auth state
///
/// `login_error` takes precedence over any `status`-derived message.
async fn render(
    state: &SharedState,
    logged_in: bool,
    login_error: Option<&str>,
    status: Option<&str>,
) -> Response {
    if logged_in {
        let notice = match status {
            Some("config_updated") => Some("Configuration updated."),
            _ => None,
        };
        match render_panel(state.store(), notice).await {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!(error = %e, "Config store read failed while rendering panel");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    } else {
        let message = login_error.or(match status {
            Some("logged_out") => Some("You have been logged out."),
            _ => None,
        });
        Html(pages::login_form(message)).into_response()
    }
}

/// Read the three keys for display, masking set values
async fn render_panel(store: &dyn ConfigStore, notice: Option<&str>) -> Result<String, StoreError> {
    let api_key = display_value(store, KEY_API_KEY).await?;
    let cx_id = display_value(store, KEY_CX_ID).await?;
    let base_url = display_value(store, KEY_API_BASE_URL).await?;
    Ok(pages::admin_panel(&api_key, &cx_id, &base_url, notice))
}

/// Display form of a stored value: masked when set, placeholder when absent
async fn display_value(store: &dyn ConfigStore, key: &str) -> Result<String, StoreError> {
    Ok(store
        .get(key)
        .await?
        .map_or_else(|| UNSET_PLACEHOLDER.to_owned(), |v| pages::mask_value(&v)))
}

/// Build a 302 redirect to `location`, optionally setting a cookie
fn redirect(location: &str, cookie: Option<&str>) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location);
    if let Some(cookie) = cookie {
        builder = builder.header(header::SET_COOKIE, cookie);
    }
    builder
        .body(axum::body::Body::empty())
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
