// ABOUTME: Cookie-based session guard for the admin console
// ABOUTME: Pure functions deriving auth state from the Cookie header and building Set-Cookie values
//
// SPDX-License-Identifier: Apache-2.0

/// Cookie name carrying the session token
pub const AUTH_COOKIE_NAME: &str = "AUTH_TOKEN";

/// Sentinel value written when revoking the cookie
pub const REVOKED_VALUE: &str = "deleted";

/// Cookie lifetime in seconds (one hour)
pub const TOKEN_MAX_AGE: u32 = 3600;

/// Path scope for the auth cookie
const COOKIE_PATH: &str = "/admin";

/// Decide whether a request is authenticated
///
/// True iff `expected_token` is non-empty and the cookie list contains the
/// exact pair `AUTH_TOKEN=<expected_token>`. An unset token means
/// authentication is permanently unavailable (fail-closed), regardless of
/// what the client sends.
pub fn is_authenticated(cookie_header: &str, expected_token: &str) -> bool {
    if expected_token.is_empty() {
        return false;
    }
    cookie_header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.strip_prefix(AUTH_COOKIE_NAME))
        .filter_map(|rest| rest.strip_prefix('='))
        .any(|value| value == expected_token)
}

/// Build the Set-Cookie value that establishes a session
///
/// Scoped to the admin path, HTTP-only and secure, with the given max age.
pub fn issue_cookie(token: &str, max_age: u32) -> String {
    format!("{AUTH_COOKIE_NAME}={token}; HttpOnly; Secure; Max-Age={max_age}; Path={COOKIE_PATH}")
}

/// Build the Set-Cookie value that forces client-side deletion
///
/// Overwrites the token with a sentinel, zeroes the max age, and sets an
/// expiry in the past for clients that ignore Max-Age.
pub fn revoke_cookie() -> String {
    format!(
        "{AUTH_COOKIE_NAME}={REVOKED_VALUE}; HttpOnly; Secure; Max-Age=0; Path={COOKIE_PATH}; \
         Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "long-opaque-secret";

    #[test]
    fn matching_pair_authenticates() {
        let header = format!("AUTH_TOKEN={TOKEN}");
        assert!(is_authenticated(&header, TOKEN));
    }

    #[test]
    fn matching_pair_among_other_cookies_authenticates() {
        let header = format!("theme=dark; AUTH_TOKEN={TOKEN}; lang=en");
        assert!(is_authenticated(&header, TOKEN));
    }

    #[test]
    fn empty_header_is_anonymous() {
        assert!(!is_authenticated("", TOKEN));
    }

    #[test]
    fn wrong_value_is_anonymous() {
        assert!(!is_authenticated("AUTH_TOKEN=wrong", TOKEN));
    }

    #[test]
    fn wrong_cookie_name_is_anonymous() {
        let header = format!("XAUTH_TOKEN={TOKEN}");
        assert!(!is_authenticated(&header, TOKEN));
    }

    #[test]
    fn unset_token_fails_closed() {
        // Even a cookie claiming an empty token must not authenticate
        assert!(!is_authenticated("AUTH_TOKEN=", ""));
        assert!(!is_authenticated("AUTH_TOKEN=anything", ""));
    }

    #[test]
    fn issued_cookie_carries_token_and_scope() {
        let cookie = issue_cookie(TOKEN, TOKEN_MAX_AGE);
        assert!(cookie.starts_with(&format!("AUTH_TOKEN={TOKEN};")));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("Path=/admin"));
    }

    #[test]
    fn revoked_cookie_deletes() {
        let cookie = revoke_cookie();
        assert!(cookie.starts_with("AUTH_TOKEN=deleted;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
    }

    #[test]
    fn issued_cookie_round_trips_through_guard() {
        let cookie = issue_cookie(TOKEN, TOKEN_MAX_AGE);
        // A browser echoes back only the name=value pair
        let pair = cookie.split(';').next().unwrap();
        assert!(is_authenticated(pair, TOKEN));
    }
}
