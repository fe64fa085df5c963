use http::HeaderValue;

use crate::SESSION_TOKEN_COOKIE_KEY;

/// Extracts the session token cookie from a `Cookie` request header.
pub fn extract_session_token_cookie(value: &HeaderValue) -> Option<String> {
    extract_cookie_by_name(SESSION_TOKEN_COOKIE_KEY, value)
}

/// Extracts a cookie by name from a cookie header value.
pub fn extract_cookie_by_name(name: &str, value: &HeaderValue) -> Option<String> {
    value
        .to_str()
        .ok()?
        .split(';')
        .map(str::trim)
        .filter_map(|cookie| cookie.split_once('='))
        .find_map(|(k, v)| (k == name).then(|| v.to_string()))
}
