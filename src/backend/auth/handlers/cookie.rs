/**
 * Session Cookie
 *
 * `Set-Cookie` values for the session token. The dashboard is served from
 * another origin, so the cookie is `SameSite=None` and therefore `Secure`.
 */

use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};

use crate::backend::middleware::auth::TOKEN_COOKIE;

fn cookie_value(token: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; HttpOnly; Secure; SameSite=None; Path=/; Max-Age={}",
        TOKEN_COOKIE, token, max_age_secs
    )
}

/// Headers that set the session cookie
///
/// Fails only if the token contains bytes not allowed in a header.
pub fn session_cookie_headers(
    token: &str,
    max_age_secs: u64,
) -> Result<HeaderMap, axum::http::header::InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie_value(token, max_age_secs))?,
    );
    Ok(headers)
}

/// Headers that expire the session cookie
pub fn clearing_cookie_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_static("token=; HttpOnly; Secure; SameSite=None; Path=/; Max-Age=0"),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let headers = session_cookie_headers("abc.def.ghi", 86_400).unwrap();
        assert_eq!(
            headers.get(SET_COOKIE).unwrap(),
            "token=abc.def.ghi; HttpOnly; Secure; SameSite=None; Path=/; Max-Age=86400"
        );
    }

    #[test]
    fn test_clearing_cookie_matches_session_cookie() {
        let cleared = clearing_cookie_headers();
        assert_eq!(
            cleared.get(SET_COOKIE).unwrap().to_str().unwrap(),
            cookie_value("", 0)
        );
    }

    #[test]
    fn test_invalid_token_bytes_are_rejected() {
        assert!(session_cookie_headers("bad\ntoken", 60).is_err());
    }
}
