/**
 * Session Cookie Helpers
 *
 * The session token travels in an `accessToken` cookie: HTTP-only so
 * scripts cannot read it, Secure, and SameSite=None because the client
 * application is served from a different origin.
 */

use axum::http::{HeaderMap, HeaderValue};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "accessToken";

/// Cookie lifetime in seconds, matching the token expiry
pub const SESSION_COOKIE_MAX_AGE_SECS: u64 = 60 * 60;

/// Extract a cookie value by name from request headers
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie = headers.get("cookie").or_else(|| headers.get("Cookie"))?;
    let s = cookie.to_str().ok()?;
    for part in s.split(';') {
        let p = part.trim();
        if let Some(eq) = p.find('=') {
            let (k, v) = p.split_at(eq);
            if k == name {
                return Some(v[1..].to_string());
            }
        }
    }
    None
}

/// Build the Set-Cookie value that installs a session token
pub fn session_cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}={}; Max-Age={}; HttpOnly; Secure; SameSite=None; Path=/",
        SESSION_COOKIE, token, SESSION_COOKIE_MAX_AGE_SECS
    ))
    .unwrap()
}

/// Build the Set-Cookie value that clears the session cookie
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; Secure; SameSite=None; Path=/",
        SESSION_COOKIE
    ))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_parse_cookie_single() {
        let headers = headers_with_cookie("accessToken=abc123");
        assert_eq!(
            parse_cookie(&headers, SESSION_COOKIE),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_parse_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; accessToken=abc123; lang=en");
        assert_eq!(
            parse_cookie(&headers, SESSION_COOKIE),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_parse_cookie_missing() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(parse_cookie(&headers, SESSION_COOKIE), None);
    }

    #[test]
    fn test_parse_cookie_no_header() {
        let headers = HeaderMap::new();
        assert_eq!(parse_cookie(&headers, SESSION_COOKIE), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let value = session_cookie("tok");
        let s = value.to_str().unwrap();
        assert!(s.starts_with("accessToken=tok"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("Secure"));
        assert!(s.contains("SameSite=None"));
        assert!(s.contains("Max-Age=3600"));
    }

    #[test]
    fn test_clear_session_cookie_expires() {
        let value = clear_session_cookie();
        let s = value.to_str().unwrap();
        assert!(s.contains("Expires=Thu, 01 Jan 1970"));
    }

    #[test]
    fn test_round_trip() {
        let set = session_cookie("abc.def.ghi");
        // A client echoes back only the name=value pair
        let pair = set.to_str().unwrap().split(';').next().unwrap().to_string();
        let headers = headers_with_cookie(&pair);
        assert_eq!(
            parse_cookie(&headers, SESSION_COOKIE),
            Some("abc.def.ghi".to_string())
        );
    }
}
