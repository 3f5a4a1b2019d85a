/**
 * Logout Handler
 *
 * POST /logout clears the session cookie unconditionally and always
 * succeeds. Tokens are stateless, so the previous token stays valid
 * until its natural expiry; logout only removes it from the client.
 */

use axum::{
    http::{header, HeaderMap},
    response::Json,
};

use crate::auth::cookies::clear_session_cookie;
use crate::auth::handlers::types::StatusResponse;

/// Logout handler
pub async fn logout() -> (HeaderMap, Json<StatusResponse>) {
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, clear_session_cookie());

    (
        headers,
        Json(StatusResponse {
            status: "session cleared".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookies::SESSION_COOKIE;

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let (headers, Json(body)) = logout().await;
        let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}=deleted", SESSION_COOKIE)));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
        assert_eq!(body.status, "session cleared");
    }
}
