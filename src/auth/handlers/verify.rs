/**
 * Token Verification Handler
 *
 * This module implements the handler for POST /verify-token, which the
 * client calls on load to decide whether it still has a live session.
 *
 * # Verification
 *
 * The session cookie is read from the request; an absent cookie, a bad
 * signature and an expired token are all the same 401 to the caller.
 * A valid token returns its decoded claims.
 */

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::cookies::{parse_cookie, SESSION_COOKIE};
use crate::auth::handlers::types::VerifyResponse;
use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Token verification handler
///
/// # Arguments
///
/// * `State(config)` - Application configuration (signing secret)
/// * `headers` - Request headers (to read the session cookie)
///
/// # Returns
///
/// JSON response with the decoded claims, or `401 authentication`
pub async fn verify_session(
    State(config): State<Arc<AppConfig>>,
    headers: HeaderMap,
) -> Result<Json<VerifyResponse>, ApiError> {
    let token = parse_cookie(&headers, SESSION_COOKIE).ok_or_else(|| {
        tracing::warn!("Missing session cookie");
        ApiError::authentication("authorization failed")
    })?;

    let claims = verify_token(&token, &config.jwt_secret).map_err(|e| {
        tracing::warn!("Invalid session token: {:?}", e);
        ApiError::authentication("authorization failed")
    })?;

    Ok(Json(VerifyResponse {
        status: "success".to_string(),
        data: claims,
    }))
}
