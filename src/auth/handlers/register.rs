/**
 * Registration Handler
 *
 * This module implements the account registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Reject empty username or password
 * 2. Check that the username is not taken
 * 3. Hash the password with bcrypt
 * 4. Create the account with role "user"
 * 5. Issue a session token and set the session cookie
 * 6. Return the username and account id
 *
 * Exactly one response is sent for every path through this handler.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (cost factor 10) and never logged
 * - The session token travels only in the HTTP-only cookie and is not
 *   echoed in the registration body
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Json,
};
use sqlx::PgPool;

use crate::auth::accounts::{create_account, get_account_by_username, DEFAULT_ROLE};
use crate::auth::cookies::session_cookie;
use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::sessions::issue_token;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Bcrypt cost factor for newly hashed passwords
const PASSWORD_COST: u32 = 10;

/// Registration handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(config)` - Application configuration (signing secret)
/// * `Json(request)` - Registration request with username and password
///
/// # Returns
///
/// The Set-Cookie header installing the session plus a JSON body with
/// `{username, userId}`, or an `ApiError`
///
/// # Errors
///
/// * `400 validation` - Empty username or password
/// * `409 conflict` - Username already registered
/// * `503 unavailable` - Database not configured
/// * `500 internal` - Hashing or token generation failure
pub async fn register(
    State(pool): State<Option<PgPool>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(HeaderMap, Json<RegisterResponse>), ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::unavailable("database not configured")
    })?;

    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("username or password is empty"));
    }
    tracing::info!("Registration request for: {}", request.username);

    if get_account_by_username(&pool, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Account already exists: {}", request.username);
        return Err(ApiError::conflict("account exists"));
    }

    let password_hash = bcrypt::hash(&request.password, PASSWORD_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("password hashing failed")
    })?;

    let account = create_account(&pool, &request.username, &password_hash, DEFAULT_ROLE).await?;

    let token = issue_token(
        account.id,
        &account.username,
        &account.role,
        &config.jwt_secret,
    )
    .map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::internal("token generation failed")
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, session_cookie(&token));

    tracing::info!("Account registered: {} ({})", account.username, account.id);

    Ok((
        headers,
        Json(RegisterResponse {
            username: account.username,
            user_id: account.id,
        }),
    ))
}
