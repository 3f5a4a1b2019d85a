/**
 * Login Handler
 *
 * This module implements the account authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Reject empty username or password
 * 2. Look up the account by username
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a session token and set the session cookie
 * 5. Return username, account id, role and the token
 *
 * # Security
 *
 * - An unknown username and a wrong password produce the same 401; the
 *   account lookup is checked for existence before any field is read
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Json,
};
use sqlx::PgPool;

use crate::auth::accounts::get_account_by_username;
use crate::auth::cookies::session_cookie;
use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::issue_token;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Login handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(config)` - Application configuration (signing secret)
/// * `Json(request)` - Login request with username and password
///
/// # Returns
///
/// The Set-Cookie header installing the session plus a JSON body with
/// `{username, userId, role, token}`, or an `ApiError`
///
/// # Errors
///
/// * `400 validation` - Empty username or password
/// * `401 authentication` - Unknown username or wrong password
/// * `503 unavailable` - Database not configured
/// * `500 internal` - Hash comparison or token generation failure
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<LoginResponse>), ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::unavailable("database not configured")
    })?;

    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("username or password is empty"));
    }
    tracing::info!("Login request for: {}", request.username);

    let account = get_account_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Account not found: {}", request.username);
            ApiError::authentication("login failed")
        })?;

    let valid = bcrypt::verify(&request.password, &account.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for account: {}", request.username);
        return Err(ApiError::authentication("login failed"));
    }

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

    tracing::info!("Account logged in: {} ({})", account.username, account.id);

    Ok((
        headers,
        Json(LoginResponse {
            username: account.username,
            user_id: account.id,
            role: account.role,
            token,
        }),
    ))
}
