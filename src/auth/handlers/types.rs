/**
 * Authentication Handler Types
 *
 * Request and response types shared by the auth handlers. Response field
 * names are camelCase to match the client contract.
 */

use serde::{Deserialize, Serialize};

use crate::auth::sessions::Claims;

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Chosen username
    pub username: String,
    /// Password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username
    pub username: String,
    /// Password (verified against the stored hash)
    pub password: String,
}

/// Registration response
///
/// The session token itself travels only in the Set-Cookie header.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Username of the created account
    pub username: String,
    /// ID of the created account
    pub user_id: uuid::Uuid,
}

/// Login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Username
    pub username: String,
    /// Account ID
    pub user_id: uuid::Uuid,
    /// Flat role string
    pub role: String,
    /// Session token, also set as the session cookie
    pub token: String,
}

/// Plain status response (logout)
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Outcome description
    pub status: String,
}

/// Token verification response
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// Outcome description
    pub status: String,
    /// Decoded token claims
    pub data: Claims,
}
