/**
 * Session Tokens
 *
 * This module handles session token issuance and verification. Tokens are
 * HS256 JWTs carrying the account id, username and role, signed with the
 * process-wide secret and valid for one hour. They are stateless: nothing
 * is persisted server-side and there is no revocation before expiry.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime in seconds (1 hour)
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Flat role string
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Issue a session token for an account
///
/// # Arguments
/// * `account_id` - Account ID (UUID)
/// * `username` - Username
/// * `role` - Role string
/// * `secret` - Symmetric signing secret
///
/// # Returns
/// Signed token string, or a signing error
pub fn issue_token(
    account_id: uuid::Uuid,
    username: &str,
    role: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: account_id.to_string(),
        username: username.to_owned(),
        role: role.to_owned(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Signature, algorithm and expiry are all checked; any failure means the
/// caller is unauthenticated.
///
/// # Arguments
/// * `token` - Token string
/// * `secret` - Symmetric signing secret
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_token() {
        let account_id = uuid::Uuid::new_v4();
        let result = issue_token(account_id, "alice", "user", SECRET);
        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let account_id = uuid::Uuid::new_v4();
        let token = issue_token(account_id, "alice", "user", SECRET).unwrap();

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = issue_token(uuid::Uuid::new_v4(), "alice", "user", SECRET).unwrap();
        let result = verify_token(&token, "another-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_garbage_token() {
        let result = verify_token("invalid.token.here", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Expired well past the default validation leeway
        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            role: "user".to_string(),
            exp: now - 2 * TOKEN_TTL_SECS,
            iat: now - 3 * TOKEN_TTL_SECS,
        };
        let key = EncodingKey::from_secret(SECRET.as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let result = verify_token(&token, SECRET);
        assert!(result.is_err());
    }
}
