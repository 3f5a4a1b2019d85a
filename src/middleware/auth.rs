/**
 * Authentication Extractor
 *
 * This module protects routes that require a session. The `AuthUser`
 * extractor reads the session cookie, verifies the token, and hands the
 * decoded identity to the handler; a missing, invalid or expired token
 * rejects the request with 401 before the handler body runs.
 */

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::cookies::{parse_cookie, SESSION_COOKIE};
use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Authenticated identity extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub account_id: Uuid,
    pub username: String,
    pub role: String,
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter to require a valid session:
///
/// ```rust,ignore
/// async fn handler(AuthUser(user): AuthUser) { /* user.account_id ... */ }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<AppConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AppConfig>::from_ref(state);

        let token = parse_cookie(&parts.headers, SESSION_COOKIE).ok_or_else(|| {
            tracing::warn!("Missing session cookie");
            ApiError::authentication("missing session cookie")
        })?;

        let claims = verify_token(&token, &config.jwt_secret).map_err(|e| {
            tracing::warn!("Invalid session token: {:?}", e);
            ApiError::authentication("invalid or expired session token")
        })?;

        let account_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::error!("Invalid account ID in token: {:?}", e);
            ApiError::authentication("invalid session token")
        })?;

        Ok(AuthUser(AuthenticatedUser {
            account_id,
            username: claims.username,
            role: claims.role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::issue_token;
    use crate::server::config::{AppConfig, MediaConfig};
    use axum::http::Request;

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            database_url: None,
            client_origin: None,
            public_dir: "public".to_string(),
            media: MediaConfig {
                upload_url: String::new(),
                upload_preset: String::new(),
                folder: "images".to_string(),
            },
        })
    }

    fn parts_with_cookie(cookie: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/post");
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn test_extract_valid_session() {
        let config = test_config();
        let account_id = Uuid::new_v4();
        let token = issue_token(account_id, "alice", "user", &config.jwt_secret).unwrap();

        let mut parts = parts_with_cookie(Some(&format!("{}={}", SESSION_COOKIE, token)));
        let result = AuthUser::from_request_parts(&mut parts, &config).await;

        let AuthUser(user) = result.unwrap();
        assert_eq!(user.account_id, account_id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, "user");
    }

    #[tokio::test]
    async fn test_extract_missing_cookie() {
        let config = test_config();
        let mut parts = parts_with_cookie(None);

        let result = AuthUser::from_request_parts(&mut parts, &config).await;
        assert!(matches!(result, Err(ApiError::Authentication { .. })));
    }

    #[tokio::test]
    async fn test_extract_invalid_token() {
        let config = test_config();
        let mut parts =
            parts_with_cookie(Some(&format!("{}=not.a.token", SESSION_COOKIE)));

        let result = AuthUser::from_request_parts(&mut parts, &config).await;
        assert!(matches!(result, Err(ApiError::Authentication { .. })));
    }

    #[tokio::test]
    async fn test_extract_token_signed_with_other_secret() {
        let config = test_config();
        let token = issue_token(Uuid::new_v4(), "alice", "user", "other-secret").unwrap();

        let mut parts = parts_with_cookie(Some(&format!("{}={}", SESSION_COOKIE, token)));
        let result = AuthUser::from_request_parts(&mut parts, &config).await;
        assert!(matches!(result, Err(ApiError::Authentication { .. })));
    }
}
