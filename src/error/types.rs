/**
 * Handler Error Types
 *
 * This module defines the error taxonomy for the HTTP surface. Handlers
 * translate every store, uploader and token failure into one of these
 * variants; nothing is allowed to crash the process.
 *
 * # Status Mapping
 *
 * - `Validation` - 400 Bad Request (missing or malformed input)
 * - `Conflict` - 409 Conflict (duplicate username)
 * - `Authentication` - 401 Unauthorized (bad credentials, missing/invalid token)
 * - `NotFound` - 404 Not Found (no such resource)
 * - `Permission` - 403 Forbidden (valid session, wrong owner)
 * - `Upload` - 500 Internal Server Error (media host failure)
 * - `Database` - 500 Internal Server Error (store failure)
 * - `Unavailable` - 503 Service Unavailable (database not configured)
 * - `Internal` - 500 Internal Server Error (anything else)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::media::uploader::UploadError;

/// Errors produced by HTTP handlers
///
/// Each variant carries a human-readable message and maps to a fixed
/// HTTP status code and a stable `kind` string used in response bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// The request conflicts with existing state (e.g. duplicate username)
    #[error("conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials or a missing/invalid/expired session token
    #[error("authentication failed: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// The requested resource does not exist
    #[error("not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The session is valid but does not own the resource
    #[error("permission denied: {message}")]
    Permission {
        /// Human-readable error message
        message: String,
    },

    /// Media host failure while uploading an image
    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),

    /// Document store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The database is not configured, data endpoints cannot answer
    #[error("service unavailable: {message}")]
    Unavailable {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure with no more specific classification
    #[error("internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission error
    pub fn permission(message: impl Into<String>) -> Self {
        Self::Permission {
            message: message.into(),
        }
    }

    /// Create a service-unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Permission { .. } => StatusCode::FORBIDDEN,
            Self::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable kind string used in error response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Conflict { .. } => "conflict",
            Self::Authentication { .. } => "authentication",
            Self::NotFound { .. } => "not_found",
            Self::Permission { .. } => "permission",
            Self::Upload(_) => "upload",
            Self::Database(_) => "database",
            Self::Unavailable { .. } => "unavailable",
            Self::Internal { .. } => "internal",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Authentication { message }
            | Self::NotFound { message }
            | Self::Permission { message }
            | Self::Unavailable { message }
            | Self::Internal { message } => message.clone(),
            Self::Upload(err) => err.to_string(),
            Self::Database(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("username or password is empty");
        match error {
            ApiError::Validation { message } => {
                assert_eq!(message, "username or password is empty");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::permission("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::unavailable("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(ApiError::validation("x").kind(), "validation");
        assert_eq!(ApiError::conflict("x").kind(), "conflict");
        assert_eq!(ApiError::authentication("x").kind(), "authentication");
        assert_eq!(ApiError::not_found("x").kind(), "not_found");
        assert_eq!(ApiError::permission("x").kind(), "permission");
        assert_eq!(ApiError::unavailable("x").kind(), "unavailable");
        assert_eq!(ApiError::internal("x").kind(), "internal");
    }

    #[test]
    fn test_from_upload_error() {
        let error: ApiError = UploadError::MalformedResponse.into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.kind(), "upload");
    }

    #[test]
    fn test_error_message() {
        let error = ApiError::conflict("account exists");
        assert!(error.message().contains("account exists"));
    }
}
