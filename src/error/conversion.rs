/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `ApiError`,
 * allowing handlers to return errors directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "kind": "not_found",
 *   "message": "no post with that id"
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert a handler error into an HTTP response
    ///
    /// The response carries the status code from `status_code()` and a
    /// JSON body with the stable `kind` string and the error message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({
            "kind": self.kind(),
            "message": message,
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(|_| {
                format!(r#"{{"kind":"internal","message":"{}"}}"#, status.as_u16())
            })))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status() {
        let response = ApiError::not_found("no post with that id").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_authentication_response_status() {
        let response = ApiError::authentication("authorization failed").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
