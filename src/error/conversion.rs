/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for service errors, allowing
 * handlers to return them directly with `?`.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single field:
 * ```json
 * {
 *   "error": "Invalid email or password."
 * }
 * ```
 *
 * The shape is fixed. Success and failure bodies never share fields, so
 * clients can branch on the presence of `error` alone.
 */

use axum::{
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ServiceError;

impl IntoResponse for ServiceError {
    /// Convert a service error into an HTTP response
    ///
    /// The status code comes from [`ServiceError::status_code`] and the
    /// body is `{"error": <message>}` with no other fields.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_error_body_has_only_error_field() {
        let response = ServiceError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, serde_json::json!({ "error": "Invalid email or password." }));
    }

    #[tokio::test]
    async fn test_conflict_and_invalid_login_share_status() {
        let conflict = ServiceError::EmailExists.into_response();
        let invalid = ServiceError::InvalidCredentials.into_response();
        assert_eq!(conflict.status(), invalid.status());
        assert_eq!(conflict.status(), StatusCode::BAD_REQUEST);
    }
}
