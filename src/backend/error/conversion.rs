/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from Axum handlers.
 *
 * # Response Format
 *
 * Error responses are JSON with the structure:
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The response body is a JSON object with a single `error` field; the
    /// status code comes from `ApiError::status_code`.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({ "error": message });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"error":"{}"}}"#, message),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
