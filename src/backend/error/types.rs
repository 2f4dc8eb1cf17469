/**
 * Backend Error Types
 *
 * This module defines the request-level error taxonomy. Each variant maps
 * to one HTTP status code:
 *
 * - `Validation`   - 400 - missing or empty required field
 * - `Conflict`     - 400 - duplicate username
 * - `Unauthorized` - 401 - bad credentials or missing/wrong admin key
 * - `Forbidden`    - 403 - deleting a protected admin account
 * - `NotFound`     - 404 - id lookup miss
 * - `Store`        - 500 - remote document load/save failure
 *
 * There is no distinction between a transient store outage and a permanent
 * one; both surface as 500 and callers retry the whole request.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::client::StoreError;

/// Request-level error type
///
/// This enum represents all errors a handler or the coordinator can produce.
/// Each variant carries a human-readable message and converts to an HTTP
/// response via `IntoResponse` (see `error::conversion`).
///
/// # Usage
///
/// ```rust
/// use binfolio::backend::error::ApiError;
///
/// let err = ApiError::validation("Title and description are required");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// No record with the requested id exists in the collection
    #[error("{0}")]
    NotFound(String),

    /// A collection invariant would be violated (duplicate username)
    #[error("{0}")]
    Conflict(String),

    /// The operation targets a protected record
    #[error("{0}")]
    Forbidden(String),

    /// Bad credentials, or the admin key is missing or wrong
    #[error("{0}")]
    Unauthorized(String),

    /// The remote document store failed to load or save
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` / `Conflict` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Store` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Forbidden(message)
            | Self::Unauthorized(message) => message.clone(),
            Self::Store(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("dup").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("admin").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let err = ApiError::from(StoreError::Unavailable("bin fetch failed".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message() {
        let err = ApiError::not_found("Project 42 not found");
        assert_eq!(err.message(), "Project 42 not found");
    }
}
