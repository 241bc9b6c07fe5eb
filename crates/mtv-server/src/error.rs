//! Server-specific error types
//!
//! All request failures funnel into [`ApiError`], which maps the error
//! taxonomy onto HTTP statuses: malformed identifier -> 400, entity not
//! found -> 404, body validation failure -> 400 with field details, anything
//! unexpected -> 500 with a generic message. The content store itself never
//! produces errors; lookups that find nothing return `None` and the calling
//! layer decides what that means.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::api::response::ErrorBody;

/// Result type alias for API handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// A single field-level validation failure, reported in the `errors` array
/// of a 400 response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// A path parameter that should be an integer id was not one
    #[error("{0}")]
    InvalidId(String),

    /// The requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request body failed shape validation
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// The request was well-formed but rejected (e.g. duplicate subscribe)
    #[error("{0}")]
    BadRequest(String),

    /// Any unexpected internal fault
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Errors bubbling up from the shared library
    #[error("{0}")]
    Common(#[from] mtv_common::MtvError),
}

impl ApiError {
    /// Validation error with field details
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        ApiError::Validation {
            message: message.into(),
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidId(ref message) => {
                (StatusCode::BAD_REQUEST, ErrorBody::message(message))
            },
            ApiError::NotFound(ref message) => {
                (StatusCode::NOT_FOUND, ErrorBody::message(message))
            },
            ApiError::Validation {
                ref message,
                ref errors,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_errors(message, errors.clone()),
            ),
            ApiError::BadRequest(ref message) => {
                (StatusCode::BAD_REQUEST, ErrorBody::message(message))
            },
            ApiError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Internal server error"),
                )
            },
            ApiError::Common(ref err) => match err {
                mtv_common::MtvError::VideoNotFound(_) => {
                    (StatusCode::NOT_FOUND, ErrorBody::message("Video not found"))
                },
                mtv_common::MtvError::CreatorNotFound(_) => {
                    (StatusCode::NOT_FOUND, ErrorBody::message("Creator not found"))
                },
                mtv_common::MtvError::Validation(ref message) => {
                    (StatusCode::BAD_REQUEST, ErrorBody::message(message))
                },
                _ => {
                    tracing::error!("Unhandled error: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorBody::message("Internal server error"),
                    )
                },
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_invalid_id_maps_to_400() {
        let response = ApiError::InvalidId("Invalid video ID".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("Video not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let errors = vec![FieldError::new("rating", "Rating must be between 1 and 5")];
        let response = ApiError::validation("Invalid rating data", errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_common_not_found_maps_to_404() {
        let err: ApiError = mtv_common::MtvError::VideoNotFound(9).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
