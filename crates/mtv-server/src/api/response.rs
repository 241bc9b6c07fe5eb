//! API response types
//!
//! Standard response bodies for the MORONS.TV API. Success payloads wrap
//! entities under a named field (`videos`, `video`, `creators`, ...) plus,
//! where relevant, the derived `averageRating`. Error responses carry a
//! `message` string and an optional `errors` array with field details.

use serde::Serialize;

use crate::error::FieldError;
use crate::store::models::{Creator, Rating, Subscription, Video};

/// `{ "videos": [...] }`
#[derive(Debug, Serialize)]
pub struct VideosBody {
    pub videos: Vec<Video>,
}

/// `{ "video": {...}, "averageRating": 4.5 }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetailBody {
    pub video: Video,
    pub average_rating: f64,
}

/// `{ "creators": [...] }`
#[derive(Debug, Serialize)]
pub struct CreatorsBody {
    pub creators: Vec<Creator>,
}

/// `{ "creator": {...} }`
#[derive(Debug, Serialize)]
pub struct CreatorBody {
    pub creator: Creator,
}

/// `{ "rating": {...}, "averageRating": 4.5 }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBody {
    pub rating: Rating,
    pub average_rating: f64,
}

/// `{ "subscription": {...}, "message": "..." }`
#[derive(Debug, Serialize)]
pub struct SubscriptionBody {
    pub subscription: Subscription,
    pub message: String,
}

/// Standard error body: `{ "message": "...", "errors": [...]? }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    /// Error body with just a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    /// Error body with field-level validation details
    pub fn with_errors(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_omits_empty_errors() {
        let body = ErrorBody::message("Video not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Video not found");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_error_body_includes_field_errors() {
        let body = ErrorBody::with_errors(
            "Invalid rating data",
            vec![FieldError::new("rating", "Rating must be between 1 and 5")],
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["errors"][0]["field"], "rating");
    }
}
