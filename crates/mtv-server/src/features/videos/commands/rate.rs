//! Rate-a-video command
//!
//! The check order matches the public contract: the video must exist (404)
//! before the body shape is judged (400). The body arrives as raw JSON and
//! is deserialized here so a malformed shape reports as a validation
//! failure rather than a framework rejection.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::RatingBody;
use crate::features::shared::validation::{validate_rating, RatingValidationError};
use crate::store::models::NewRating;
use crate::store::ContentStore;

/// Command to rate a video
///
/// The video id comes from the request path; the body supplies the rating
/// value and, optionally, the rating user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateVideoCommand {
    pub rating: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

/// Errors that can occur when rating a video
#[derive(Debug, thiserror::Error)]
pub enum RateVideoError {
    #[error("Video not found")]
    VideoNotFound(i32),

    #[error("Invalid rating data: {0}")]
    InvalidBody(String),

    #[error("Rating validation failed: {0}")]
    RatingValidation(#[from] RatingValidationError),
}

/// Handler for the rate-video command
///
/// Stores the rating and returns it together with the video's recomputed
/// average. Note the deliberate leniency split: the range check happens
/// here, not in the store.
#[tracing::instrument(skip(store, body))]
pub async fn handle(
    store: Arc<ContentStore>,
    video_id: i32,
    body: serde_json::Value,
) -> Result<RatingBody, RateVideoError> {
    store
        .get_video(video_id)
        .await
        .ok_or(RateVideoError::VideoNotFound(video_id))?;

    let command: RateVideoCommand =
        serde_json::from_value(body).map_err(|e| RateVideoError::InvalidBody(e.to_string()))?;

    validate_rating(command.rating)?;

    let rating = store
        .create_rating(NewRating {
            video_id,
            user_id: command.user_id,
            rating: command.rating,
        })
        .await;

    let average_rating = store.get_average_rating(video_id).await;

    tracing::info!(
        rating_id = rating.id,
        video_id,
        value = rating.rating,
        average_rating,
        "Video rated"
    );

    Ok(RatingBody {
        rating,
        average_rating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_rating_stored_and_average_updated() {
        let store = Arc::new(ContentStore::seeded());

        let body = handle(store.clone(), 1, json!({ "rating": 4 })).await.unwrap();
        assert_eq!(body.rating.video_id, 1);
        assert_eq!(body.rating.rating, 4);
        assert_eq!(body.average_rating, 4.0);

        let body = handle(store, 1, json!({ "rating": 5, "userId": 9 })).await.unwrap();
        assert_eq!(body.rating.user_id, Some(9));
        assert_eq!(body.average_rating, 4.5);
    }

    #[tokio::test]
    async fn test_missing_video_rejected_before_validation() {
        let store = Arc::new(ContentStore::seeded());
        // Invalid rating AND missing video: the 404 wins.
        let result = handle(store, 999_999, json!({ "rating": 99 })).await;
        assert!(matches!(result, Err(RateVideoError::VideoNotFound(_))));
    }

    #[tokio::test]
    async fn test_out_of_range_rating_rejected() {
        let store = Arc::new(ContentStore::seeded());
        for value in [0, 6] {
            let result = handle(store.clone(), 1, json!({ "rating": value })).await;
            assert!(
                matches!(result, Err(RateVideoError::RatingValidation(_))),
                "rating {value} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let store = Arc::new(ContentStore::seeded());
        let result = handle(store.clone(), 1, json!({ "rating": "five" })).await;
        assert!(matches!(result, Err(RateVideoError::InvalidBody(_))));

        let result = handle(store, 1, json!({})).await;
        assert!(matches!(result, Err(RateVideoError::InvalidBody(_))));
    }
}
