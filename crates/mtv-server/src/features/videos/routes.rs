//! HTTP routes for the video catalog

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiError, FieldError};
use crate::store::ContentStore;

use super::commands::RateVideoError;
use super::queries::GetVideoError;

pub fn videos_routes() -> Router<Arc<ContentStore>> {
    Router::new()
        .route("/", get(list_videos))
        .route("/featured", get(featured_videos))
        .route("/trending", get(trending_videos))
        .route("/most-moronic", get(most_moronic_videos))
        .route("/category/:category", get(videos_by_category))
        .route("/:id", get(get_video))
        .route("/:id/rate", post(rate_video))
}

#[tracing::instrument(skip(store))]
async fn list_videos(State(store): State<Arc<ContentStore>>) -> Response {
    let body = super::queries::list::handle(store).await;
    (StatusCode::OK, Json(body)).into_response()
}

#[tracing::instrument(skip(store))]
async fn featured_videos(State(store): State<Arc<ContentStore>>) -> Response {
    let body = super::queries::featured::handle(store).await;
    (StatusCode::OK, Json(body)).into_response()
}

#[tracing::instrument(skip(store))]
async fn trending_videos(State(store): State<Arc<ContentStore>>) -> Response {
    let body = super::queries::trending::handle(store).await;
    (StatusCode::OK, Json(body)).into_response()
}

#[tracing::instrument(skip(store))]
async fn most_moronic_videos(State(store): State<Arc<ContentStore>>) -> Response {
    let body = super::queries::most_moronic::handle(store).await;
    (StatusCode::OK, Json(body)).into_response()
}

#[tracing::instrument(skip(store), fields(category = %category))]
async fn videos_by_category(
    State(store): State<Arc<ContentStore>>,
    Path(category): Path<String>,
) -> Response {
    let body = super::queries::by_category::handle(store, &category).await;
    (StatusCode::OK, Json(body)).into_response()
}

#[tracing::instrument(skip(store), fields(id = %id))]
async fn get_video(
    State(store): State<Arc<ContentStore>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_video_id(&id)?;
    let body = super::queries::get::handle(store, super::queries::GetVideoQuery { id }).await?;
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[tracing::instrument(skip(store, body), fields(id = %id))]
async fn rate_video(
    State(store): State<Arc<ContentStore>>,
    Path(id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_video_id(&id)?;
    // Unparseable JSON or a missing content type must still answer with the
    // standard error body, not axum's plain-text rejection.
    let Json(body) = body.map_err(|rejection| {
        ApiError::validation(
            "Invalid rating data",
            vec![FieldError::new("body", rejection.body_text())],
        )
    })?;
    let response = super::commands::rate::handle(store, id, body).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

// Path ids are extracted as strings so a non-numeric id reports as a 400
// rather than a framework-level rejection.
fn parse_video_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::InvalidId("Invalid video ID".to_string()))
}

impl From<GetVideoError> for ApiError {
    fn from(err: GetVideoError) -> Self {
        match err {
            GetVideoError::NotFound(_) => ApiError::NotFound("Video not found".to_string()),
        }
    }
}

impl From<RateVideoError> for ApiError {
    fn from(err: RateVideoError) -> Self {
        match err {
            RateVideoError::VideoNotFound(_) => {
                ApiError::NotFound("Video not found".to_string())
            }
            RateVideoError::InvalidBody(detail) => ApiError::validation(
                "Invalid rating data",
                vec![FieldError::new("body", detail)],
            ),
            RateVideoError::RatingValidation(e) => ApiError::validation(
                "Invalid rating data",
                vec![FieldError::new("rating", e.to_string())],
            ),
        }
    }
}
