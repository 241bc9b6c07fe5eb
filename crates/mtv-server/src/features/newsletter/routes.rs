//! HTTP routes for the newsletter

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiError, FieldError};
use crate::store::ContentStore;

use super::commands::SubscribeError;

pub fn newsletter_routes() -> Router<Arc<ContentStore>> {
    Router::new().route("/subscribe", post(subscribe))
}

#[tracing::instrument(skip(store, body))]
async fn subscribe(
    State(store): State<Arc<ContentStore>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    // Unparseable JSON or a missing content type must still answer with the
    // standard error body, not axum's plain-text rejection.
    let Json(body) = body.map_err(|rejection| {
        ApiError::validation(
            "Invalid subscription data",
            vec![FieldError::new("body", rejection.body_text())],
        )
    })?;
    let response = super::commands::subscribe::handle(store, body).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

impl From<SubscribeError> for ApiError {
    fn from(err: SubscribeError) -> Self {
        match err {
            SubscribeError::InvalidBody(detail) => ApiError::validation(
                "Invalid subscription data",
                vec![FieldError::new("body", detail)],
            ),
            SubscribeError::EmailValidation(e) => ApiError::validation(
                "Invalid subscription data",
                vec![FieldError::new("email", e.to_string())],
            ),
            SubscribeError::AlreadySubscribed(_) => {
                ApiError::BadRequest("Email already subscribed".to_string())
            }
        }
    }
}
