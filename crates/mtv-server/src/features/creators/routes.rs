//! HTTP routes for creators

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::store::ContentStore;

use super::queries::{GetCreatorError, GetCreatorQuery};

pub fn creators_routes() -> Router<Arc<ContentStore>> {
    Router::new()
        .route("/", get(list_creators))
        .route("/:id", get(get_creator))
}

#[tracing::instrument(skip(store))]
async fn list_creators(State(store): State<Arc<ContentStore>>) -> Response {
    let body = super::queries::list::handle(store).await;
    (StatusCode::OK, Json(body)).into_response()
}

#[tracing::instrument(skip(store), fields(id = %id))]
async fn get_creator(
    State(store): State<Arc<ContentStore>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = id
        .parse::<i32>()
        .map_err(|_| ApiError::InvalidId("Invalid creator ID".to_string()))?;
    let body = super::queries::get::handle(store, GetCreatorQuery { id }).await?;
    Ok((StatusCode::OK, Json(body)).into_response())
}

impl From<GetCreatorError> for ApiError {
    fn from(err: GetCreatorError) -> Self {
        match err {
            GetCreatorError::NotFound(_) => ApiError::NotFound("Creator not found".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_conversion() {
        let err: ApiError = GetCreatorError::NotFound(3).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_routes_structure() {
        let router = creators_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
