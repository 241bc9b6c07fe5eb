//! Single-creator detail

use std::sync::Arc;

use crate::api::response::CreatorBody;
use crate::store::ContentStore;

/// Query for a single creator by id
#[derive(Debug, Clone, Copy)]
pub struct GetCreatorQuery {
    pub id: i32,
}

/// Errors that can occur when fetching a creator
#[derive(Debug, thiserror::Error)]
pub enum GetCreatorError {
    #[error("Creator not found")]
    NotFound(i32),
}

/// Handler for the creator detail query
#[tracing::instrument(skip(store), fields(creator_id = query.id))]
pub async fn handle(
    store: Arc<ContentStore>,
    query: GetCreatorQuery,
) -> Result<CreatorBody, GetCreatorError> {
    let creator = store
        .get_creator(query.id)
        .await
        .ok_or(GetCreatorError::NotFound(query.id))?;

    tracing::debug!(creator_id = creator.id, "Creator retrieved");

    Ok(CreatorBody { creator })
}
