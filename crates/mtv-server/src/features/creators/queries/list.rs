//! List all creators

use std::sync::Arc;

use crate::api::response::CreatorsBody;
use crate::store::ContentStore;

/// Handler returning every creator in insertion order
#[tracing::instrument(skip(store))]
pub async fn handle(store: Arc<ContentStore>) -> CreatorsBody {
    let creators = store.get_creators().await;

    tracing::debug!(count = creators.len(), "Creators listed");

    CreatorsBody { creators }
}
