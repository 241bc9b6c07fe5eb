//! List all videos

use std::sync::Arc;

use crate::api::response::VideosBody;
use crate::store::ContentStore;

/// Handler returning every video in insertion order
#[tracing::instrument(skip(store))]
pub async fn handle(store: Arc<ContentStore>) -> VideosBody {
    let videos = store.get_videos().await;

    tracing::debug!(count = videos.len(), "Videos listed");

    VideosBody { videos }
}
