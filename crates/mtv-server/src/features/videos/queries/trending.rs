//! List trending videos, sorted by views descending

use std::sync::Arc;

use crate::api::response::VideosBody;
use crate::store::ContentStore;

/// Handler returning videos with the trending flag, most-viewed first
#[tracing::instrument(skip(store))]
pub async fn handle(store: Arc<ContentStore>) -> VideosBody {
    let videos = store.get_trending_videos().await;

    tracing::debug!(count = videos.len(), "Trending videos listed");

    VideosBody { videos }
}
