//! List videos in a category

use std::sync::Arc;

use crate::api::response::VideosBody;
use crate::store::ContentStore;

/// Handler returning videos whose category exactly matches the argument
/// (case-sensitive); an unknown category yields an empty list, not an error
#[tracing::instrument(skip(store))]
pub async fn handle(store: Arc<ContentStore>, category: &str) -> VideosBody {
    let videos = store.get_videos_by_category(category).await;

    tracing::debug!(category = %category, count = videos.len(), "Videos listed by category");

    VideosBody { videos }
}
