//! List most-moronic videos, sorted by rank ascending

use std::sync::Arc;

use crate::api::response::VideosBody;
use crate::store::ContentStore;

/// Handler returning the most-moronic leaderboard, best (lowest) rank first;
/// unranked videos come last
#[tracing::instrument(skip(store))]
pub async fn handle(store: Arc<ContentStore>) -> VideosBody {
    let videos = store.get_most_moronic_videos().await;

    tracing::debug!(count = videos.len(), "Most-moronic videos listed");

    VideosBody { videos }
}
