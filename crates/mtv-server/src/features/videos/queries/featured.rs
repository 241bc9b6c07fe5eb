//! List featured videos

use std::sync::Arc;

use crate::api::response::VideosBody;
use crate::store::ContentStore;

/// Handler returning videos with the featured flag, in insertion order
#[tracing::instrument(skip(store))]
pub async fn handle(store: Arc<ContentStore>) -> VideosBody {
    let videos = store.get_featured_videos().await;

    tracing::debug!(count = videos.len(), "Featured videos listed");

    VideosBody { videos }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_only_featured_videos_returned() {
        let store = Arc::new(ContentStore::seeded());
        let body = handle(store).await;
        assert_eq!(body.videos.len(), 4);
        assert!(body.videos.iter().all(|video| video.is_featured));
    }
}
