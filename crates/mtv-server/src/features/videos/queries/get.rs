//! Single-video detail
//!
//! Looking at a video counts as watching it: the query increments the view
//! count as a side effect and reports the video's average rating alongside
//! the entity. The response carries the video as it was fetched, so the
//! increment becomes visible on the next read.

use std::sync::Arc;

use crate::api::response::VideoDetailBody;
use crate::store::ContentStore;

/// Query for a single video by id
#[derive(Debug, Clone, Copy)]
pub struct GetVideoQuery {
    pub id: i32,
}

/// Errors that can occur when fetching a video
#[derive(Debug, thiserror::Error)]
pub enum GetVideoError {
    #[error("Video not found")]
    NotFound(i32),
}

/// Handler for the video detail query
#[tracing::instrument(skip(store), fields(video_id = query.id))]
pub async fn handle(
    store: Arc<ContentStore>,
    query: GetVideoQuery,
) -> Result<VideoDetailBody, GetVideoError> {
    let video = store
        .get_video(query.id)
        .await
        .ok_or(GetVideoError::NotFound(query.id))?;

    // View increment is a side effect of fetching the detail page.
    store.update_video_views(query.id).await;

    let average_rating = store.get_average_rating(query.id).await;

    tracing::debug!(video_id = video.id, average_rating, "Video retrieved");

    Ok(VideoDetailBody {
        video,
        average_rating,
    })
}
