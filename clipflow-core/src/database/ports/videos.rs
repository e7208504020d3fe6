use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use clipflow_model::VideoSummary;

/// Read-only catalog lookup consumed by the history service.
#[async_trait]
pub trait VideosRepository: Send + Sync {
    async fn get_summary(&self, video_id: Uuid) -> Result<Option<VideoSummary>>;
}
