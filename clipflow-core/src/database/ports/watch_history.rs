use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use clipflow_model::WatchHistoryEntry;

#[async_trait]
pub trait WatchHistoryRepository: Send + Sync {
    /// All entries for a user, most recently updated first, joined with the
    /// video summary and its creator.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<WatchHistoryEntry>>;

    /// The single most recently updated entry, if any.
    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<WatchHistoryEntry>>;

    /// Insert or refresh the (user, video) record with the given progress.
    async fn upsert_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        progress: i32,
    ) -> Result<()>;

    /// Delete one record; absence is a `NotFound` error.
    async fn remove(&self, user_id: Uuid, video_id: Uuid) -> Result<()>;

    /// Delete every record for the user, returning how many were removed.
    async fn clear(&self, user_id: Uuid) -> Result<u64>;
}
