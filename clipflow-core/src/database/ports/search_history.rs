use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use clipflow_model::SearchHistoryEntry;

#[async_trait]
pub trait SearchHistoryRepository: Send + Sync {
    /// Up to `limit` keywords for the user, most recently used first.
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<SearchHistoryEntry>>;

    /// Insert the keyword or refresh its `updated_at` when already present.
    async fn upsert_keyword(&self, user_id: Uuid, keyword: &str) -> Result<()>;

    /// Delete every keyword beyond the `cap` most recently used, returning
    /// how many were evicted.
    async fn trim_to_most_recent(&self, user_id: Uuid, cap: i64) -> Result<u64>;

    /// Delete one keyword; deleting an absent keyword is a no-op.
    async fn remove(&self, user_id: Uuid, keyword: &str) -> Result<()>;

    /// Delete every keyword for the user, returning how many were removed.
    async fn clear(&self, user_id: Uuid) -> Result<u64>;
}
