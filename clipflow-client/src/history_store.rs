//! Cached mirror of the server history endpoints.
//!
//! UI surfaces read the cached lists synchronously-after-await; mutations go
//! through the API and refresh the affected list on success, so the cache
//! never diverges from what the server acknowledged.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use clipflow_model::{SearchHistoryEntry, WatchHistoryEntry};

use crate::error::ClientResult;
use crate::history_api::HistoryApi;

pub struct HistoryStore {
    api: Arc<dyn HistoryApi>,
    watch: RwLock<Vec<WatchHistoryEntry>>,
    search: RwLock<Vec<SearchHistoryEntry>>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore").finish_non_exhaustive()
    }
}

impl HistoryStore {
    pub fn new(api: Arc<dyn HistoryApi>) -> Self {
        Self {
            api,
            watch: RwLock::new(Vec::new()),
            search: RwLock::new(Vec::new()),
        }
    }

    /// Fetch both lists from the server, replacing the cached copies.
    pub async fn refresh(&self) -> ClientResult<()> {
        self.refresh_watch().await?;
        self.refresh_search().await
    }

    async fn refresh_watch(&self) -> ClientResult<()> {
        let entries = self.api.watch_history().await?;
        *self.watch.write().await = entries;
        Ok(())
    }

    async fn refresh_search(&self) -> ClientResult<()> {
        let entries = self.api.search_history().await?;
        *self.search.write().await = entries;
        Ok(())
    }

    /// Cached watch history, most recently updated first.
    pub async fn watch_history(&self) -> Vec<WatchHistoryEntry> {
        self.watch.read().await.clone()
    }

    /// Cached search history, most recently used first.
    pub async fn search_history(&self) -> Vec<SearchHistoryEntry> {
        self.search.read().await.clone()
    }

    pub async fn report_progress(&self, video_id: Uuid, progress: i32) -> ClientResult<()> {
        self.api.report_progress(video_id, progress).await?;
        self.refresh_watch().await
    }

    pub async fn remove_watch_entry(&self, video_id: Uuid) -> ClientResult<()> {
        self.api.remove_watch_entry(video_id).await?;
        self.refresh_watch().await
    }

    pub async fn clear_watch_history(&self) -> ClientResult<()> {
        self.api.clear_watch_history().await?;
        self.watch.write().await.clear();
        Ok(())
    }

    /// Pass-through: the currently-watching signal is never cached, it is
    /// only meaningful fresh.
    pub async fn watching_now(&self) -> ClientResult<Option<WatchHistoryEntry>> {
        self.api.watching_now().await
    }

    pub async fn add_search_keyword(&self, keyword: &str) -> ClientResult<()> {
        self.api.add_search_keyword(keyword).await?;
        self.refresh_search().await
    }

    pub async fn remove_search_keyword(&self, keyword: &str) -> ClientResult<()> {
        self.api.remove_search_keyword(keyword).await?;
        self.refresh_search().await
    }

    pub async fn clear_search_history(&self) -> ClientResult<()> {
        self.api.clear_search_history().await?;
        self.search.write().await.clear();
        Ok(())
    }
}
