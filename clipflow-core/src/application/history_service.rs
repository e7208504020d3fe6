//! Application service for per-user watch and search history.
//!
//! Every operation takes the user id explicitly; there is no ambient session
//! state. Persistence failures are logged and propagated to the caller. The
//! one recoverable case is an empty search keyword, which is returned as a
//! [`KeywordSubmission::RejectedEmpty`] value instead of an error.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::application::unit_of_work::AppUnitOfWork;
use crate::domain::history::{
    KeywordSubmission, SEARCH_HISTORY_CAP, is_watching_now, normalize_keyword,
};
use crate::database::ports::{
    SearchHistoryRepository, VideosRepository, WatchHistoryRepository,
};
use crate::error::{PlatformError, Result};
use clipflow_model::{SearchHistoryEntry, WatchHistoryEntry};

#[derive(Clone)]
pub struct HistoryService {
    watch_history: Arc<dyn WatchHistoryRepository>,
    search_history: Arc<dyn SearchHistoryRepository>,
    videos: Arc<dyn VideosRepository>,
}

impl std::fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryService").finish_non_exhaustive()
    }
}

impl HistoryService {
    pub fn new(unit_of_work: &AppUnitOfWork) -> Self {
        Self {
            watch_history: unit_of_work.watch_history.clone(),
            search_history: unit_of_work.search_history.clone(),
            videos: unit_of_work.videos.clone(),
        }
    }

    /// Watch history for a user, most recently updated first.
    pub async fn watch_history(&self, user_id: Uuid) -> Result<Vec<WatchHistoryEntry>> {
        self.watch_history
            .list_for_user(user_id)
            .await
            .map_err(|e| {
                error!(%user_id, "Failed to load watch history: {}", e);
                e
            })
    }

    /// Record playback progress for a video, creating the history entry on
    /// first report and refreshing it afterwards.
    pub async fn add_watch_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        progress: i32,
    ) -> Result<()> {
        if progress < 0 {
            return Err(PlatformError::Validation(
                "progress must be non-negative".to_string(),
            ));
        }

        // The video must exist before we attach history to it
        if self.videos.get_summary(video_id).await?.is_none() {
            return Err(PlatformError::NotFound(format!(
                "Video {} not found",
                video_id
            )));
        }

        self.watch_history
            .upsert_progress(user_id, video_id, progress)
            .await
            .map_err(|e| {
                error!(%user_id, %video_id, "Failed to record watch progress: {}", e);
                e
            })?;

        debug!(%user_id, %video_id, progress, "Recorded watch progress");
        Ok(())
    }

    /// Remove one history entry. Removing an entry that does not exist is an
    /// error, matching delete-by-unique-key semantics.
    pub async fn remove_watch_entry(&self, user_id: Uuid, video_id: Uuid) -> Result<()> {
        self.watch_history
            .remove(user_id, video_id)
            .await
            .map_err(|e| {
                error!(%user_id, %video_id, "Failed to remove watch entry: {}", e);
                e
            })
    }

    /// Drop every history entry for the user. Safe to call repeatedly.
    pub async fn clear_watch_history(&self, user_id: Uuid) -> Result<()> {
        let removed = self.watch_history.clear(user_id).await.map_err(|e| {
            error!(%user_id, "Failed to clear watch history: {}", e);
            e
        })?;
        debug!(%user_id, removed, "Cleared watch history");
        Ok(())
    }

    /// Derived "currently watching" signal: the most recent entry, but only
    /// while it is both fresh and meaningfully incomplete.
    pub async fn watching_now(&self, user_id: Uuid) -> Result<Option<WatchHistoryEntry>> {
        let latest = self
            .watch_history
            .latest_for_user(user_id)
            .await
            .map_err(|e| {
                error!(%user_id, "Failed to load latest watch entry: {}", e);
                e
            })?;

        Ok(latest.filter(|entry| is_watching_now(entry, Utc::now())))
    }

    /// Recent search keywords, most recently used first.
    pub async fn search_history(&self, user_id: Uuid) -> Result<Vec<SearchHistoryEntry>> {
        self.search_history
            .list_for_user(user_id, SEARCH_HISTORY_CAP)
            .await
            .map_err(|e| {
                error!(%user_id, "Failed to load search history: {}", e);
                e
            })
    }

    /// Record a search keyword, refreshing its recency when already present
    /// and evicting the oldest entries beyond the cap.
    pub async fn add_search_keyword(
        &self,
        user_id: Uuid,
        raw_keyword: &str,
    ) -> Result<KeywordSubmission> {
        let Some(keyword) = normalize_keyword(raw_keyword) else {
            return Ok(KeywordSubmission::RejectedEmpty);
        };

        self.search_history
            .upsert_keyword(user_id, keyword)
            .await
            .map_err(|e| {
                error!(%user_id, keyword, "Failed to record search keyword: {}", e);
                e
            })?;

        let evicted = self
            .search_history
            .trim_to_most_recent(user_id, SEARCH_HISTORY_CAP)
            .await
            .map_err(|e| {
                error!(%user_id, "Failed to trim search history: {}", e);
                e
            })?;
        if evicted > 0 {
            debug!(%user_id, evicted, "Evicted search keywords beyond cap");
        }

        Ok(KeywordSubmission::Accepted)
    }

    pub async fn remove_search_keyword(&self, user_id: Uuid, keyword: &str) -> Result<()> {
        self.search_history
            .remove(user_id, keyword)
            .await
            .map_err(|e| {
                error!(%user_id, keyword, "Failed to remove search keyword: {}", e);
                e
            })
    }

    pub async fn clear_search_history(&self, user_id: Uuid) -> Result<()> {
        let removed = self.search_history.clear(user_id).await.map_err(|e| {
            error!(%user_id, "Failed to clear search history: {}", e);
            e
        })?;
        debug!(%user_id, removed, "Cleared search history");
        Ok(())
    }
}
