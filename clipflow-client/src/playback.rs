//! Local playback persistence.
//!
//! Tracks the last-known playback position per (user, video) so the player
//! can resume without asking the server, plus the per-user last-watched
//! pointer and player settings. Positions past 90% of the duration are
//! stored as zero, restarting the video on the next watch.
//!
//! Concurrent writers (multiple player windows) are last-write-wins; no
//! cross-process coordination is attempted.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use clipflow_model::{PlayerSettings, PlayerSettingsUpdate, VideoProgress};

use crate::store::StateStore;

/// Blob key for the per-(user, video) progress map.
pub const VIDEO_PROGRESS_KEY: &str = "userVideoProgress";
/// Blob key for the per-user last-watched pointer map.
pub const LAST_WATCHED_KEY: &str = "lastWatched";
/// Blob key for the per-user player settings map.
pub const PLAYER_SETTINGS_KEY: &str = "playerSettings";

/// Per-user pointer to the most recently played video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastWatched {
    pub video_id: Uuid,
    pub at: DateTime<Utc>,
}

/// Playback-state tracker over a durable local store with an in-memory
/// read-through cache.
pub struct PlaybackTracker {
    store: Arc<dyn StateStore>,
    cache: DashMap<(Uuid, Uuid), VideoProgress>,
}

impl std::fmt::Debug for PlaybackTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackTracker").finish_non_exhaustive()
    }
}

fn progress_key(user_id: Uuid, video_id: Uuid) -> String {
    format!("{user_id}:{video_id}")
}

impl PlaybackTracker {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            cache: DashMap::new(),
        }
    }

    fn load_blob<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.read(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                // Unreadable state is discarded rather than crashing playback
                warn!(key, "Discarding corrupt local state: {}", e);
                T::default()
            }
        }
    }

    fn store_blob<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.write(key, &raw),
            Err(e) => {
                warn!(key, "Failed to serialize local state: {}", e);
                false
            }
        }
    }

    /// Record a playback tick for a video.
    ///
    /// Rejects negative positions and non-positive durations. Applies the
    /// near-completion restart rule before persisting, and refreshes the
    /// user's last-watched pointer. Returns false on validation or store
    /// failure; never panics or propagates an error into the player.
    pub fn save_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        current_time: f64,
        duration: f64,
    ) -> bool {
        if !current_time.is_finite() || !duration.is_finite() {
            warn!(%video_id, "Ignoring non-finite playback position");
            return false;
        }
        if current_time < 0.0 || duration <= 0.0 {
            warn!(
                %video_id,
                current_time, duration, "Ignoring invalid playback position"
            );
            return false;
        }

        let progress = VideoProgress::record(video_id, current_time, duration);

        let mut blob: HashMap<String, VideoProgress> = self.load_blob(VIDEO_PROGRESS_KEY);
        blob.insert(progress_key(user_id, video_id), progress.clone());
        if !self.store_blob(VIDEO_PROGRESS_KEY, &blob) {
            return false;
        }

        let mut pointers: HashMap<Uuid, LastWatched> = self.load_blob(LAST_WATCHED_KEY);
        pointers.insert(
            user_id,
            LastWatched {
                video_id,
                at: progress.last_played_at,
            },
        );
        self.store_blob(LAST_WATCHED_KEY, &pointers);

        self.cache.insert((user_id, video_id), progress);
        true
    }

    /// Last-known progress for a video, consulting the in-memory cache
    /// before the durable store.
    pub fn progress(&self, user_id: Uuid, video_id: Uuid) -> Option<VideoProgress> {
        if let Some(cached) = self.cache.get(&(user_id, video_id)) {
            return Some(cached.clone());
        }

        let blob: HashMap<String, VideoProgress> = self.load_blob(VIDEO_PROGRESS_KEY);
        let progress = blob.get(&progress_key(user_id, video_id)).cloned()?;
        self.cache.insert((user_id, video_id), progress.clone());
        Some(progress)
    }

    /// Remove stored progress for one video, or for every video of the user
    /// when `video_id` is `None`. Nothing-to-remove counts as success.
    pub fn clear_progress(&self, user_id: Uuid, video_id: Option<Uuid>) -> bool {
        let mut blob: HashMap<String, VideoProgress> = self.load_blob(VIDEO_PROGRESS_KEY);
        match video_id {
            Some(video_id) => {
                blob.remove(&progress_key(user_id, video_id));
                self.cache.remove(&(user_id, video_id));
            }
            None => {
                let prefix = format!("{user_id}:");
                blob.retain(|key, _| !key.starts_with(&prefix));
                self.cache.retain(|(uid, _), _| *uid != user_id);
            }
        }
        self.store_blob(VIDEO_PROGRESS_KEY, &blob)
    }

    /// The user's most recently played video, if any.
    pub fn last_watched(&self, user_id: Uuid) -> Option<LastWatched> {
        let pointers: HashMap<Uuid, LastWatched> = self.load_blob(LAST_WATCHED_KEY);
        pointers.get(&user_id).cloned()
    }

    /// Player settings for the user, with defaults when none are stored.
    pub fn settings(&self, user_id: Uuid) -> PlayerSettings {
        let blob: HashMap<Uuid, PlayerSettings> = self.load_blob(PLAYER_SETTINGS_KEY);
        blob.get(&user_id).copied().unwrap_or_default()
    }

    /// Merge a partial settings update into the user's record.
    pub fn update_settings(&self, user_id: Uuid, update: PlayerSettingsUpdate) -> bool {
        let mut blob: HashMap<Uuid, PlayerSettings> = self.load_blob(PLAYER_SETTINGS_KEY);
        let settings = blob.entry(user_id).or_default();
        settings.apply(update);
        self.store_blob(PLAYER_SETTINGS_KEY, &blob)
    }
}
