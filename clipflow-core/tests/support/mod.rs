//! In-memory repository fakes backing the service-level tests.
//!
//! A single shared state mimics the relational store; a logical clock makes
//! recency ordering deterministic even for rapid successive writes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use clipflow_core::database::ports::{
    SearchHistoryRepository, UsersRepository, VideosRepository,
    WatchHistoryRepository,
};
use clipflow_core::error::{PlatformError, Result};
use clipflow_core::AppUnitOfWork;
use clipflow_model::{CreatorSummary, SearchHistoryEntry, User, VideoSummary, WatchHistoryEntry};

#[derive(Default)]
struct State {
    videos: HashMap<Uuid, VideoSummary>,
    users: HashMap<Uuid, User>,
    // (user, video) -> (progress, created_at, updated_at)
    watch: HashMap<(Uuid, Uuid), (i32, DateTime<Utc>, DateTime<Utc>)>,
    // (user, keyword) -> updated_at
    search: HashMap<(Uuid, String), DateTime<Utc>>,
}

/// Shared fake persistence backend.
#[derive(Clone)]
pub struct TestBackend {
    state: Arc<Mutex<State>>,
    base: DateTime<Utc>,
    ticks: Arc<AtomicI64>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            base: Utc::now(),
            ticks: Arc::new(AtomicI64::new(0)),
        }
    }

    fn tick(&self) -> DateTime<Utc> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::milliseconds(n)
    }

    pub fn unit_of_work(&self) -> AppUnitOfWork {
        AppUnitOfWork {
            watch_history: Arc::new(self.clone()),
            search_history: Arc::new(self.clone()),
            videos: Arc::new(self.clone()),
            users: Arc::new(self.clone()),
        }
    }

    pub fn seed_user(&self, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            nickname: None,
            avatar_url: None,
            created_at: self.base,
            is_active: true,
        };
        self.state
            .lock()
            .unwrap()
            .users
            .insert(user.id, user.clone());
        user
    }

    pub fn seed_video(&self, title: &str, duration: i32) -> VideoSummary {
        let creator = self.seed_user(&format!("creator_{}", title));
        let video = VideoSummary {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            duration,
            cover_url: None,
            view_count: 0,
            creator: CreatorSummary {
                id: creator.id,
                username: creator.username,
                nickname: None,
                avatar_url: None,
            },
        };
        self.state
            .lock()
            .unwrap()
            .videos
            .insert(video.id, video.clone());
        video
    }

    /// Backdate an entry's `updated_at`, for recency-window tests.
    pub fn age_watch_entry(&self, user_id: Uuid, video_id: Uuid, by: Duration) {
        let mut state = self.state.lock().unwrap();
        if let Some((_, _, updated_at)) = state.watch.get_mut(&(user_id, video_id)) {
            *updated_at -= by;
        }
    }

    fn entry(&self, state: &State, key: &(Uuid, Uuid)) -> Option<WatchHistoryEntry> {
        let (progress, created_at, updated_at) = state.watch.get(key)?;
        let video = state.videos.get(&key.1)?.clone();
        Some(WatchHistoryEntry {
            video,
            progress: *progress,
            created_at: *created_at,
            updated_at: *updated_at,
        })
    }
}

#[async_trait]
impl WatchHistoryRepository for TestBackend {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<WatchHistoryEntry>> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<WatchHistoryEntry> = state
            .watch
            .keys()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|key| self.entry(&state, key))
            .collect();
        entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(entries)
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<WatchHistoryEntry>> {
        Ok(WatchHistoryRepository::list_for_user(self, user_id)
            .await?
            .into_iter()
            .next())
    }

    async fn upsert_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        progress: i32,
    ) -> Result<()> {
        let now = self.tick();
        let mut state = self.state.lock().unwrap();
        state
            .watch
            .entry((user_id, video_id))
            .and_modify(|(p, _, updated_at)| {
                *p = progress;
                *updated_at = now;
            })
            .or_insert((progress, now, now));
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, video_id: Uuid) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.watch.remove(&(user_id, video_id)).is_none() {
            return Err(PlatformError::NotFound(format!(
                "No watch entry for video {}",
                video_id
            )));
        }
        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.watch.len();
        state.watch.retain(|(uid, _), _| *uid != user_id);
        Ok((before - state.watch.len()) as u64)
    }
}

#[async_trait]
impl SearchHistoryRepository for TestBackend {
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<SearchHistoryEntry>> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<SearchHistoryEntry> = state
            .search
            .iter()
            .filter(|((uid, _), _)| *uid == user_id)
            .map(|((_, keyword), updated_at)| SearchHistoryEntry {
                keyword: keyword.clone(),
                updated_at: *updated_at,
            })
            .collect();
        entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn upsert_keyword(&self, user_id: Uuid, keyword: &str) -> Result<()> {
        let now = self.tick();
        self.state
            .lock()
            .unwrap()
            .search
            .insert((user_id, keyword.to_string()), now);
        Ok(())
    }

    async fn trim_to_most_recent(&self, user_id: Uuid, cap: i64) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let mut stamps: Vec<DateTime<Utc>> = state
            .search
            .iter()
            .filter(|((uid, _), _)| *uid == user_id)
            .map(|(_, updated_at)| *updated_at)
            .collect();
        stamps.sort_by(|a, b| b.cmp(a));
        let Some(cutoff) = stamps.get(cap as usize - 1).copied() else {
            return Ok(0);
        };
        let before = state.search.len();
        state
            .search
            .retain(|(uid, _), updated_at| *uid != user_id || *updated_at >= cutoff);
        Ok((before - state.search.len()) as u64)
    }

    async fn remove(&self, user_id: Uuid, keyword: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .search
            .remove(&(user_id, keyword.to_string()));
        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.search.len();
        state.search.retain(|(uid, _), _| *uid != user_id);
        Ok((before - state.search.len()) as u64)
    }
}

#[async_trait]
impl VideosRepository for TestBackend {
    async fn get_summary(&self, video_id: Uuid) -> Result<Option<VideoSummary>> {
        Ok(self.state.lock().unwrap().videos.get(&video_id).cloned())
    }
}

#[async_trait]
impl UsersRepository for TestBackend {
    async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&user_id).cloned())
    }
}
