use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display fields of a video's creator, embedded in catalog responses.
///
/// Only the public profile surface is exposed here; account state and
/// credentials never leave the users repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub username: String,
    /// Display name shown in UI; falls back to `username` when absent
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}

/// Lightweight video projection joined into history listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Total runtime in seconds
    pub duration: i32,
    pub cover_url: Option<String>,
    pub view_count: i64,
    pub creator: CreatorSummary,
}

/// Full video row as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub cover_url: Option<String>,
    pub view_count: i64,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
