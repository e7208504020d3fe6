//! Core data model definitions shared across Clipflow crates.
#![allow(missing_docs)]

pub mod history;
pub mod playback;
pub mod user;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use history::{SearchHistoryEntry, WatchHistoryEntry};
pub use playback::{
    NetworkEffectiveType, PlayerSettings, PlayerSettingsUpdate,
    QualityPreference, VideoProgress, VideoQuality,
};
pub use user::User;
pub use video::{CreatorSummary, Video, VideoSummary};
