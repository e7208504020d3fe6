use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::video::VideoSummary;

/// One watched video with its last-known progress, joined with the video
/// summary and the video creator's display fields.
///
/// A user has at most one entry per video; re-watching refreshes the
/// existing entry instead of creating a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchHistoryEntry {
    pub video: VideoSummary,
    /// Elapsed playback seconds at the last progress report
    pub progress: i32,
    /// First-watch timestamp
    pub created_at: DateTime<Utc>,
    /// Last-touch timestamp; drives history ordering and the
    /// currently-watching heuristic
    pub updated_at: DateTime<Utc>,
}

impl WatchHistoryEntry {
    /// Fraction of the video watched, in `0.0..=1.0`.
    pub fn completion_ratio(&self) -> f64 {
        if self.video.duration <= 0 {
            return 0.0;
        }
        (f64::from(self.progress) / f64::from(self.video.duration)).clamp(0.0, 1.0)
    }
}

/// One recent search keyword for a user.
///
/// The per-user keyword set is bounded; the repository evicts the oldest
/// entries by `updated_at` beyond the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub keyword: String,
    pub updated_at: DateTime<Utc>,
}
