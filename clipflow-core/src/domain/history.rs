//! Watch-history and search-history domain rules.
//!
//! The interesting state transitions of the history subsystem live here so
//! that the HTTP adapter and the repositories stay thin:
//!
//! - the "currently watching" heuristic, derived purely from the most recent
//!   watch record (nothing about a viewing session is persisted)
//! - search keyword normalization and the bounded keyword set

use chrono::{DateTime, Duration, Utc};
use clipflow_model::WatchHistoryEntry;

/// Recency window for the currently-watching signal.
pub const WATCHING_NOW_WINDOW_MINUTES: i64 = 30;

/// A record at or beyond this completion fraction no longer counts as
/// actively being watched.
pub const WATCHING_NOW_COMPLETION_CUTOFF: f64 = 0.9;

/// Maximum number of search keywords retained per user; inserting beyond the
/// cap evicts the oldest entries by `updated_at`.
pub const SEARCH_HISTORY_CAP: i64 = 20;

/// Whether the most recent watch record qualifies as "currently watching".
///
/// True iff the record was touched within the last
/// [`WATCHING_NOW_WINDOW_MINUTES`] and playback is still short of
/// [`WATCHING_NOW_COMPLETION_CUTOFF`] of the video's duration.
pub fn is_watching_now(entry: &WatchHistoryEntry, now: DateTime<Utc>) -> bool {
    let window = Duration::minutes(WATCHING_NOW_WINDOW_MINUTES);
    if now.signed_duration_since(entry.updated_at) > window {
        return false;
    }
    entry.completion_ratio() < WATCHING_NOW_COMPLETION_CUTOFF
}

/// Trim a submitted search keyword; `None` means nothing searchable remains.
pub fn normalize_keyword(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Outcome of submitting a search keyword.
///
/// An empty-after-trim keyword is a recoverable rejection surfaced to the
/// caller as data, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSubmission {
    Accepted,
    RejectedEmpty,
}

impl KeywordSubmission {
    pub fn is_accepted(self) -> bool {
        matches!(self, KeywordSubmission::Accepted)
    }
}
