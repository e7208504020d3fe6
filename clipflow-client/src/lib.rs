//! Client-side state for the Clipflow video platform.
//!
//! Mirrors what the player keeps without server round-trips: last-known
//! playback position per video, per-user player settings, and a cached copy
//! of the server-side history. Local-store failures (full disk, unwritable
//! profile directory) must never crash playback, so every store-facing
//! operation returns a bool/`Option` sentinel instead of an error.

pub mod error;
pub mod history_api;
pub mod history_store;
pub mod playback;
pub mod quality;
pub mod store;

pub use error::{ClientError, ClientResult};
pub use history_api::{HistoryApi, RestHistoryApi};
pub use history_store::HistoryStore;
pub use playback::PlaybackTracker;
pub use quality::select_rendition;
pub use store::{JsonFileStateStore, MemoryStateStore, StateStore};
