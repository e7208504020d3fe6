//! Durable key/value store abstraction for client-local state.
//!
//! One JSON blob per concern, no version field. Implementations swallow
//! their own failures into `Option`/bool sentinels; callers decide how loud
//! to be about a miss.

use std::fs;
use std::path::PathBuf;

use dashmap::DashMap;
use tracing::warn;

pub trait StateStore: Send + Sync {
    /// Read the raw blob stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the blob under `key`. Returns false when the write failed.
    fn write(&self, key: &str, value: &str) -> bool;

    /// Remove the blob under `key`. Removing an absent key is success.
    fn delete(&self, key: &str) -> bool;
}

/// Volatile store used in tests and incognito-style sessions.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    blobs: DashMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.get(key).map(|entry| entry.value().clone())
    }

    fn write(&self, key: &str, value: &str) -> bool {
        self.blobs.insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.blobs.remove(key);
        true
    }
}

/// File-backed store: one `<key>.json` file per blob under a profile
/// directory.
#[derive(Debug)]
pub struct JsonFileStateStore {
    dir: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStateStore {
    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, "Failed to read local state: {}", e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!(key, "Failed to create state directory: {}", e);
            return false;
        }
        match fs::write(self.path_for(key), value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, "Failed to persist local state: {}", e);
                false
            }
        }
    }

    fn delete(&self, key: &str) -> bool {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                warn!(key, "Failed to delete local state: {}", e);
                false
            }
        }
    }
}
