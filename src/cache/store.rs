// Cache storage.
// Timestamped JSON entries behind a pluggable key-value store.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::cache::paths;
use crate::error::Result;

/// A cached value together with the time it was written.
///
/// Serialized as `{"data": ..., "timestamp": <epoch millis>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached data.
    pub data: T,
    /// When the data was written, as epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Create an entry stamped with the given time.
    pub fn new(data: T, now: DateTime<Utc>) -> Self {
        Self {
            data,
            timestamp: now,
        }
    }

    /// Check whether this entry is younger than `ttl` as of `now`.
    /// Entries stamped in the future (clock skew) count as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match now.signed_duration_since(self.timestamp).to_std() {
            Ok(age) => age < ttl,
            Err(_) => true,
        }
    }
}

impl<T: Serialize> CacheEntry<T> {
    /// Serialize this entry to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> CacheEntry<T> {
    /// Parse an entry from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// String key-value storage for cache entries.
pub trait KeyValueStore {
    /// Read the raw value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by JSON files in the platform cache directory.
///
/// When no cache directory can be resolved, reads miss and writes
/// are dropped.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: Option<PathBuf>,
}

impl DiskStore {
    /// Store rooted at the default cache directory.
    pub fn new() -> Self {
        Self {
            root: paths::cache_dir(),
        }
    }

    /// Store rooted at an explicit directory.
    #[cfg(test)]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        self.root
            .as_ref()
            .map(|root| root.join(paths::entry_file_name(key)))
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key)?;
        fs::read_to_string(path).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let Some(path) = self.entry_path(key) else {
            return Ok(());
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
