//! Persistent key-value storage collaborator.
//!
//! The site keeps exactly two logical keys: the user's language
//! preference and the serialized news-article set. Both are read once
//! at startup and rewritten in full on every relevant mutation, so the
//! store favors simplicity over throughput.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::types::VitransError;

/// Blocking key-value storage used for user preferences and article data.
///
/// Reads that fail (missing file, unparseable payload) are reported as
/// absent data rather than errors; only writes can fail.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), VitransError>;
}

/// File-backed store holding all keys in a single JSON object.
///
/// Writes go through a temporary file in the same directory followed by
/// an atomic rename, so a crash mid-write never leaves a partial file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing entries.
    ///
    /// A missing or unparseable file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        info!("Opened storage file {:?} with {} entries", path, entries.len());
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Storage file {:?} not readable ({}), starting empty", path, e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Storage file {:?} is unparseable ({}), starting empty", path, e);
                BTreeMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), VitransError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let payload = serde_json::to_vec_pretty(entries)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(&payload)?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| VitransError::Storage(format!("Failed to persist {:?}: {}", self.path, e)))?;

        debug!("Wrote {} storage entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), VitransError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

/// In-memory store used by tests and in wiring that needs no persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), VitransError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
