//! File-based key-value store
//!
//! Persists every key in one JSON object file (`{"key": "value", ...}`),
//! the on-disk counterpart of origin-scoped browser storage.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use pk_core::ports::{KeyValueStorePort, StorageError};
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

type Entries = BTreeMap<String, String>;

/// Key-value store backed by one JSON object file.
///
/// ## Behavior / 行为
/// - Missing or empty file reads as an empty store
/// - `get` on an unparsable file returns [`StorageError::Corrupt`]
/// - `set` and `remove` on an unparsable file log a warning and rewrite the
///   file from scratch, so a save always replaces what was there
/// - Writes go to a sibling temp file which is then renamed over the target
pub struct FileKeyValueStore {
    path: PathBuf,
    // serializes read-modify-write of the backing file within this process
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create store with custom file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, ()>, StorageError> {
        self.lock
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Entries for a read-modify-write, and whether the file must be
    /// rewritten regardless. A corrupt file starts over empty.
    fn entries_for_write(&self) -> Result<(Entries, bool), StorageError> {
        match self.read_entries() {
            Err(StorageError::Corrupt(reason)) => {
                warn!(%reason, "Storage file unreadable, rewriting it");
                Ok((Entries::new(), true))
            }
            other => Ok((other?, false)),
        }
    }

    /// Write to a sibling temp file, then rename over the target.
    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(format!("serialize storage failed: {e}")))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }
}

impl KeyValueStorePort for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.locked()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.locked()?;
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.locked()?;
        let (mut entries, rewrite) = self.entries_for_write()?;
        if entries.remove(key).is_some() || rewrite {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
