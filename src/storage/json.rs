//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable key-value store persisted as a
//! single JSON document. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the whole file is loaded into memory once
//! - **Write**: O(n) - serializes and writes the entire document
//! - **Best for**: a handful of small keys written on user interaction

use crate::domain::error::{PickerError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// JSON storage container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored values keyed by store key.
    #[serde(default)]
    entries: BTreeMap<String, StoredValue>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// A single stored value with its last write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredValue {
    value: String,

    /// Unix timestamp of the last `set` for this key.
    updated_at: i64,
}

/// JSON file key-value store.
///
/// The entire document is kept in memory and rewritten on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "angular_emoji_picker_recent": {
///       "value": "[{\"emoji\":\"😀\",\"name\":\"grinning face\",\"category\":\"Smileys & Emotion\"}]",
///       "updated_at": 1760000000
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document, loaded on creation.
    data: StorageData,

    /// Set when the in-memory document has changes not yet on disk.
    dirty: bool,
}

impl JsonFileStore {
    /// Creates or opens a JSON file store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file is
    /// created on the first write. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| PickerError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != STORAGE_VERSION {
            tracing::warn!(
                found = data.version,
                expected = STORAGE_VERSION,
                "store file has unexpected version"
            );
        }

        Ok(data)
    }

    /// Saves the document to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path so
    /// the file is never observed half-written.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| PickerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.entries.get(key).map(|stored| stored.value.clone());
        tracing::trace!(key = %key, found = value.is_some(), "store get");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, value_len = value.len())
            .entered();

        self.data.entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                updated_at: chrono::Utc::now().timestamp(),
            },
        );

        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_remove", key = %key).entered();

        if self.data.entries.remove(key).is_none() {
            tracing::trace!("key absent, nothing to remove");
            return Ok(());
        }

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    /// Retries a save that failed earlier so a transient error does not lose data.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty store on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save store on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        {
            let mut store = JsonFileStore::open(path.clone()).unwrap();
            store.set("recent", r#"[{"emoji":"😀"}]"#).unwrap();
            store.set("other", "value").unwrap();
            store.remove("other").unwrap();
        }

        let store = JsonFileStore::open(path).unwrap();
        assert_eq!(store.get("recent").unwrap().as_deref(), Some(r#"[{"emoji":"😀"}]"#));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn missing_file_opens_empty_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(path.clone()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(path).unwrap_err();
        assert!(matches!(err, PickerError::Storage(_)));
    }

    #[test]
    fn write_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
