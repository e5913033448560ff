//! Preference persistence module
//!
//! A small string key/value store standing in for client-side local storage.
//! The only key the application writes is [`WALKTHROUGH_DISABLED_KEY`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ResearcherError, Result, APP_NAME, STORAGE_FILE};

/// Key holding the "skip walkthrough permanently" flag
pub const WALKTHROUGH_DISABLED_KEY: &str = "walkthroughDisabled";

/// Literal value meaning the flag is set; anything else means enabled
pub const FLAG_SET: &str = "true";

/// String key/value storage that survives restarts.
///
/// Implementations never surface errors: a failed read behaves like an absent
/// key and a failed write is logged and dropped.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Whether the stored flag disables the walkthrough
pub fn walkthrough_disabled(store: &dyn PreferenceStore) -> bool {
    store.get(WALKTHROUGH_DISABLED_KEY).as_deref() == Some(FLAG_SET)
}

/// In-memory store; nothing survives the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON-file backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the standard location
    pub fn new() -> Result<Self> {
        Ok(Self::at(Self::storage_file_path()?))
    }

    /// Create a store backed by `path`
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the standard storage file path
    /// Uses $DATA_HOME/drresearcher/storage.json
    pub fn storage_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            ResearcherError::StorageError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ResearcherError::StorageError(format!(
                "Failed to read storage file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let entries = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn store(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ResearcherError::StorageError(format!(
                    "Failed to create storage directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)?;

        fs::write(&self.path, content).map_err(|e| {
            ResearcherError::StorageError(format!(
                "Failed to write storage file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    fn update<F>(&mut self, key: &str, mutate: F)
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable preference store");
                BTreeMap::new()
            }
        };
        mutate(&mut entries);
        if let Err(e) = self.store(&entries) {
            tracing::warn!(key, error = %e, "preference write failed");
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(key, error = %e, "preference read failed, treating as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&mut self, key: &str) {
        self.update(key, |entries| {
            entries.remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_flag_requires_literal_true() {
        let mut store = MemoryStore::new();
        assert!(!walkthrough_disabled(&store));

        store.set(WALKTHROUGH_DISABLED_KEY, "TRUE");
        assert!(!walkthrough_disabled(&store));

        store.set(WALKTHROUGH_DISABLED_KEY, "1");
        assert!(!walkthrough_disabled(&store));

        store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);
        assert!(walkthrough_disabled(&store));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join(STORAGE_FILE);

        let mut store = FileStore::at(path.clone());
        assert!(store.get(WALKTHROUGH_DISABLED_KEY).is_none());
        store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);
        store.set("other", "value");

        let reopened = FileStore::at(path);
        assert!(walkthrough_disabled(&reopened));
        assert_eq!(reopened.get("other").as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::at(temp_dir.path().join(STORAGE_FILE));

        store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);
        store.remove(WALKTHROUGH_DISABLED_KEY);
        assert!(!walkthrough_disabled(&store));
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(STORAGE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::at(path.clone());
        assert!(store.get(WALKTHROUGH_DISABLED_KEY).is_none());

        // A write replaces the unreadable contents
        store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);
        assert!(walkthrough_disabled(&FileStore::at(path)));
    }

    #[test]
    fn test_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(STORAGE_FILE);
        let mut store = FileStore::at(path.clone());
        store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);

        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("walkthroughDisabled").map(String::as_str), Some("true"));
    }
}
