//! Persistent client storage.
//!
//! A small string key/value store that survives between runs, playing the
//! part a browser's local storage plays for a web page. The Session Initiator
//! writes the access token under [`ACCESS_TOKEN_KEY`] and the Activity
//! Renderer reads it back; neither ever clears it.

use log::*;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, StorageErrorKind};

/// Storage key holding the session token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub trait TokenStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// Stores entries as a single JSON object on disk.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(Error::storage(StorageErrorKind::Read, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let entries = self.load()?;
        Ok(entries
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::storage(StorageErrorKind::Write, e))?;
        }

        let contents = serde_json::to_string_pretty(&Value::Object(entries))?;
        fs::write(&self.path, contents).map_err(|e| Error::storage(StorageErrorKind::Write, e))?;

        debug!("Stored \"{}\" in {}", key, self.path.display());
        Ok(())
    }
}

/// Process-local store, useful when nothing should touch the disk.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn temp_storage_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("admin-activity-{}", uuid::Uuid::new_v4()))
            .join("storage.json")
    }

    #[test]
    fn test_file_store_missing_file_reads_as_empty() {
        let store = FileTokenStore::new(temp_storage_path());

        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = temp_storage_path();

        FileTokenStore::new(&path)
            .set(ACCESS_TOKEN_KEY, "token-123")
            .unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(
            reopened.get(ACCESS_TOKEN_KEY).unwrap(),
            Some("token-123".to_string())
        );

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let path = temp_storage_path();
        let store = FileTokenStore::new(&path);

        store.set("theme", "dark").unwrap();
        store.set(ACCESS_TOKEN_KEY, "first").unwrap();
        store.set(ACCESS_TOKEN_KEY, "second").unwrap();

        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).unwrap(),
            Some("second".to_string())
        );

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_file_store_reports_corrupt_contents() {
        let path = temp_storage_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = FileTokenStore::new(&path)
            .get(ACCESS_TOKEN_KEY)
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            ErrorKind::Storage(StorageErrorKind::Corrupt)
        );

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_memory_store_round_trips_values() {
        let store = MemoryTokenStore::with_entry(ACCESS_TOKEN_KEY, "abc");

        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), Some("abc".to_string()));
        assert_eq!(store.get("missing").unwrap(), None);

        store.set(ACCESS_TOKEN_KEY, "def").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), Some("def".to_string()));
    }
}
