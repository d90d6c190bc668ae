//! File-backed key-value store

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueStore;

/// File-backed key-value store
///
/// The full key/value map lives in a single JSON file; every write rewrites
/// the file. There is no partial-write recovery: a write that fails leaves
/// whatever the filesystem kept, and the next successful write replaces it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at the given path, loading any existing contents
    ///
    /// An unparseable file degrades to an empty map with a logged warning,
    /// mirroring how the record stores treat unparseable collections.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Discarding unparseable storage file {}: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!("File store opened at {}", path.display());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn entries(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("file store lock poisoned".to_string()))
    }

    fn persist(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn health_check(&self) -> StorageResult<bool> {
        self.entries().map(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() -> StorageResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("portal-data.json");

        let store = FileStore::open(&path)?;
        store.set("pcr_users", "[]")?;
        store.set("pcr_theme", "\"dark\"")?;
        drop(store);

        let reopened = FileStore::open(&path)?;
        assert_eq!(reopened.get("pcr_users")?, Some("[]".to_string()));
        assert_eq!(reopened.get("pcr_theme")?, Some("\"dark\"".to_string()));

        Ok(())
    }

    #[test]
    fn test_unparseable_file_degrades_to_empty() -> StorageResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("portal-data.json");
        fs::write(&path, "not json at all")?;

        let store = FileStore::open(&path)?;
        assert_eq!(store.get("pcr_users")?, None);

        Ok(())
    }

    #[test]
    fn test_remove_rewrites_file() -> StorageResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("portal-data.json");

        let store = FileStore::open(&path)?;
        store.set("contactInfo", "{}")?;
        store.remove("contactInfo")?;
        drop(store);

        let reopened = FileStore::open(&path)?;
        assert_eq!(reopened.get("contactInfo")?, None);

        Ok(())
    }
}
