//! In-memory key-value store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueStore;

/// In-memory key-value store
///
/// Backs the test suites and session-scoped state such as the per-visit
/// analytics record. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn health_check(&self) -> StorageResult<bool> {
        self.entries().map(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() -> StorageResult<()> {
        let store = MemoryStore::new();

        store.set("test_key", "test_value")?;
        assert_eq!(store.get("test_key")?, Some("test_value".to_string()));

        store.set("test_key", "replaced")?;
        assert_eq!(store.get("test_key")?, Some("replaced".to_string()));

        store.remove("test_key")?;
        assert_eq!(store.get("test_key")?, None);

        Ok(())
    }

    #[test]
    fn test_missing_key_is_none() -> StorageResult<()> {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent")?, None);
        Ok(())
    }
}
