//! Whole-collection persistence helpers

use std::sync::Arc;

use common::error::StorageError;
use common::storage::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StoreResult;

/// Read a collection, defaulting to empty when the key is absent or the
/// payload does not parse
pub(crate) fn read<T: DeserializeOwned>(
    kv: &Arc<dyn KeyValueStore>,
    key: &str,
) -> StoreResult<Vec<T>> {
    let Some(raw) = kv.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!("Discarding unparseable collection under {}: {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Serialize a collection and rewrite it in full
pub(crate) fn write<T: Serialize>(
    kv: &Arc<dyn KeyValueStore>,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let raw = serde_json::to_string(items).map_err(StorageError::from)?;
    kv.set(key, &raw)?;
    Ok(())
}

/// Read a singleton record
pub(crate) fn read_object<T: DeserializeOwned>(
    kv: &Arc<dyn KeyValueStore>,
    key: &str,
) -> StoreResult<Option<T>> {
    let Some(raw) = kv.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Discarding unparseable record under {}: {}", key, e);
            Ok(None)
        }
    }
}

/// Serialize and rewrite a singleton record
pub(crate) fn write_object<T: Serialize>(
    kv: &Arc<dyn KeyValueStore>,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value).map_err(StorageError::from)?;
    kv.set(key, &raw)?;
    Ok(())
}
