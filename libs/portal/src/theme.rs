//! Theme preference

use std::sync::Arc;

use common::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::keys;
use crate::stores::collection;

/// Site theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted theme preference
#[derive(Clone)]
pub struct ThemeManager {
    kv: Arc<dyn KeyValueStore>,
}

impl ThemeManager {
    /// Create a new theme manager
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// The stored theme, defaulting to light
    pub fn current(&self) -> StoreResult<Theme> {
        Ok(collection::read_object(&self.kv, keys::THEME)?.unwrap_or_default())
    }

    /// Persist a theme choice
    pub fn set(&self, theme: Theme) -> StoreResult<()> {
        collection::write_object(&self.kv, keys::THEME, &theme)
    }

    /// Flip the stored theme, returning the new value
    pub fn toggle(&self) -> StoreResult<Theme> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::storage::MemoryStore;

    #[test]
    fn test_theme_round_trip() -> StoreResult<()> {
        let manager = ThemeManager::new(Arc::new(MemoryStore::new()));

        assert_eq!(manager.current()?, Theme::Light);
        assert_eq!(manager.toggle()?, Theme::Dark);
        assert_eq!(manager.current()?, Theme::Dark);
        assert_eq!(manager.toggle()?, Theme::Light);

        Ok(())
    }
}
