//! Per-visit analytics session
//!
//! Lives in the session-scoped store, so a new visit gets a fresh record.
//! Server-side aggregation is handled by the remote API, not here.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::keys;
use crate::stores::collection;

/// One visit's analytics session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub landing_page: String,
}

/// Tracker for the per-visit analytics session
#[derive(Clone)]
pub struct SessionTracker {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionTracker {
    /// Create a tracker over a session-scoped store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Return this visit's session, creating it on first call
    pub fn ensure(&self, landing_page: &str) -> StoreResult<AnalyticsSession> {
        if let Some(existing) = self.current()? {
            return Ok(existing);
        }

        let session = AnalyticsSession {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            landing_page: landing_page.to_string(),
        };

        collection::write_object(&self.kv, keys::ANALYTICS_SESSION, &session)?;
        info!("Started analytics session {}", session.id);

        Ok(session)
    }

    /// The current session, if one has been started
    pub fn current(&self) -> StoreResult<Option<AnalyticsSession>> {
        collection::read_object(&self.kv, keys::ANALYTICS_SESSION)
    }

    /// Drop the current session
    pub fn clear(&self) -> StoreResult<()> {
        self.kv.remove(keys::ANALYTICS_SESSION)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::storage::MemoryStore;

    #[test]
    fn test_session_created_once() -> StoreResult<()> {
        let tracker = SessionTracker::new(Arc::new(MemoryStore::new()));

        let first = tracker.ensure("/pricing")?;
        let second = tracker.ensure("/blog")?;

        assert_eq!(first, second);
        assert_eq!(second.landing_page, "/pricing");

        tracker.clear()?;
        assert!(tracker.current()?.is_none());

        Ok(())
    }
}
