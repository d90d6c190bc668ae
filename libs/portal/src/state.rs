//! Portal state shared across the UI

use std::sync::Arc;

use common::storage::{FileStore, KeyValueStore, MemoryStore};

use crate::analytics::SessionTracker;
use crate::auth::AuthService;
use crate::config::PortalConfig;
use crate::error::StoreResult;
use crate::stores::{
    ContactStore, HardwareStore, LocationStore, ProjectStore, TicketStore, UserStore,
};
use crate::theme::ThemeManager;

/// Shared handle to every store and service in the portal data layer
#[derive(Clone)]
pub struct PortalState {
    pub users: UserStore,
    pub tickets: TicketStore,
    pub projects: ProjectStore,
    pub hardware: HardwareStore,
    pub locations: LocationStore,
    pub contact: ContactStore,
    pub auth: AuthService,
    pub theme: ThemeManager,
    pub analytics: SessionTracker,
}

impl PortalState {
    /// Wire all stores over a persistent store and a session-scoped store
    pub fn new(kv: Arc<dyn KeyValueStore>, session_kv: Arc<dyn KeyValueStore>) -> Self {
        let users = UserStore::new(kv.clone());
        let auth = AuthService::new(users.clone(), kv.clone());

        Self {
            tickets: TicketStore::new(kv.clone()),
            projects: ProjectStore::new(kv.clone()),
            hardware: HardwareStore::new(kv.clone()),
            locations: LocationStore::new(kv.clone()),
            contact: ContactStore::new(kv.clone()),
            theme: ThemeManager::new(kv),
            analytics: SessionTracker::new(session_kv),
            users,
            auth,
        }
    }

    /// Wire from configuration: file-backed persistence, in-memory
    /// session-scoped state, seeded admin account, restored session
    pub fn from_config(config: &PortalConfig) -> StoreResult<Self> {
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_path)?);
        let state = Self::new(kv, Arc::new(MemoryStore::new()));

        state
            .auth
            .seed_admin(&config.admin_email, &config.admin_password)?;
        state.auth.restore()?;

        Ok(state)
    }
}
