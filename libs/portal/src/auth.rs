//! Session and account authentication
//!
//! A state holder, not a security boundary: the signed-in user lives in
//! memory and is mirrored to storage under a fixed key. There is no token
//! and no expiry; restoration trusts the stored state entirely.

use std::sync::{Arc, Mutex};

use common::storage::KeyValueStore;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::keys;
use crate::models::{NewUser, Role, SessionUser, UserAccount};
use crate::stores::{UserStore, collection};

/// Session and account authentication service
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    kv: Arc<dyn KeyValueStore>,
    current: Arc<Mutex<Option<SessionUser>>>,
}

impl AuthService {
    /// Create a new auth service over the given user store
    pub fn new(users: UserStore, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            users,
            kv,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Restore the session mirrored to storage, if any
    ///
    /// Called synchronously at startup.
    pub fn restore(&self) -> StoreResult<Option<SessionUser>> {
        let stored: Option<SessionUser> = collection::read_object(&self.kv, keys::SESSION_USER)?;
        self.set_current(stored.clone());
        Ok(stored)
    }

    /// Register a new account
    pub fn register(&self, new_user: NewUser) -> StoreResult<UserAccount> {
        self.users.register(new_user)
    }

    /// Sign in with email and password
    ///
    /// On success the session user is held in memory and mirrored to
    /// storage. Failures are not rate limited.
    pub fn login(&self, email: &str, password: &str) -> StoreResult<SessionUser> {
        info!("Login attempt for {}", email);

        let Some(user) = self.users.find_by_email(email)? else {
            return Err(invalid_credentials());
        };

        if !self.users.verify_password(&user, password)? {
            return Err(invalid_credentials());
        }

        let session = SessionUser::from(&user);
        collection::write_object(&self.kv, keys::SESSION_USER, &session)?;
        self.set_current(Some(session.clone()));

        info!("User {} signed in", session.email);

        Ok(session)
    }

    /// Sign out, clearing memory and the storage mirror
    pub fn logout(&self) -> StoreResult<()> {
        info!("Signing out");

        self.kv.remove(keys::SESSION_USER)?;
        self.set_current(None);
        Ok(())
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<SessionUser> {
        self.current.lock().ok().and_then(|guard| guard.clone())
    }

    /// Whether the signed-in user is an admin
    pub fn is_admin(&self) -> bool {
        self.current_user()
            .map(|u| u.role == Role::Admin)
            .unwrap_or(false)
    }

    /// Ensure the admin account exists
    ///
    /// Seeds a regular account record with the admin role; login verifies
    /// it like any other account.
    pub fn seed_admin(&self, email: &str, password: &str) -> StoreResult<()> {
        if self.users.find_by_email(email)?.is_some() {
            return Ok(());
        }

        info!("Seeding admin account: {}", email);
        self.users
            .insert_seed(email, password, "Administrator", Role::Admin)?;
        Ok(())
    }

    fn set_current(&self, session: Option<SessionUser>) {
        if let Ok(mut guard) = self.current.lock() {
            *guard = session;
        }
    }
}

fn invalid_credentials() -> StoreError {
    StoreError::Validation("Invalid email or password".to_string())
}
