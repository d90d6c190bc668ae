//! User account store

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::Utc;
use common::storage::KeyValueStore;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ids::record_id;
use crate::keys;
use crate::models::{NewUser, Role, UpdateUser, UserAccount};
use crate::stores::collection;
use crate::validation::{validate_email, validate_name, validate_password};

/// User account store
#[derive(Clone)]
pub struct UserStore {
    kv: Arc<dyn KeyValueStore>,
}

impl UserStore {
    /// Create a new user store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Get all registered accounts
    pub fn get_all(&self) -> StoreResult<Vec<UserAccount>> {
        collection::read(&self.kv, keys::USERS)
    }

    /// Find an account by id
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<UserAccount>> {
        Ok(self.get_all()?.into_iter().find(|u| u.id == id))
    }

    /// Find an account by email (the unique key)
    pub fn find_by_email(&self, email: &str) -> StoreResult<Option<UserAccount>> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    /// Register a new account
    ///
    /// Validates the payload, rejects duplicate emails, and stores a salted
    /// argon2 hash of the password.
    pub fn register(&self, new_user: NewUser) -> StoreResult<UserAccount> {
        info!("Registering user: {}", new_user.email);

        validate_email(&new_user.email).map_err(StoreError::Validation)?;
        validate_password(&new_user.password).map_err(StoreError::Validation)?;
        validate_name(&new_user.name).map_err(StoreError::Validation)?;

        let mut users = self.get_all()?;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&new_user.email))
        {
            return Err(StoreError::Validation(
                "Email is already registered".to_string(),
            ));
        }

        let now = Utc::now();
        let user = UserAccount {
            id: record_id(),
            email: new_user.email,
            password_hash: hash_password(&new_user.password)?,
            name: new_user.name,
            company: new_user.company,
            phone: new_user.phone,
            address: new_user.address,
            role: Role::User,
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        collection::write(&self.kv, keys::USERS, &users)?;

        Ok(user)
    }

    /// Verify an account's password
    pub fn verify_password(&self, user: &UserAccount, password: &str) -> StoreResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| StoreError::Internal(format!("Failed to parse password hash: {}", e)))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }

    /// Update an account's profile fields
    pub fn update(&self, id: &str, update: UpdateUser) -> StoreResult<UserAccount> {
        info!("Updating user: {}", id);

        let mut users = self.get_all()?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Err(StoreError::NotFound);
        };

        if let Some(name) = update.name {
            validate_name(&name).map_err(StoreError::Validation)?;
            user.name = name;
        }
        if let Some(company) = update.company {
            user.company = company;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(address) = update.address {
            user.address = address;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        let updated = user.clone();
        collection::write(&self.kv, keys::USERS, &users)?;

        Ok(updated)
    }

    /// Toggle an account's role (admin screens)
    pub fn set_role(&self, id: &str, role: Role) -> StoreResult<UserAccount> {
        self.update(
            id,
            UpdateUser {
                role: Some(role),
                ..UpdateUser::default()
            },
        )
    }

    /// Replace an account's password with a new argon2 hash
    pub fn change_password(&self, id: &str, password: &str) -> StoreResult<UserAccount> {
        info!("Changing password for user: {}", id);

        validate_password(password).map_err(StoreError::Validation)?;

        let mut users = self.get_all()?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Err(StoreError::NotFound);
        };

        user.password_hash = hash_password(password)?;
        user.updated_at = Utc::now();

        let updated = user.clone();
        collection::write(&self.kv, keys::USERS, &users)?;

        Ok(updated)
    }

    /// Delete an account
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        info!("Deleting user: {}", id);

        let mut users = self.get_all()?;
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(StoreError::NotFound);
        }

        collection::write(&self.kv, keys::USERS, &users)
    }

    /// Insert a pre-built account, used for seeding
    ///
    /// Skips registration validation so legacy seed credentials keep
    /// working; the login path verifies them like any other account.
    pub(crate) fn insert_seed(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> StoreResult<UserAccount> {
        let mut users = self.get_all()?;
        let now = Utc::now();
        let user = UserAccount {
            id: record_id(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            name: name.to_string(),
            company: String::new(),
            phone: String::new(),
            address: Default::default(),
            role,
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        collection::write(&self.kv, keys::USERS, &users)?;

        Ok(user)
    }
}

/// Hash a password with a fresh per-user salt
fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();

    Ok(argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::storage::MemoryStore;

    fn store() -> UserStore {
        UserStore::new(Arc::new(MemoryStore::new()))
    }

    fn sample_user() -> NewUser {
        NewUser {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            name: "A".to_string(),
            company: String::new(),
            phone: String::new(),
            address: Default::default(),
        }
    }

    #[test]
    fn test_register_hashes_password() -> StoreResult<()> {
        let users = store();
        let account = users.register(sample_user())?;

        assert_ne!(account.password_hash, "secret1");
        assert!(users.verify_password(&account, "secret1")?);
        assert!(!users.verify_password(&account, "wrong")?);

        Ok(())
    }

    #[test]
    fn test_duplicate_email_rejected() -> StoreResult<()> {
        let users = store();
        users.register(sample_user())?;

        let mut dup = sample_user();
        dup.email = "A@B.COM".to_string();
        let result = users.register(dup);

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(users.get_all()?.len(), 1);

        Ok(())
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let users = store();
        assert!(matches!(users.delete("missing"), Err(StoreError::NotFound)));
    }
}
