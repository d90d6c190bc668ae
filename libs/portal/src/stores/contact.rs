//! Business contact details store

use std::sync::Arc;

use chrono::Utc;
use common::storage::KeyValueStore;
use tracing::info;

use crate::error::StoreResult;
use crate::keys;
use crate::models::{ContactInfo, ContactInfoUpdate};
use crate::stores::collection;

/// Business contact details store (singleton record)
#[derive(Clone)]
pub struct ContactStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ContactStore {
    /// Create a new contact store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Get the stored contact details, or the default when nothing has been
    /// saved yet
    pub fn get(&self) -> StoreResult<ContactInfo> {
        Ok(collection::read_object(&self.kv, keys::CONTACT_INFO)?.unwrap_or_default())
    }

    /// Merge an update into the stored contact details
    pub fn update(&self, update: ContactInfoUpdate) -> StoreResult<ContactInfo> {
        info!("Updating contact details");

        let mut info = self.get()?;

        if let Some(company) = update.company {
            info.company = company;
        }
        if let Some(email) = update.email {
            info.email = email;
        }
        if let Some(phone) = update.phone {
            info.phone = phone;
        }
        if let Some(address) = update.address {
            info.address = address;
        }
        if let Some(hours) = update.hours {
            info.hours = hours;
        }
        info.updated_at = Some(Utc::now());

        collection::write_object(&self.kv, keys::CONTACT_INFO, &info)?;

        Ok(info)
    }
}
