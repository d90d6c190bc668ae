//! Inventory location store

use std::sync::Arc;

use chrono::Utc;
use common::storage::KeyValueStore;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ids::record_id;
use crate::keys;
use crate::models::{Hardware, Location, NewLocation, UpdateLocation};
use crate::stores::collection;
use crate::validation::validate_name;

/// Inventory location store
#[derive(Clone)]
pub struct LocationStore {
    kv: Arc<dyn KeyValueStore>,
}

impl LocationStore {
    /// Create a new location store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Get all locations
    pub fn get_all(&self) -> StoreResult<Vec<Location>> {
        collection::read(&self.kv, keys::LOCATIONS)
    }

    /// Find a location by id
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Location>> {
        Ok(self.get_all()?.into_iter().find(|l| l.id == id))
    }

    /// Create a location
    pub fn create(&self, new_location: NewLocation) -> StoreResult<Location> {
        info!("Creating location: {}", new_location.name);

        validate_name(&new_location.name).map_err(StoreError::Validation)?;

        let now = Utc::now();
        let location = Location {
            id: record_id(),
            name: new_location.name,
            address: new_location.address,
            notes: new_location.notes,
            created_at: now,
            updated_at: now,
        };

        let mut locations = self.get_all()?;
        locations.push(location.clone());
        collection::write(&self.kv, keys::LOCATIONS, &locations)?;

        Ok(location)
    }

    /// Update a location
    ///
    /// Renaming is safe: hardware references locations by id.
    pub fn update(&self, id: &str, update: UpdateLocation) -> StoreResult<Location> {
        info!("Updating location: {}", id);

        let mut locations = self.get_all()?;
        let Some(location) = locations.iter_mut().find(|l| l.id == id) else {
            return Err(StoreError::NotFound);
        };

        if let Some(name) = update.name {
            validate_name(&name).map_err(StoreError::Validation)?;
            location.name = name;
        }
        if let Some(address) = update.address {
            location.address = address;
        }
        if let Some(notes) = update.notes {
            location.notes = notes;
        }
        location.updated_at = Utc::now();

        let updated = location.clone();
        collection::write(&self.kv, keys::LOCATIONS, &locations)?;

        Ok(updated)
    }

    /// Delete a location
    ///
    /// Rejected while any hardware record still references the location.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        info!("Deleting location: {}", id);

        let mut locations = self.get_all()?;
        if !locations.iter().any(|l| l.id == id) {
            return Err(StoreError::NotFound);
        }

        let hardware: Vec<Hardware> = collection::read(&self.kv, keys::HARDWARE)?;
        if hardware.iter().any(|h| h.location_id.as_deref() == Some(id)) {
            return Err(StoreError::Validation(
                "Location is still referenced by hardware".to_string(),
            ));
        }

        locations.retain(|l| l.id != id);
        collection::write(&self.kv, keys::LOCATIONS, &locations)
    }
}
