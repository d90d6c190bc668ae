//! Hardware inventory store

use std::sync::Arc;

use chrono::Utc;
use common::storage::KeyValueStore;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ids::record_id;
use crate::keys;
use crate::models::{Hardware, HardwareStatus, Location, NewHardware, UpdateHardware};
use crate::stores::collection;
use crate::validation::validate_name;

/// Hardware inventory store
#[derive(Clone)]
pub struct HardwareStore {
    kv: Arc<dyn KeyValueStore>,
}

impl HardwareStore {
    /// Create a new hardware store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Get all hardware records
    pub fn get_all(&self) -> StoreResult<Vec<Hardware>> {
        collection::read(&self.kv, keys::HARDWARE)
    }

    /// Find a hardware record by id
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Hardware>> {
        Ok(self.get_all()?.into_iter().find(|h| h.id == id))
    }

    /// Get all hardware at a location
    pub fn at_location(&self, location_id: &str) -> StoreResult<Vec<Hardware>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|h| h.location_id.as_deref() == Some(location_id))
            .collect())
    }

    /// Create a hardware record
    pub fn create(&self, new_hardware: NewHardware) -> StoreResult<Hardware> {
        info!("Creating hardware: {}", new_hardware.name);

        validate_name(&new_hardware.name).map_err(StoreError::Validation)?;
        if let Some(location_id) = &new_hardware.location_id {
            self.ensure_location_exists(location_id)?;
        }

        let now = Utc::now();
        let hardware = Hardware {
            id: record_id(),
            name: new_hardware.name,
            category: new_hardware.category,
            serial_number: new_hardware.serial_number,
            status: new_hardware.status.unwrap_or(HardwareStatus::Active),
            location_id: new_hardware.location_id,
            notes: new_hardware.notes,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.get_all()?;
        records.push(hardware.clone());
        collection::write(&self.kv, keys::HARDWARE, &records)?;

        Ok(hardware)
    }

    /// Update a hardware record
    pub fn update(&self, id: &str, update: UpdateHardware) -> StoreResult<Hardware> {
        info!("Updating hardware: {}", id);

        if let Some(location_id) = &update.location_id {
            self.ensure_location_exists(location_id)?;
        }

        let mut records = self.get_all()?;
        let Some(hardware) = records.iter_mut().find(|h| h.id == id) else {
            return Err(StoreError::NotFound);
        };

        if let Some(name) = update.name {
            validate_name(&name).map_err(StoreError::Validation)?;
            hardware.name = name;
        }
        if let Some(category) = update.category {
            hardware.category = category;
        }
        if let Some(serial_number) = update.serial_number {
            hardware.serial_number = serial_number;
        }
        if let Some(status) = update.status {
            hardware.status = status;
        }
        if let Some(location_id) = update.location_id {
            hardware.location_id = Some(location_id);
        }
        if let Some(notes) = update.notes {
            hardware.notes = notes;
        }
        hardware.updated_at = Utc::now();

        let updated = hardware.clone();
        collection::write(&self.kv, keys::HARDWARE, &records)?;

        Ok(updated)
    }

    /// Delete a hardware record, dropping it from the admin selection too
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        info!("Deleting hardware: {}", id);

        let mut records = self.get_all()?;
        let before = records.len();
        records.retain(|h| h.id != id);

        if records.len() == before {
            return Err(StoreError::NotFound);
        }

        collection::write(&self.kv, keys::HARDWARE, &records)?;

        let mut selected = self.selected_ids()?;
        if selected.iter().any(|s| s == id) {
            selected.retain(|s| s != id);
            collection::write(&self.kv, keys::SELECTED_HARDWARE, &selected)?;
        }

        Ok(())
    }

    /// Ids of the hardware rows currently selected in the admin screens
    pub fn selected_ids(&self) -> StoreResult<Vec<String>> {
        collection::read(&self.kv, keys::SELECTED_HARDWARE)
    }

    /// Replace the admin selection
    pub fn set_selected(&self, ids: &[String]) -> StoreResult<()> {
        collection::write(&self.kv, keys::SELECTED_HARDWARE, ids)
    }

    /// Toggle one id in the admin selection, returning the new selection
    pub fn toggle_selected(&self, id: &str) -> StoreResult<Vec<String>> {
        let mut selected = self.selected_ids()?;

        if selected.iter().any(|s| s == id) {
            selected.retain(|s| s != id);
        } else {
            selected.push(id.to_string());
        }

        collection::write(&self.kv, keys::SELECTED_HARDWARE, &selected)?;
        Ok(selected)
    }

    fn ensure_location_exists(&self, location_id: &str) -> StoreResult<()> {
        let locations: Vec<Location> = collection::read(&self.kv, keys::LOCATIONS)?;
        if locations.iter().any(|l| l.id == location_id) {
            Ok(())
        } else {
            Err(StoreError::Validation("Unknown location".to_string()))
        }
    }
}
