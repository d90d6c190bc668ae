//! Hardware and location inventory models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inventory location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Location creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Location update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Hardware operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareStatus {
    Active,
    InRepair,
    Retired,
}

/// Hardware inventory record
///
/// `location_id` is a stable reference to a [`Location`]; renaming a
/// location never breaks the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub serial_number: String,
    pub status: HardwareStatus,
    pub location_id: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hardware creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHardware {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub serial_number: String,
    pub status: Option<HardwareStatus>,
    pub location_id: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// Hardware update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHardware {
    pub name: Option<String>,
    pub category: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<HardwareStatus>,
    pub location_id: Option<String>,
    pub notes: Option<String>,
}
