//! Business contact details model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Business contact details (singleton record)
///
/// Stored as a single object, not a collection; reads fall back to the
/// default when nothing has been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Contact details update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfoUpdate {
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
}
