//! Storage keys for the portal collections
//!
//! Key names are stable: data written by earlier releases must remain
//! readable. The `pcr_` prefix belongs to the legacy IT-services brand that
//! shares this data layer.

/// Current session user (single object)
pub const SESSION_USER: &str = "pcr_user";

/// Registered user accounts
pub const USERS: &str = "pcr_users";

/// Support and project tickets
pub const TICKETS: &str = "zenweb_tickets";

/// Client projects
pub const PROJECTS: &str = "zenweb_projects";

/// Business contact details (single object)
pub const CONTACT_INFO: &str = "contactInfo";

/// Hardware inventory
pub const HARDWARE: &str = "pcr_hardware";

/// Inventory locations
pub const LOCATIONS: &str = "pcr_locations";

/// Ids of hardware rows currently selected in the admin screens
pub const SELECTED_HARDWARE: &str = "pcr_selected_hardware";

/// Per-visit analytics session (lives in the session-scoped store)
pub const ANALYTICS_SESSION: &str = "analytics_session";

/// Theme preference
pub const THEME: &str = "pcr_theme";
