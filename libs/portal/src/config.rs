//! Portal configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Portal configuration
///
/// Loaded from `PORTAL_`-prefixed environment variables, with defaults
/// suitable for local development.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the server-backed portal API
    pub api_base_url: String,
    /// Path of the JSON file used by the file-backed store
    pub data_path: String,
    /// Email of the seeded admin account
    pub admin_email: String,
    /// Password of the seeded admin account; change it outside development
    pub admin_password: String,
}

impl PortalConfig {
    /// Load the configuration from the environment
    ///
    /// # Environment Variables
    /// - `PORTAL_API_BASE_URL`: remote API base URL (default: "http://localhost:3001")
    /// - `PORTAL_DATA_PATH`: data file path (default: "portal-data.json")
    /// - `PORTAL_ADMIN_EMAIL`: seed admin email (default: "admin@admin.com")
    /// - `PORTAL_ADMIN_PASSWORD`: seed admin password (default: "admin")
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_base_url", "http://localhost:3001")?
            .set_default("data_path", "portal-data.json")?
            .set_default("admin_email", "admin@admin.com")?
            .set_default("admin_password", "admin")?
            .add_source(Environment::with_prefix("PORTAL"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        let config = PortalConfig::load().expect("Failed to load portal config");

        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.data_path, "portal-data.json");
        assert_eq!(config.admin_email, "admin@admin.com");
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        // SAFETY: env mutation is guarded by #[serial]
        unsafe {
            std::env::set_var("PORTAL_API_BASE_URL", "https://api.example.com");
        }

        let config = PortalConfig::load().expect("Failed to load portal config");
        assert_eq!(config.api_base_url, "https://api.example.com");

        unsafe {
            std::env::remove_var("PORTAL_API_BASE_URL");
        }
    }
}
