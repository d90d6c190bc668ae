//! Redis key-value store
//!
//! Production deployment option for the portal data layer: the same flat
//! string-keyed map, kept in Redis. One connection is opened per operation.

use redis::{Client, Commands, Connection};
use tracing::info;

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueStore;

/// Configuration for the Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

impl RedisConfig {
    /// Create a new RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> StorageResult<Self> {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        Ok(RedisConfig { url })
    }
}

/// Redis-backed key-value store
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Initialize a new Redis store
    pub fn new(config: &RedisConfig) -> StorageResult<Self> {
        let client = Client::open(config.url.clone())
            .map_err(|e| StorageError::Configuration(format!("Invalid Redis URL: {}", e)))?;
        info!("Redis store initialized with URL: {}", config.url);
        Ok(RedisStore { client })
    }

    fn connection(&self) -> StorageResult<Connection> {
        Ok(self.client.get_connection()?)
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut conn = self.connection()?;
        let value: Option<String> = conn.get(key)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut conn = self.connection()?;
        let _: () = conn.set(key, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut conn = self.connection()?;
        let _: u64 = conn.del(key)?;
        Ok(())
    }

    fn health_check(&self) -> StorageResult<bool> {
        let mut conn = self.connection()?;
        let pong: String = redis::cmd("PING").query(&mut conn)?;
        Ok(pong == "PONG")
    }
}
