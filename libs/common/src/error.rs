//! Custom error types for the common library
//!
//! This module defines the storage error taxonomy used by every key-value
//! backend and, transitively, by the portal record stores.

use thiserror::Error;

/// Custom error type for storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error occurred while reading or writing the backing file
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while encoding or decoding stored values
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reported by the Redis backend
    #[error("Storage backend error: {0}")]
    Backend(#[from] redis::RedisError),

    /// Storage is unavailable (e.g. a poisoned lock)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Configuration error
    #[error("Storage configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
