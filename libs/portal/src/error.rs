//! Error types for the portal record stores

use common::error::StorageError;
use thiserror::Error;

/// Failure of a record-store or auth operation
///
/// Validation and not-found failures carry the user-facing message the
/// calling form renders inline; storage failures surface generically.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input failed validation (duplicate email, missing field, ...)
    #[error("{0}")]
    Validation(String),

    /// No record with the requested id
    #[error("Record not found")]
    NotFound,

    /// Unexpected internal failure (password hashing, ...)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Underlying storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
