//! Custom error types for the remote API client

use thiserror::Error;

/// Failure of a remote API call
///
/// Nothing is retried and there is no timeout or cancellation handling: a
/// failed call degrades the single view that made it.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never completed; the server may be offline
    #[error("Unable to reach the server - it may be offline ({0})")]
    Offline(#[from] reqwest::Error),

    /// The server answered with a non-success status (treated as opaque)
    #[error("Server returned status {0}")]
    Status(reqwest::StatusCode),

    /// The server reported a failure in its response envelope
    #[error("{0}")]
    Api(String),
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
