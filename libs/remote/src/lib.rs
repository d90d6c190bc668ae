//! Client for the server-backed portal API
//!
//! This is the second persistence path: tickets and users managed here live
//! on the remote service, not in the local record stores, and the two
//! deliberately share no contract. A ticket created through this client is
//! invisible to the local stores and vice versa.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
