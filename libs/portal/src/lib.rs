//! Client-portal data layer for the ZenWeb agency site
//!
//! Entity record stores (users, tickets, projects, inventory, contact info)
//! kept as JSON collections in an injected key-value store, plus the
//! session/auth service, theme preference, and per-visit analytics session.
//! The server-backed ticket/user API has its own client in the `remote`
//! crate and deliberately shares no contract with these stores.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod ids;
pub mod keys;
pub mod models;
pub mod state;
pub mod stores;
pub mod theme;
pub mod validation;

pub use error::{StoreError, StoreResult};
pub use state::PortalState;
