//! Entity record stores
//!
//! Each store keeps one collection as a JSON-encoded array (or a single
//! object for singletons) under a fixed storage key, read and rewritten in
//! full on every operation. Collections are expected to stay small, so the
//! O(n) serialize per write is acceptable.

pub(crate) mod collection;

pub mod contact;
pub mod hardware;
pub mod locations;
pub mod projects;
pub mod tickets;
pub mod users;

// Re-export for convenience
pub use contact::ContactStore;
pub use hardware::HardwareStore;
pub use locations::LocationStore;
pub use projects::ProjectStore;
pub use tickets::TicketStore;
pub use users::UserStore;
