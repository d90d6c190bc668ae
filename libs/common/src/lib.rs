//! Common library for the ZenWeb portal
//!
//! This crate provides shared infrastructure used across the portal crates:
//! the key-value storage abstraction with its in-memory, file-backed, and
//! Redis backends, storage error types, and telemetry initialization.

pub mod error;
pub mod storage;
pub mod telemetry;
