//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; in-memory implementations live in
//! `crate::infrastructure::memory`.
//!
//! - [`LinkStore`] - Concurrent link storage with per-key atomic updates
//! - [`UserRegistry`] - Known user identities

pub mod link_store;
pub mod user_registry;

pub use link_store::{LinkStore, Retention, Updated};
pub use user_registry::UserRegistry;
