//! Infrastructure layer implementing the domain contracts.
//!
//! # Modules
//!
//! - [`memory`] - Concurrent in-memory link store and user registry
//! - [`opener`] - URL opening side effect (system browser or no-op)

pub mod memory;
pub mod opener;
