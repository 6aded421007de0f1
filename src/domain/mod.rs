//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`redemption`] - Redemption outcome model
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Policy lives in [`crate::application::services`].

pub mod entities;
pub mod redemption;
pub mod repositories;
