//! # clck
//!
//! An in-memory link shortener with click limits and lifetimes, usable as an
//! interactive console program or as a small HTTP service.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link and user entities, store traits, redeem outcomes
//! - **Application Layer** ([`application`]) - Link lifecycle and user registration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory stores, URL openers
//! - **CLI Layer** ([`cli`]) - Interactive command session
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Link lifecycle
//!
//! A link is created with a click limit and a lifetime, both bounded by the
//! configured policy. Every successful redeem consumes one click. A link that
//! is redeemed while inactive, expired or out of clicks, or whose final click
//! is consumed, is removed from the store in the same critical section.
//!
//! ## Quick Start
//!
//! ```bash
//! printf 'maxLifetimeHours=24\nclicksLimit=6\n' > config.properties
//!
//! # Interactive console
//! cargo run
//!
//! # HTTP service
//! cargo run -- serve
//! ```
//!
//! ## Configuration
//!
//! Link limits come from a key-value file and everything else from environment
//! variables. See [`config`] for available options.

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkPolicy, LinkService, UserService};
    pub use crate::domain::entities::{Link, UserId};
    pub use crate::domain::redemption::{RedeemOutcome, UnavailableReason};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
