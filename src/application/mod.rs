//! Application layer services implementing business logic.
//!
//! Services consume the storage traits and expose the operations the CLI and
//! the HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link lifecycle and redemption
//! - [`services::user_service::UserService`] - User identity registry

pub mod services;
