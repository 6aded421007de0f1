//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with click and lifetime limits
//! - [`UserId`] - Opaque identity of a link owner

pub mod link;
pub mod user;

pub use link::Link;
pub use user::UserId;
