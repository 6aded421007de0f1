//! Interactive command-line front end.
//!
//! - [`command`] - Text command parsing
//! - [`session`] - Identity-holding read loop over the shared services

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{Flow, Session};
