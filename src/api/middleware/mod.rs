//! HTTP middleware and extractors.

pub mod identity;
pub mod tracing;

pub use identity::{Caller, USER_ID_HEADER};
