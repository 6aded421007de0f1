//! Helper functions shared across layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`short_url`] - Short URL construction and parsing
//! - [`url_normalizer`] - Target URL sanitization

pub mod code_generator;
pub mod short_url;
pub mod url_normalizer;
