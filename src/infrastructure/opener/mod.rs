//! Side effect of a successful redemption.
//!
//! Provides a [`UrlOpener`] trait with two implementations:
//! - [`SystemBrowser`] - Launches the platform browser (interactive CLI)
//! - [`NullOpener`] - No-op, used by the HTTP server

mod null_opener;
mod service;
mod system_browser;

pub use null_opener::NullOpener;
#[cfg(test)]
pub use service::MockUrlOpener;
pub use service::{OpenError, UrlOpener};
pub use system_browser::SystemBrowser;
