//! URL opener trait and error type.

use thiserror::Error;

/// Failure to hand a URL to the platform.
#[derive(Debug, Error)]
#[error("Failed to open {url}: {reason}")]
pub struct OpenError {
    pub url: String,
    pub reason: String,
}

/// Side effect performed after a successful redemption.
///
/// Called outside any store lock. Failures are reported to the caller of
/// redeem but never undo the consumed click.
///
/// # Implementations
///
/// - [`crate::infrastructure::opener::SystemBrowser`] - opens the default browser
/// - [`crate::infrastructure::opener::NullOpener`] - does nothing (HTTP redirects)
#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}
