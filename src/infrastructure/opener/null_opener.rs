//! No-op opener for the HTTP server, where the redirect response is the "open".

use super::service::{OpenError, UrlOpener};

/// An opener that does nothing and always succeeds.
#[derive(Debug, Default)]
pub struct NullOpener;

impl UrlOpener for NullOpener {
    fn open(&self, _url: &str) -> Result<(), OpenError> {
        Ok(())
    }
}
