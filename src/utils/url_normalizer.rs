//! Sanitization of user-supplied target URLs.
//!
//! Targets end up verbatim in a `Location` header, so they are stored in the
//! serialized form produced by [`Url`]: tabs and newlines stripped, non-ASCII
//! characters percent-encoded, host lowercased.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Parses `input` and returns its canonical serialization.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs and
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes such
/// as `javascript:` or `file:`.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url =
        Url::parse(input.trim()).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url.into()),
        _ => Err(UrlNormalizationError::UnsupportedProtocol),
    }
}
