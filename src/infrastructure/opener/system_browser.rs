//! Opens redeemed links in the user's default browser.

use tracing::debug;

use super::service::{OpenError, UrlOpener};

/// Launches the platform browser for each redeemed URL.
///
/// On a headless machine (no `DISPLAY`/`WAYLAND_DISPLAY` on Linux) nothing is
/// launched and the call fails, leaving the caller to show the URL.
pub struct SystemBrowser {
    headless: bool,
}

impl SystemBrowser {
    pub fn new() -> Self {
        Self {
            headless: detect_headless(),
        }
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        if self.headless {
            return Err(OpenError {
                url: url.to_string(),
                reason: "no graphical display available".to_string(),
            });
        }

        debug!(url, "Opening in system browser");
        open::that_detached(url).map_err(|e| OpenError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(target_os = "linux")]
fn detect_headless() -> bool {
    std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none()
}

#[cfg(not(target_os = "linux"))]
fn detect_headless() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_open_fails_without_launching() {
        let browser = SystemBrowser { headless: true };

        let err = browser.open("https://example.com/").unwrap_err();

        assert_eq!(err.url, "https://example.com/");
        assert!(err.reason.contains("display"));
    }
}
