//! Application configuration.
//!
//! Link limits come from a key-value file (default `config.properties`):
//!
//! ```text
//! maxLifetimeHours=48
//! clicksLimit=10
//! ```
//!
//! The file must exist; a missing key falls back to its default
//! (`maxLifetimeHours=24`, `clicksLimit=6`). `clicksLimit` is the minimum click
//! limit every link is raised to.
//!
//! ## Environment Variables
//!
//! - `BASE_URL` - Origin prefixed to short codes (default: `http://clck.ru/`)
//! - `LISTEN` - Bind address for `serve` (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::application::services::LinkPolicy;
use crate::utils::short_url::DEFAULT_BASE_URL;

/// Default location of the limits file.
pub const DEFAULT_CONFIG_PATH: &str = "config.properties";

const MAX_LIFETIME_HOURS_KEY: &str = "maxLifetimeHours";
const CLICKS_LIMIT_KEY: &str = "clicksLimit";
const DEFAULT_MAX_LIFETIME_HOURS: u32 = 24;
const DEFAULT_CLICKS_LIMIT: u32 = 6;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub config_path: PathBuf,
    /// Upper bound on link lifetime in hours.
    pub max_lifetime_hours: u32,
    /// Lower bound on link click limits.
    pub min_clicks_limit: u32,
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads link limits from `path` and the rest from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value is not a
    /// non-negative integer.
    pub fn load(path: &Path) -> Result<Self> {
        let (max_lifetime_hours, min_clicks_limit) = Self::load_limits(path)?;

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            config_path: path.to_path_buf(),
            max_lifetime_hours,
            min_clicks_limit,
            base_url,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Reads `maxLifetimeHours` and `clicksLimit` from the key-value file.
    fn load_limits(path: &Path) -> Result<(u32, u32)> {
        let entries = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        let mut max_lifetime_hours = DEFAULT_MAX_LIFETIME_HOURS;
        let mut min_clicks_limit = DEFAULT_CLICKS_LIMIT;

        for entry in entries {
            let (key, value) = entry
                .with_context(|| format!("Malformed line in {}", path.display()))?;

            match key.as_str() {
                MAX_LIFETIME_HOURS_KEY => max_lifetime_hours = parse_limit(&key, &value)?,
                CLICKS_LIMIT_KEY => min_clicks_limit = parse_limit(&key, &value)?,
                _ => tracing::debug!(key, "Ignoring unknown configuration key"),
            }
        }

        Ok((max_lifetime_hours, min_clicks_limit))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either limit is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http(s)://` origin
    pub fn validate(&self) -> Result<()> {
        if self.max_lifetime_hours == 0 {
            anyhow::bail!("{MAX_LIFETIME_HOURS_KEY} must be at least 1");
        }

        if self.min_clicks_limit == 0 {
            anyhow::bail!("{CLICKS_LIMIT_KEY} must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = url::Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;

        if !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.base_url.ends_with('/') {
            anyhow::bail!("BASE_URL must end with '/', got '{}'", self.base_url);
        }

        Ok(())
    }

    /// Link limits derived from this configuration.
    pub fn policy(&self) -> LinkPolicy {
        LinkPolicy {
            max_lifetime_hours: self.max_lifetime_hours,
            min_clicks_limit: self.min_clicks_limit,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Limits file: {}", self.config_path.display());
        tracing::info!("  Max lifetime: {}h", self.max_lifetime_hours);
        tracing::info!("  Min clicks limit: {}", self.min_clicks_limit);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_limit(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a non-negative integer, got '{value}'"))
}

/// Loads and validates configuration.
///
/// # Note
///
/// Expects `.env` to be already loaded (via `dotenvy::dotenv()` in `main.rs`).
pub fn load(path: &Path) -> Result<Config> {
    let config = Config::load(path)?;
    config.validate()?;
    Ok(config)
}
