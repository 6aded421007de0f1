//! DTOs for link creation and link views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Requested click limit; raised to the configured minimum.
    #[validate(range(min = 0))]
    pub clicks_limit: i64,

    /// Requested lifetime in hours; lowered to the configured maximum.
    #[validate(range(min = 0))]
    pub lifetime_hours: i64,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub click_limit: u32,
    pub click_count: u32,
    pub remaining_clicks: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        let expires_at = link.expires_at();
        let remaining_clicks = link.remaining_clicks();
        Self {
            code: link.short_code,
            short_url: link.short_url,
            long_url: link.original_url,
            click_limit: link.click_limit,
            click_count: link.click_count,
            remaining_clicks,
            active: link.active,
            created_at: link.created_at,
            expires_at,
        }
    }
}
