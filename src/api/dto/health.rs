//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub links: usize,
    pub limits: LimitsInfo,
}

/// Link limits in effect.
#[derive(Debug, Serialize)]
pub struct LimitsInfo {
    pub max_lifetime_hours: u32,
    pub min_clicks_limit: u32,
}
