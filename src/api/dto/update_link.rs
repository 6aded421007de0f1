//! DTOs for link maintenance endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `PATCH /api/links/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New click limit; raised to the configured minimum.
    #[validate(range(min = 0))]
    pub clicks_limit: i64,
}

/// Response body for `POST /api/links/clear`.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
}
