//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, LimitsInfo};
use crate::state::AppState;

/// Returns service status, the number of stored links and the limits in effect.
///
/// # Endpoint
///
/// `GET /health`
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "links": 42,
///   "limits": { "max_lifetime_hours": 24, "min_clicks_limit": 6 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let policy = state.link_service.policy();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links: state.link_service.link_count(),
        limits: LimitsInfo {
            max_lifetime_hours: policy.max_lifetime_hours,
            min_clicks_limit: policy.min_clicks_limit,
        },
    })
}
