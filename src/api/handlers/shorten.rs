//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::api::middleware::Caller;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_url;

/// Creates a short link owned by the caller.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "clicks_limit": 3, "lifetime_hours": 100 }
/// ```
///
/// The URL is stored in its normalized form. The limit is raised to the
/// configured minimum and the lifetime lowered to the configured maximum; the
/// response shows the effective values.
///
/// # Errors
///
/// - 400 Bad Request if validation fails or the URL is not HTTP(S)
/// - 401 Unauthorized without a registered `X-User-Id`
pub async fn shorten_handler(
    State(state): State<AppState>,
    Caller(owner): Caller,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;
    let url = normalize_url(&payload.url)?;

    let link = state.link_service.create(
        owner,
        url,
        payload.clicks_limit,
        payload.lifetime_hours,
    )?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
