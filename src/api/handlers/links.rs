//! Handlers for link management endpoints (list, update, delete, sweep).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::LinkResponse;
use crate::api::dto::update_link::{ClearResponse, UpdateLinkRequest};
use crate::api::middleware::Caller;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's links, oldest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Caller(owner): Caller,
) -> Json<Vec<LinkResponse>> {
    let links = state
        .link_service
        .links_of(owner)
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Json(links)
}

/// Changes the click limit of one of the caller's links.
///
/// # Endpoint
///
/// `PATCH /api/links/{code}`
///
/// ```json
/// { "clicks_limit": 20 }
/// ```
///
/// # Errors
///
/// - 404 Not Found if the link doesn't exist
/// - 401 Unauthorized if the caller is not the owner
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Caller(requester): Caller,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .edit_limit(requester, &code, payload.clicks_limit)?;

    Ok(Json(link.into()))
}

/// Deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// - 404 Not Found if the link doesn't exist
/// - 401 Unauthorized if the caller is not the owner
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Caller(requester): Caller,
) -> Result<StatusCode, AppError> {
    state.link_service.remove_link(requester, &code)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Sweeps every expired link, whoever owns it.
///
/// # Endpoint
///
/// `POST /api/links/clear`
pub async fn clear_links_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.link_service.remove_expired_links();
    Json(ClearResponse { removed })
}
