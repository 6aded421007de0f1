//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::domain::redemption::RedeemOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Redeems a short code and redirects to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Each successful request consumes one click. The request that consumes the
/// final click is still redirected; the link is gone afterwards.
///
/// # Errors
///
/// - 404 Not Found if the code is unknown
/// - 410 Gone if the link was inactive, expired or out of clicks (it is
///   removed as part of this request)
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.link_service.redeem(&code) {
        RedeemOutcome::Opened { link, .. } | RedeemOutcome::OpenedAndExpired { link, .. } => {
            Ok(Redirect::temporary(&link.original_url))
        }
        RedeemOutcome::NotFound => Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        )),
        RedeemOutcome::Unavailable { reason } => Err(AppError::unavailable(
            "The expiration date has passed, or the click limit has been reached",
            json!({ "code": code, "reason": reason }),
        )),
    }
}
