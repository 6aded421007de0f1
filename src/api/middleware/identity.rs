//! Caller identity extraction.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde_json::json;

use crate::domain::entities::UserId;
use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's opaque identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The registered user making the request.
///
/// Rejects with 401 when the header is missing, malformed, or names an
/// identity that was never registered.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub UserId);

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Please register or login",
                    json!({ "reason": "Missing X-User-Id header" }),
                )
            })?;

        let id: UserId = raw.parse().map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid user id" }))
        })?;

        if !state.user_service.exists(&id) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Unknown user id" }),
            ));
        }

        Ok(Caller(id))
    }
}
