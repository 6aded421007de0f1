//! Handlers for user identity endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::users::UserResponse;
use crate::domain::entities::UserId;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
pub async fn register_handler(State(state): State<AppState>) -> (StatusCode, Json<UserResponse>) {
    let user_id = state.user_service.register();
    (StatusCode::CREATED, Json(UserResponse { user_id }))
}

/// Checks that a user id is registered (the HTTP form of `login`).
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// - 400 Bad Request if `id` is not a UUID
/// - 404 Not Found if it was never registered
pub async fn lookup_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid UUID", json!({ "id": id })))?;

    if !state.user_service.exists(&user_id) {
        return Err(AppError::not_found(
            "A user with this UUID is not registered",
            json!({ "id": id }),
        ));
    }

    Ok(Json(UserResponse { user_id }))
}
