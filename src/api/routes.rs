//! API route configuration.
//!
//! Owner-scoped endpoints identify the caller through the `X-User-Id` header
//! (see [`crate::api::middleware::Caller`]).

use crate::api::handlers::{
    clear_links_handler, delete_link_handler, list_links_handler, lookup_user_handler,
    register_handler, shorten_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /users`         - Register a new user
/// - `GET    /users/{id}`    - Check a user id exists
/// - `POST   /shorten`       - Create a short link
/// - `GET    /links`         - List the caller's links
/// - `PATCH  /links/{code}`  - Change a link's click limit
/// - `DELETE /links/{code}`  - Delete a link
/// - `POST   /links/clear`   - Remove all expired links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register_handler))
        .route("/users/{id}", get(lookup_user_handler))
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/clear", post(clear_links_handler))
        .route(
            "/links/{code}",
            patch(update_link_handler).delete(delete_link_handler),
        )
}
