//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod users;

pub use health::health_handler;
pub use links::{
    clear_links_handler, delete_link_handler, list_links_handler, update_link_handler,
};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use users::{lookup_user_handler, register_handler};
