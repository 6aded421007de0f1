//! In-memory storage implementations.

mod link_store;
mod user_registry;

pub use link_store::MemoryLinkStore;
pub use user_registry::MemoryUserRegistry;
