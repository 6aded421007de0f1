//! Shared service handles for the CLI and the HTTP server.

use std::sync::Arc;

use crate::application::services::{LinkPolicy, LinkService, UserService};
use crate::infrastructure::memory::{MemoryLinkStore, MemoryUserRegistry};
use crate::infrastructure::opener::UrlOpener;
use crate::utils::code_generator::RandomCodeGenerator;

pub type AppLinkService = LinkService<MemoryLinkStore, RandomCodeGenerator>;
pub type AppUserService = UserService<MemoryUserRegistry>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub user_service: Arc<AppUserService>,
}

impl AppState {
    /// Wires fresh in-memory stores into the services.
    pub fn new(policy: LinkPolicy, base_url: &str, opener: Arc<dyn UrlOpener>) -> Self {
        let link_service = LinkService::new(
            Arc::new(MemoryLinkStore::new()),
            Arc::new(RandomCodeGenerator::default()),
            opener,
            policy,
            base_url,
        );
        let user_service = UserService::new(Arc::new(MemoryUserRegistry::new()));

        Self {
            link_service: Arc::new(link_service),
            user_service: Arc::new(user_service),
        }
    }
}
