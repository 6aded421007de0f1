//! User identity registration and lookup.

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::UserId;
use crate::domain::repositories::UserRegistry;

/// Service issuing and checking opaque user identities.
pub struct UserService<R: UserRegistry> {
    registry: Arc<R>,
}

impl<R: UserRegistry> UserService<R> {
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Issues a fresh identity and records it.
    pub fn register(&self) -> UserId {
        let id = UserId::new();
        self.registry.add(id);
        info!(user = %id, "User registered");
        id
    }

    /// Returns true if `id` was issued by [`Self::register`].
    pub fn exists(&self, id: &UserId) -> bool {
        self.registry.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryUserRegistry;

    #[test]
    fn test_register_then_exists() {
        let service = UserService::new(Arc::new(MemoryUserRegistry::new()));
        let id = service.register();

        assert!(service.exists(&id));
        assert!(!service.exists(&UserId::new()));
    }
}
