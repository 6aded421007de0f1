//! Hash-set backed user registry.

use dashmap::DashSet;

use crate::domain::entities::UserId;
use crate::domain::repositories::UserRegistry;

#[derive(Debug, Default)]
pub struct MemoryUserRegistry {
    users: DashSet<UserId>,
}

impl MemoryUserRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRegistry for MemoryUserRegistry {
    fn add(&self, id: UserId) -> bool {
        self.users.insert(id)
    }

    fn contains(&self, id: &UserId) -> bool {
        self.users.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_contains() {
        let registry = MemoryUserRegistry::new();
        let id = UserId::new();

        assert!(!registry.contains(&id));
        assert!(registry.add(id));
        assert!(registry.contains(&id));
        assert!(!registry.add(id));
    }
}
