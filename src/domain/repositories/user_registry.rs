//! Registry of known user identities.

use crate::domain::entities::UserId;

/// Set of registered identities.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryUserRegistry`] - hash-set backed
pub trait UserRegistry: Send + Sync {
    /// Adds an identity. Returns false if it was already present.
    fn add(&self, id: UserId) -> bool;

    /// O(1) membership check.
    fn contains(&self, id: &UserId) -> bool;
}
