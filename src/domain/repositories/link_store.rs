//! Storage trait for link records.

use crate::domain::entities::Link;

/// What to do with an entry after an in-place update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    Keep,
    Evict,
}

/// Result of [`LinkStore::update`]: the link as it stood after the mutation.
#[derive(Debug, Clone)]
pub struct Updated {
    pub link: Link,
    pub retention: Retention,
}

impl Updated {
    /// Returns true if the entry was removed as part of the update.
    pub fn evicted(&self) -> bool {
        self.retention == Retention::Evict
    }
}

/// Thread-safe keyed storage of links, keyed by short code.
///
/// Per-key operations are individually atomic. None of them fail: a missing key
/// is reported as absence.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkStore`] - sharded in-memory map
pub trait LinkStore: Send + Sync {
    /// Point lookup. Returns a snapshot of the stored link.
    fn find(&self, code: &str) -> Option<Link>;

    /// Snapshot of all live entries.
    fn find_all(&self) -> Vec<Link>;

    /// Inserts or overwrites by `short_code`; returns the stored link.
    fn save(&self, link: Link) -> Link;

    /// Inserts `link` only if its code is unused; hands the link back otherwise.
    fn insert_new(&self, link: Link) -> Result<Link, Link>;

    /// Deletes the entry if present and returns it.
    fn remove(&self, code: &str) -> Option<Link>;

    /// Removes every entry matching `predicate` and returns how many were removed.
    ///
    /// Entries are checked and removed one lock section at a time; an entry
    /// inserted while the sweep runs may or may not be visited.
    fn remove_where(&self, predicate: &(dyn Fn(&Link) -> bool + Sync)) -> usize;

    /// Atomic read-modify-write of a single entry.
    ///
    /// `apply` runs while the entry is exclusively locked. Returning
    /// [`Retention::Evict`] removes the entry inside the same critical section.
    /// Returns `None` without inserting anything when `code` is absent.
    fn update(&self, code: &str, apply: &mut dyn FnMut(&mut Link) -> Retention)
    -> Option<Updated>;

    /// Returns true if `code` is currently stored.
    fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Number of stored links.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
