//! Sharded in-memory link store.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, Retention, Updated};

/// [`LinkStore`] backed by a [`DashMap`].
///
/// Each shard has its own `RwLock`, so operations on unrelated codes rarely
/// contend and no operation ever takes a store-wide lock.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, Link>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for MemoryLinkStore {
    fn find(&self, code: &str) -> Option<Link> {
        self.links.get(code).map(|entry| entry.value().clone())
    }

    fn find_all(&self) -> Vec<Link> {
        self.links.iter().map(|entry| entry.value().clone()).collect()
    }

    fn save(&self, link: Link) -> Link {
        self.links.insert(link.short_code.clone(), link.clone());
        link
    }

    fn insert_new(&self, link: Link) -> Result<Link, Link> {
        match self.links.entry(link.short_code.clone()) {
            Entry::Occupied(_) => Err(link),
            Entry::Vacant(entry) => {
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    fn remove(&self, code: &str) -> Option<Link> {
        self.links.remove(code).map(|(_, link)| link)
    }

    fn remove_where(&self, predicate: &(dyn Fn(&Link) -> bool + Sync)) -> usize {
        let mut removed = 0;
        self.links.retain(|_, link| {
            let matched = predicate(link);
            if matched {
                removed += 1;
            }
            !matched
        });
        debug!(removed, "Conditional sweep finished");
        removed
    }

    fn update(
        &self,
        code: &str,
        apply: &mut dyn FnMut(&mut Link) -> Retention,
    ) -> Option<Updated> {
        // Holding the entry keeps the shard write-locked until the match ends.
        match self.links.entry(code.to_string()) {
            Entry::Occupied(mut entry) => {
                let retention = apply(entry.get_mut());
                let link = match retention {
                    Retention::Keep => entry.get().clone(),
                    Retention::Evict => entry.remove(),
                };
                Some(Updated { link, retention })
            }
            Entry::Vacant(_) => None,
        }
    }

    fn contains(&self, code: &str) -> bool {
        self.links.contains_key(code)
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}
