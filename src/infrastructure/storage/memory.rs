//! In-memory link store backed by a sharded concurrent map.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::{LinkStore, ShortLink, StoreOutcome};

/// Volatile in-memory implementation of [`LinkStore`].
///
/// DashMap shards the key space across independently locked buckets, so
/// stores for distinct codes proceed in parallel and retrievals never wait
/// on an unrelated in-flight insert. The `entry` API makes the
/// check-and-insert a single atomic operation per code.
#[derive(Debug, Default)]
pub struct MemoryStore {
    links: DashMap<String, ShortLink>,
}

impl MemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of links currently held.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no links are held.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl LinkStore for MemoryStore {
    fn store(&self, link: ShortLink) -> StoreOutcome {
        match self.links.entry(link.code.clone()) {
            Entry::Occupied(_) => StoreOutcome::Rejected,
            Entry::Vacant(slot) => {
                slot.insert(link);
                StoreOutcome::Stored
            }
        }
    }

    fn retrieve(&self, code: &str) -> Option<ShortLink> {
        self.links.get(code).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_store_and_retrieve() {
        let store = MemoryStore::new();

        let outcome = store.store(ShortLink::new("abc123", "https://example.com"));
        assert_eq!(outcome, StoreOutcome::Stored);

        let link = store.retrieve("abc123").unwrap();
        assert_eq!(link.original_url, "https://example.com");
    }

    #[test]
    fn test_retrieve_unknown_code() {
        let store = MemoryStore::new();

        assert!(store.retrieve("nope").is_none());
    }

    #[test]
    fn test_store_rejects_occupied_code() {
        let store = MemoryStore::new();

        store.store(ShortLink::new("abc123", "https://example.com"));
        let outcome = store.store(ShortLink::new("abc123", "https://other.com"));
        assert_eq!(outcome, StoreOutcome::Rejected);

        // The original link is untouched.
        let link = store.retrieve("abc123").unwrap();
        assert_eq!(link.original_url, "https://example.com");
    }

    #[test]
    fn test_concurrent_same_code_single_winner() {
        let store = Arc::new(MemoryStore::new());
        let threads = 16;

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.store(ShortLink::new(
                        "contested",
                        format!("https://example{i}.com"),
                    ))
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let winners = outcomes.iter().filter(|o| o.is_stored()).count();
        assert_eq!(winners, 1);

        // The stored URL matches exactly one contender, not a mix.
        let url = store.retrieve("contested").unwrap().original_url;
        assert!((0..threads).any(|i| url == format!("https://example{i}.com")));
    }

    #[test]
    fn test_concurrent_distinct_codes_all_stored() {
        let store = Arc::new(MemoryStore::new());
        let threads = 16;

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.store(ShortLink::new(
                        format!("code-{i:03}"),
                        format!("https://example{i}.com"),
                    ))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), StoreOutcome::Stored);
        }

        for i in 0..threads {
            let link = store.retrieve(&format!("code-{i:03}")).unwrap();
            assert_eq!(link.original_url, format!("https://example{i}.com"));
        }
        assert_eq!(store.len(), threads);
    }
}
