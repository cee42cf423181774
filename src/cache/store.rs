//! Cache Store Module
//!
//! The key-to-entry map behind the cache handle: insertion, lookup, and the
//! bulk removal pass used by the background sweeper.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::entry::CacheEntry;

// == Cache Store ==

/// Key-value storage for raw catalog responses with a fixed staleness window.
///
/// The store itself is not synchronized; [`Cache`](crate::cache::Cache)
/// wraps it in a reader-writer lock, and the sweeper takes that lock
/// exclusively for the duration of each removal pass.
#[derive(Debug)]
pub struct CacheStore {
    /// Cached payloads keyed by request identity (the full request URL)
    entries: HashMap<String, CacheEntry>,
    /// How old an entry may grow before a removal pass deletes it
    stale_limit: Duration,
}

impl CacheStore {
    /// Creates an empty store with the given staleness window.
    ///
    /// # Arguments
    /// * `stale_limit` - Age past which entries are removed by `remove_stale`
    pub fn new(stale_limit: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_limit,
        }
    }

    // == Insert ==

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// Replacement is total: the prior payload and its timestamp are both
    /// discarded, so the entry's age restarts from this call. Empty keys and
    /// empty payloads are accepted.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==

    /// Returns a copy of the payload stored under `key`, if any.
    ///
    /// Age is deliberately not checked here: entries are served until the
    /// sweeper removes them, even once they are past the staleness window.
    /// Lookups never mutate the store.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Remove Stale ==

    /// Removes every entry strictly older than the staleness window.
    ///
    /// Runs as a single pass over the whole map; the caller is expected to
    /// hold exclusive access for the duration.
    ///
    /// # Returns
    /// The number of entries removed
    pub fn remove_stale(&mut self) -> usize {
        let stale_limit = self.stale_limit;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(stale_limit));
        before - self.entries.len()
    }

    /// Returns the number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
