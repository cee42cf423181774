//! Cache Module
//!
//! Time-bounded storage for raw catalog responses, shared between the fetch
//! path and a background sweeper.
//!
//! # Components
//! - `entry`: A single cached payload with its insertion timestamp
//! - `store`: The key-to-entry map and its bulk removal pass
//! - `Cache`: The concurrency-safe handle wrapping the store in a
//!   reader-writer lock

mod entry;
mod store;


pub use entry::CacheEntry;
pub use store::CacheStore;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::tasks::{spawn_sweeper, SweeperHandle};

// == Cache ==

/// Concurrency-safe handle to the response cache.
///
/// Clones share one underlying store behind a reader-writer lock: any number
/// of concurrent `get` calls proceed together, while `add` and the
/// background sweeper serialize their mutations against readers and each
/// other.
///
/// Staleness is insertion-based and enforced only by the sweeper, never by
/// `get`. A read may therefore return an entry an instant before a sweep
/// would have removed it, and a stale entry lives at most just under two
/// full staleness windows before it is gone.
#[derive(Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
}

impl Cache {
    /// Creates an empty cache and launches its background sweeper.
    ///
    /// The sweeper wakes every `stale_limit`, takes the write lock, and
    /// removes every entry older than `stale_limit` in a single pass. The
    /// returned handle is the only way to stop it; callers that own a
    /// process lifecycle should call [`SweeperHandle::shutdown`] so the task
    /// exits cleanly.
    ///
    /// # Arguments
    /// * `stale_limit` - Staleness window and sweep cadence, one value
    ///
    /// # Returns
    /// The cache handle and the handle controlling its sweeper
    pub fn new(stale_limit: Duration) -> (Self, SweeperHandle) {
        let store = Arc::new(RwLock::new(CacheStore::new(stale_limit)));
        let sweeper = spawn_sweeper(Arc::clone(&store), stale_limit);
        (Self { store }, sweeper)
    }

    // == Add ==

    /// Stores `value` under `key` with a fresh timestamp, replacing any
    /// previous entry for that key.
    pub async fn add(&self, key: String, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.insert(key, value);
    }

    // == Get ==

    /// Returns a copy of the payload under `key`, or `None` when absent.
    ///
    /// Takes only the shared read lock and never removes anything: the
    /// sweeper is the sole eviction path.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        let value = store.get(key);
        match value {
            Some(_) => debug!("cache hit for {}", key),
            None => debug!("cache miss for {}", key),
        }
        value
    }

    // == Length ==

    /// Returns the number of cached entries, fresh or stale-but-unswept.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Checks whether the cache currently holds no entries.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
