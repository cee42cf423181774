//! Cache Entry Module
//!
//! Defines the structure for individual cached payloads and their age
//! tracking.

use std::time::{Duration, Instant};

// == Cache Entry ==

/// A single cached payload together with the instant it was stored.
///
/// Entries are immutable once inserted: replacing a key stores a brand new
/// entry with a fresh timestamp. Reads never touch the timestamp, so an
/// entry's age always measures time since the most recent insertion.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response payload
    pub value: Vec<u8>,
    /// When this entry was inserted, set exactly once
    created_at: Instant,
}

impl CacheEntry {
    /// Creates a new entry holding `value`, timestamped now.
    ///
    /// # Arguments
    /// * `value` - The payload to cache; an empty payload is valid
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// Returns the time elapsed since this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Checks whether this entry's age strictly exceeds `stale_limit`.
    ///
    /// An entry aged exactly `stale_limit` is still fresh; staleness
    /// requires the window to have fully elapsed.
    ///
    /// # Arguments
    /// * `stale_limit` - How old an entry may grow before it counts as stale
    pub fn is_stale(&self, stale_limit: Duration) -> bool {
        self.age() > stale_limit
    }
}
