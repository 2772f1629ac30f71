//! HotCache: stats-instrumented front over the LRU core

use std::hash::Hash;

use crate::lru::{LruCache, PutStatus};
use crate::stats::CacheStats;

/// LRU cache front that accounts for every hit, miss, insertion, update,
/// and eviction.
///
/// Same contract as [`LruCache`]; the counters are observational only and
/// never change what is stored or evicted.
pub struct HotCache<K, V> {
    /// LRU core holding the entries
    entries: LruCache<K, V>,

    /// Outcome counters
    stats: CacheStats,
}

impl<K, V> HotCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new instrumented cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::new(),
        }
    }

    /// Look up a key, recording a hit or a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or update a key, recording the outcome.
    ///
    /// A rejected put (zero capacity) counts nothing.
    pub fn put(&mut self, key: K, value: V) -> PutStatus {
        let status = self.entries.put(key, value);
        match status {
            PutStatus::Inserted => self.stats.record_insertion(),
            PutStatus::Evicted => {
                self.stats.record_insertion();
                self.stats.record_eviction();
            }
            PutStatus::Updated => self.stats.record_update(),
            PutStatus::Rejected => {}
        }
        status
    }

    /// Remove a key, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Get the outcome counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }
}
