//! Integer-keyed cache with the `-1` miss sentinel

use tracing::trace;

use crate::error::{Error, Result};
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Value returned by [`IntLruCache::get`] when the key is absent
pub const MISS_SENTINEL: i64 = -1;

/// LRU cache mapping integer keys to integer values
///
/// Keeps the classic `get`/`put` contract where a miss reads as `-1`.
/// Use [`lookup`](Self::lookup) where a stored `-1` must be told apart from
/// a miss.
pub struct IntLruCache {
    inner: LruCache<i64, i64>,
    stats: CacheStats,
}

impl IntLruCache {
    /// Create a cache holding at most `capacity` entries
    ///
    /// Returns [`Error::InvalidArgument`] when `capacity <= 0`.
    pub fn new(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|&c| c > 0)
            .ok_or_else(|| Error::invalid_capacity(capacity))?;

        Ok(Self {
            inner: LruCache::new(capacity)?,
            stats: CacheStats::new(),
        })
    }

    /// Get the value for `key`, or [`MISS_SENTINEL`] if absent
    ///
    /// A hit marks the key most recently used. A stored value of `-1` is
    /// indistinguishable from a miss here; use [`lookup`](Self::lookup) to
    /// tell them apart.
    pub fn get(&mut self, key: i64) -> i64 {
        self.lookup(key).unwrap_or(MISS_SENTINEL)
    }

    /// Get the value for `key`, marking it most recently used
    pub fn lookup(&mut self, key: i64) -> Option<i64> {
        match self.inner.get(&key).copied() {
            Some(value) => {
                self.stats.record_hit();
                trace!(key, "cache hit");
                Some(value)
            }
            None => {
                self.stats.record_miss();
                trace!(key, "cache miss");
                None
            }
        }
    }

    /// Insert or overwrite `key`, evicting the LRU entry if over capacity
    pub fn put(&mut self, key: i64, value: i64) {
        if self.inner.contains(&key) {
            self.stats.record_update();
            trace!(key, "cache update");
        } else {
            self.stats.record_insert();
        }

        if let Some((evicted, _)) = self.inner.put(key, value) {
            self.stats.record_eviction();
            trace!(key, evicted, "evicted to make room");
        }
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
