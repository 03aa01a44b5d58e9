//! SharedLruCache: lock-guarded LRU cache handle for multi-threaded callers

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cloneable, thread-safe handle to a single [`LruCache`]
///
/// Every lookup reorders the list, so reads take the same exclusive lock as
/// writes. The lock is held for one operation and never while running caller
/// code.
pub struct SharedLruCache<K, V> {
    /// LRU cache guarded by a whole-structure lock
    cache: Arc<Mutex<LruCache<K, V>>>,

    /// Cache statistics
    stats: Arc<CacheStats>,

    /// Cache capacity
    capacity: usize,
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
            capacity: self.capacity,
        }
    }
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of items in cache
    ///
    /// # Returns
    /// * `Result<SharedLruCache>` - Handle, or `InvalidArgument` for zero capacity
    pub fn new(capacity: usize) -> Result<Self> {
        Self::from_config(&CacheConfig { capacity })
    }

    /// Create a new shared cache from a [`CacheConfig`]
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            cache: Arc::new(Mutex::new(LruCache::from_config(config)?)),
            stats: Arc::new(CacheStats::new()),
            capacity: config.capacity,
        })
    }

    /// Get a copy of the value for `key`, marking it most recently used
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.cache.lock().get(key).cloned();

        if value.is_some() {
            self.stats.record_hit();
            trace!("shared cache hit");
        } else {
            self.stats.record_miss();
            trace!("shared cache miss");
        }

        value
    }

    /// Insert or overwrite a value, returning the evicted entry if any
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let (existed, evicted) = {
            let mut cache = self.cache.lock();
            let existed = cache.contains(&key);
            (existed, cache.put(key, value))
        };

        if existed {
            self.stats.record_update();
        } else {
            self.stats.record_insert();
        }
        if evicted.is_some() {
            self.stats.record_eviction();
        }

        evicted
    }

    /// Check whether a key is cached, without touching recency order
    pub fn contains(&self, key: &K) -> bool {
        self.cache.lock().contains(key)
    }

    /// Get statistics shared by every clone of this handle
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset statistics (cached entries remain)
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
