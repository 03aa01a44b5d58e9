//! # lrucache
//!
//! Fixed-capacity LRU cache with O(1) lookup and O(1) recency-ordered
//! eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to list slot (O(1))
//! - **LRU List**: Slab-backed doubly-linked list, MRU at the head (O(1))
//! - **Facades**: [`IntLruCache`] for the integer `get`/`put` contract with a
//!   `-1` miss sentinel, [`SharedLruCache`] for multi-threaded callers
//!
//! ```
//! use lrucache::IntLruCache;
//!
//! let mut cache = IntLruCache::new(2)?;
//! cache.put(1, 1);
//! cache.put(2, 2);
//! assert_eq!(cache.get(1), 1);
//! cache.put(3, 3); // evicts 2
//! assert_eq!(cache.get(2), -1);
//! # Ok::<(), lrucache::Error>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod int;
mod lru;
mod shared;
mod stats;

pub use config::CacheConfig;
pub use error::{Error, Result};
pub use int::{IntLruCache, MISS_SENTINEL};
pub use lru::{Iter, LruCache};
pub use shared::SharedLruCache;
pub use stats::{CacheStats, StatsSnapshot};
