//! Error types for lrucache

/// Result type alias for lrucache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// Lookups never fail: a miss is reported as `None` (or the `-1` sentinel
/// on [`IntLruCache::get`](crate::IntLruCache::get)), not as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A constructor argument is out of range (e.g. capacity <= 0)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_capacity(capacity: impl std::fmt::Display) -> Self {
        Error::InvalidArgument(format!("capacity must be at least 1, got {}", capacity))
    }
}
