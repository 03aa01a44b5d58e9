//! Cache construction parameters

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Validated construction parameters shared by every cache type
///
/// Deserializable so embedding applications can keep cache sizing next to
/// the rest of their configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries held at once
    pub capacity: usize,
}

impl CacheConfig {
    /// Build a config, rejecting a zero capacity
    pub fn new(capacity: usize) -> Result<Self> {
        let config = Self { capacity };
        config.validate()?;
        Ok(config)
    }

    /// Check the config before a cache is built from it
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid_capacity(self.capacity));
        }
        Ok(())
    }
}
