//! Store Configuration Module
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Total**: Every value is accepted; nothing here can fail validation
//! - **No boilerplate**: No builder methods needed
//!
//! # Capacity semantics
//!
//! `capacity` is a signed entry count and is stored exactly as given.
//!
//! | `capacity` | Behavior |
//! |------------|----------|
//! | `n > 0` | holds at most `n` entries, evicting the least recently used |
//! | `0` or negative | retains nothing; every `put` is a no-op, every `get` misses |
//!
//! # Examples
//!
//! ```
//! use lru_store::config::LruStoreConfig;
//! use lru_store::LruStore;
//!
//! let config = LruStoreConfig { capacity: 1000 };
//! let store: LruStore<String, i32> = LruStore::init(config, None);
//! assert_eq!(store.capacity(), 1000);
//!
//! // An inert store is a valid configuration, not an error
//! let inert: LruStore<u32, u32> = LruStore::init(LruStoreConfig { capacity: -5 }, None);
//! assert_eq!(inert.max_entries(), 0);
//! ```

use core::fmt;

/// Configuration for an [`LruStore`](crate::LruStore).
///
/// # Fields
///
/// - `capacity`: Maximum number of entries. Values `<= 0` produce a store
///   that never retains anything.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruStoreConfig {
    /// Maximum number of key-value pairs the store can hold.
    pub capacity: isize,
}

impl LruStoreConfig {
    /// Returns the number of entries a store with this configuration may
    /// actually hold: `capacity` clamped at zero.
    #[inline]
    pub fn max_entries(&self) -> usize {
        usize::try_from(self.capacity).unwrap_or(0)
    }
}

impl fmt::Debug for LruStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruStoreConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = LruStoreConfig { capacity: 1000 };
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.max_entries(), 1000);
    }

    #[test]
    fn test_non_positive_capacity_clamps_to_zero() {
        assert_eq!(LruStoreConfig { capacity: 0 }.max_entries(), 0);
        assert_eq!(LruStoreConfig { capacity: -1 }.max_entries(), 0);
        assert_eq!(LruStoreConfig { capacity: isize::MIN }.max_entries(), 0);
    }

    #[test]
    fn test_config_is_copy() {
        let config = LruStoreConfig { capacity: 2 };
        let copied = config;
        assert_eq!(config, copied);
    }
}
