//! LRU Store Metrics
//!
//! Metrics reported by [`LruStore`](crate::LruStore).

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
///
/// Alongside the core counters this records the configured capacity, so a
/// report can be read without access to the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruStoreMetrics {
    /// Core metrics common to all recency-ordered stores
    pub core: CoreCacheMetrics,
    /// Capacity the store was created with, exactly as given
    pub capacity: isize,
}

impl LruStoreMetrics {
    /// Creates zeroed metrics for a store created with `capacity`
    pub fn new(capacity: isize) -> Self {
        Self {
            core: CoreCacheMetrics::new(),
            capacity,
        }
    }

    /// Zeroes every counter, keeping the recorded capacity
    pub fn reset(&mut self) {
        self.core = CoreCacheMetrics::new();
    }

    /// Converts LRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics
    }
}

impl CacheMetrics for LruStoreMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
