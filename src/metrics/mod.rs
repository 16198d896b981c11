//! Store Metrics System
//!
//! Provides BTreeMap-based metrics reporting. The store keeps a set of plain
//! counters that are updated as a side effect of lookups and writes; they are
//! observational only and never influence eviction decisions.
//!
//! BTreeMap is used instead of HashMap so metrics always come out in the same
//! order, which keeps test assertions and logged output reproducible.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruStoreMetrics;

/// Counters common to any recency-ordered store
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of `get` requests made to the store
    pub requests: u64,

    /// Number of requests that found their key
    pub cache_hits: u64,

    /// Number of new entries linked into the store
    pub insertions: u64,

    /// Number of `put` calls that overwrote an existing entry
    pub updates: u64,

    /// Number of entries discarded because the store was over capacity
    pub evictions: u64,

    /// Number of entries removed explicitly by the caller
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new entry being linked at the MRU end
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an in-place overwrite of an existing entry
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records the LRU entry being discarded to restore the capacity bound
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an explicit removal
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Number of lookups that missed
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Calculates the hit rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates the miss rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Trait for uniform metrics reporting
///
/// Keys in the returned map are sorted alphabetically for consistent output.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU")
    fn algorithm_name(&self) -> &'static str;
}
