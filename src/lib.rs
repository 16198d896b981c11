#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Structure
//!
//! ```text
//!   index (HashMap<K, Slot>)          recency list (arena of nodes)
//!   ┌─────────┬──────┐
//!   │   "a"   │  #3  │           #0       #3       #2       #1
//!   │   "b"   │  #2  │          HEAD ◀─▶ "a" ◀─▶ "b" ◀─▶ TAIL
//!   └─────────┴──────┘                   MRU      LRU
//! ```
//!
//! Slots `#0` and `#1` are the sentinels. They hold no data, are never
//! unlinked, and let every relink run without checking for an empty list.
//!
//! ## Quick Example
//!
//! ```rust
//! use lru_store::LruStore;
//!
//! let mut store = LruStore::new(2);
//! store.put(1, 10);
//! store.put(2, 20);
//! assert_eq!(store.get(&1), Some(10));
//!
//! // 2 is now least recently used and is evicted
//! assert_eq!(store.put(3, 30), Some((2, 20)));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.entries(), &[(3, 30), (1, 10)]);
//! ```
//!
//! ## Inert Stores
//!
//! A capacity of zero or less is accepted and yields a store that keeps
//! nothing:
//!
//! ```rust
//! use lru_store::LruStore;
//!
//! let mut store = LruStore::new(0);
//! store.put(1, 1);
//! assert!(store.is_empty());
//! assert_eq!(store.get(&1), None);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: The LRU store, its iterator and snapshot type
//! - [`config`]: Configuration structure
//! - [`metrics`]: Hit/miss/eviction counters
//! - [`error`]: Invariant violation error reported by `check_invariants`

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Arena-backed doubly linked list with sentinel slots.
///
/// Internal infrastructure for the store's recency ordering.
pub(crate) mod list;

/// Store configuration.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) store implementation.
///
/// Provides a fixed-capacity store that evicts the least recently used entry
/// once a new key would exceed capacity.
pub mod lru;

/// Store metrics.
///
/// Counters for hits, misses, insertions, overwrites, evictions and removals.
pub mod metrics;

pub use config::LruStoreConfig;
pub use error::InvariantError;
pub use lru::{Iter, LruStore, Snapshot};
pub use metrics::{CacheMetrics, LruStoreMetrics};
