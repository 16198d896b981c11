//! Least Recently Used (LRU) Store Implementation
//!
//! A fixed-capacity key-value store that discards the entry which has gone the
//! longest without being read or written once a new key would push it past
//! capacity.
//!
//! # Algorithm
//!
//! Two structures are kept in lockstep:
//!
//! - an **index** (`HashMap<K, Slot>`) mapping each key to the arena slot of
//!   its node, and
//! - a **recency list** of nodes bounded by a head and a tail sentinel. The
//!   node next to the head sentinel is the most recently used (MRU) entry and
//!   the node next to the tail sentinel is the least recently used (LRU) one.
//!
//! ```text
//!   index: { 1 -> #3, 3 -> #2 }
//!
//!   [HEAD] <-> #2 (3, 30) <-> #3 (1, 10) <-> [TAIL]
//!               MRU                LRU
//! ```
//!
//! A hit relinks its node after the head sentinel. An insert links a new node
//! there and, when that leaves one entry too many, unlinks the node before the
//! tail sentinel and drops its key from the index.
//!
//! # Performance Characteristics
//!
//! - Get: O(1) expected, never allocates
//! - Put: O(1) expected (amortized for slot growth)
//! - Remove: O(1) expected
//! - Iteration, snapshot, `check_invariants`: O(n)
//!
//! # Capacity
//!
//! Capacity is a signed integer stored exactly as given. A capacity of zero or
//! less is valid and produces a store that retains nothing.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe and provides no internal locking.
//! For concurrent access, wrap the store in a synchronization primitive such as
//! `Mutex` so that every call is serialized.

extern crate alloc;

use crate::config::LruStoreConfig;
use crate::error::InvariantError;
use crate::list::{self, List, Slot};
use crate::metrics::{CacheMetrics, LruStoreMetrics};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::{self, Vec};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on how many slots are reserved up front. Larger capacities
/// grow on demand.
const PREALLOCATE_LIMIT: usize = 4096;

/// A fixed-capacity key-value store with least-recently-used eviction.
///
/// Values are handed out by clone; no reference into the store outlives the
/// call that produced it, except through the borrowing [`iter`](Self::iter).
///
/// # Examples
///
/// ```
/// use lru_store::LruStore;
///
/// let mut store = LruStore::new(2);
///
/// store.put("apple", 1);
/// store.put("banana", 2);
///
/// // Reading promotes "apple" to most recently used
/// assert_eq!(store.get(&"apple"), Some(1));
///
/// // Inserting a third key evicts the least recently used one
/// assert_eq!(store.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(store.get(&"banana"), None);
/// assert_eq!(store.get(&"apple"), Some(1));
/// assert_eq!(store.get(&"cherry"), Some(3));
/// ```
pub struct LruStore<K, V, S = DefaultHashBuilder> {
    config: LruStoreConfig,
    list: List<(K, V)>,
    map: HashMap<K, Slot, S>,
    metrics: LruStoreMetrics,
}

impl<K: Hash + Eq, V> LruStore<K, V> {
    /// Creates a store that holds at most `capacity` entries.
    ///
    /// Any integer is accepted. Zero or a negative value yields a store on
    /// which `put` is a no-op and `get` always misses.
    pub fn new(capacity: isize) -> LruStore<K, V, DefaultHashBuilder> {
        LruStore::with_hasher(LruStoreConfig { capacity }, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruStore<K, V, S> {
    /// Creates a store from a configuration, using `hasher` or the default
    /// hash builder when `None`.
    pub fn init(config: LruStoreConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }

    /// Creates a store from a configuration and an explicit hash builder.
    pub fn with_hasher(config: LruStoreConfig, hash_builder: S) -> Self {
        let reserve = config.max_entries().min(PREALLOCATE_LIMIT);
        if config.capacity <= 0 {
            tracing::debug!(
                capacity = config.capacity,
                "LRU store created with non-positive capacity; it will retain nothing"
            );
        }
        LruStore {
            config,
            list: List::with_capacity(reserve),
            map: HashMap::with_capacity_and_hasher(reserve, hash_builder),
            metrics: LruStoreMetrics::new(config.capacity),
        }
    }

    /// Returns the capacity exactly as it was configured.
    #[inline]
    pub fn capacity(&self) -> isize {
        self.config.capacity
    }

    /// Returns the number of entries the store may hold, `max(capacity, 0)`.
    #[inline]
    pub fn max_entries(&self) -> usize {
        self.config.max_entries()
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns true if `key` is present. Does not touch recency.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the store's metrics.
    #[inline]
    pub fn metrics(&self) -> &LruStoreMetrics {
        &self.metrics
    }

    /// Zeroes every metrics counter. Cached entries are untouched.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Looks up `key`, promoting it to most recently used on a hit.
    ///
    /// A miss changes nothing and returns `None`.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let Some(&slot) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.list.move_to_front(slot);
        self.metrics.core.record_hit();
        Some(self.entry(slot).1.clone())
    }

    /// Returns a clone of the value for `key` without touching recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let &slot = self.map.get(key)?;
        Some(self.entry(slot).1.clone())
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.map.remove(key)?;
        let Some((_, value)) = self.list.remove(slot) else {
            panic!(
                "LRU store corrupted: index references vacant slot {}",
                slot.index()
            );
        };
        self.metrics.core.record_removal();
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.unindex(&key);
        self.metrics.core.record_removal();
        Some((key, value))
    }

    /// Drops every entry. The store stays usable with the same capacity.
    pub fn clear(&mut self) {
        let dropped = self.map.len();
        self.map.clear();
        self.list.clear();
        tracing::trace!(dropped, "LRU store cleared");
    }

    /// Iterates entries from most recently used to least recently used.
    ///
    /// Iterating does not touch recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Audits the whole structure.
    ///
    /// Checks that the recency list is a consistent doubly linked chain
    /// between its sentinels, that the index and the list describe exactly the
    /// same set of entries, and that the size respects the capacity bound.
    /// This walks every entry and is meant for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;
        if self.map.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.map.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.max_entries() {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.list.len(),
                self.config.capacity
            )));
        }
        for (key, &slot) in self.map.iter() {
            match self.list.get(slot) {
                Some((stored, _)) if stored == key => {}
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "index entry for slot {} does not match the stored key",
                        slot.index()
                    )));
                }
                None => {
                    return Err(InvariantError::new(format!(
                        "index references vacant slot {}",
                        slot.index()
                    )));
                }
            }
        }
        Ok(())
    }

    fn entry(&self, slot: Slot) -> &(K, V) {
        match self.list.get(slot) {
            Some(entry) => entry,
            None => panic!(
                "LRU store corrupted: index references vacant slot {}",
                slot.index()
            ),
        }
    }

    fn entry_mut(&mut self, slot: Slot) -> &mut (K, V) {
        match self.list.get_mut(slot) {
            Some(entry) => entry,
            None => panic!(
                "LRU store corrupted: index references vacant slot {}",
                slot.index()
            ),
        }
    }

    fn unindex(&mut self, key: &K) {
        assert!(
            self.map.remove(key).is_some(),
            "LRU store corrupted: unlinked entry was not indexed"
        );
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruStore<K, V, S> {
    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// - On a store with capacity `<= 0` this is a no-op.
    /// - An existing key has its value overwritten in place; size is unchanged.
    /// - A new key is linked at the MRU end. If that leaves the store one over
    ///   capacity, the LRU entry is unlinked and returned.
    ///
    /// At most one entry is evicted per call.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.config.capacity <= 0 {
            return None;
        }

        if let Some(&slot) = self.map.get(&key) {
            self.entry_mut(slot).1 = value;
            self.list.move_to_front(slot);
            self.metrics.core.record_update();
            return None;
        }

        let slot = self.list.add((key.clone(), value));
        self.map.insert(key, slot);
        self.metrics.core.record_insertion();

        if self.list.len() > self.max_entries() {
            Some(self.evict())
        } else {
            None
        }
    }

    /// Returns an owned MRU to LRU copy of the contents plus the current size.
    pub fn snapshot(&self) -> Snapshot<K, V>
    where
        V: Clone,
    {
        Snapshot {
            entries: self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    fn evict(&mut self) -> (K, V) {
        let Some((key, value)) = self.list.remove_last() else {
            panic!("LRU store corrupted: eviction requested from an empty recency list");
        };
        self.unindex(&key);
        self.metrics.core.record_eviction();
        tracing::trace!(len = self.list.len(), "evicted least recently used entry");
        (key, value)
    }
}

impl<K, V, S> fmt::Debug for LruStore<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruStore")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruStore<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruStore<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Borrowing MRU to LRU iterator over an [`LruStore`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

/// Owned, point-in-time copy of a store's contents, ordered MRU to LRU.
///
/// Intended for tests and debugging; formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Snapshot<K, V> {
    /// Entries from most recently used to least recently used.
    #[inline]
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Number of entries the store held when the snapshot was taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in MRU to LRU order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Consumes the snapshot, returning its entries.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V> IntoIterator for Snapshot<K, V> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
