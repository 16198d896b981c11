//! Allocation behavior of the LRU store.
//!
//! Uses an instrumented global allocator, so this binary holds a single test
//! to keep other test threads from allocating inside the measured region.

use lru_store::LruStore;
use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const CAPACITY: u64 = 256;

#[test]
fn test_lookups_and_overwrites_do_not_allocate() {
    let mut store = LruStore::new(CAPACITY as isize);
    for i in 0..CAPACITY {
        store.put(i, i * 2);
    }
    // Evict once so the free list has been exercised before measuring
    store.put(CAPACITY, 0);
    store.put(0, 0);

    let region = Region::new(GLOBAL);

    let mut hits = 0u64;
    for i in 0..4 * CAPACITY {
        // Half of these keys are absent
        if store.get(&(i % (2 * CAPACITY))).is_some() {
            hits += 1;
        }
    }
    for i in 0..CAPACITY {
        if store.contains(&i) {
            store.put(i, i);
        }
    }

    let change = region.change();
    assert_eq!(change.allocations, 0, "get/overwrite allocated: {:?}", change);
    assert_eq!(change.reallocations, 0, "get/overwrite reallocated: {:?}", change);
    assert!(hits > 0);
    assert_eq!(store.len(), CAPACITY as usize);
}
