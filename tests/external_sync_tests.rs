//! The store has no internal locking. These tests share one store across
//! worker threads by serializing every call through a single `Mutex`, and
//! check that the structure is intact afterwards.

use lru_store::LruStore;
use scoped_threadpool::Pool;
use std::sync::Mutex;

#[test]
fn test_mutex_serialized_writers_and_readers() {
    let store = Mutex::new(LruStore::new(100));
    let mut pool = Pool::new(8);

    pool.scoped(|scope| {
        for t in 0..4 {
            let store = &store;
            scope.execute(move || {
                for i in 0..250 {
                    let key = format!("thread_{}_key_{}", t, i);
                    store.lock().unwrap().put(key, t * 1000 + i);
                }
            });
        }
        for t in 0..4 {
            let store = &store;
            scope.execute(move || {
                for i in 0..250 {
                    let key = format!("thread_{}_key_{}", t, i);
                    let _ = store.lock().unwrap().get(&key);
                }
            });
        }
    });

    let guard = store.lock().unwrap();
    assert_eq!(guard.len(), 100);
    guard.check_invariants().unwrap();
}

#[test]
fn test_mutex_serialized_mixed_operations() {
    let store = Mutex::new(LruStore::new(50));
    let mut pool = Pool::new(8);

    pool.scoped(|scope| {
        for t in 0..8usize {
            let store = &store;
            scope.execute(move || {
                for i in 0..1000usize {
                    let key = i % 120;
                    let mut guard = store.lock().unwrap();
                    match (i + t) % 4 {
                        0 | 1 => {
                            guard.put(key, t);
                        }
                        2 => {
                            let _ = guard.get(&key);
                        }
                        _ => {
                            let _ = guard.remove(&key);
                        }
                    }
                }
            });
        }
    });

    let guard = store.lock().unwrap();
    assert!(guard.len() <= 50);
    guard.check_invariants().unwrap();
}
