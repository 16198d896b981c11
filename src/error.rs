//! Error types for the LRU store.
//!
//! The store's public operations are total: a missing key is `None`, and a
//! non-positive capacity simply yields a store that retains nothing. The only
//! failure this crate models is internal corruption, surfaced by
//! [`LruStore::check_invariants`](crate::LruStore::check_invariants) as an
//! [`InvariantError`].

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Error returned when the store's index and recency sequence disagree.
///
/// Carries a human-readable description of which invariant failed. Reaching
/// this through the public API indicates a bug in the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvariantError {}
