//! Arena-backed doubly linked recency list.
//!
//! Nodes live in a contiguous `Vec` and link to each other by index. Slots
//! `0` and `1` are reserved for the head and tail sentinels, which never hold
//! a value and are never unlinked, so attach and detach never special-case
//! an empty list. Vacated slots go on a free list and are reused by the next
//! insertion, keeping handles stable for as long as an entry is live.

extern crate alloc;

use crate::error::InvariantError;
use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

const HEAD: usize = 0;
const TAIL: usize = 1;
const SENTINELS: usize = 2;

/// Stable handle to an occupied node in a [`List`].
///
/// A `Slot` stays valid until its entry is removed; afterwards the index may
/// be handed out again for a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Slot(usize);

impl Slot {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A node in the list. Sentinels carry `val: None`.
struct Entry<T> {
    val: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Entry<T> {
    fn sigil(prev: usize, next: usize) -> Self {
        Entry {
            val: None,
            prev,
            next,
        }
    }
}

/// A doubly linked list stored in an index arena.
///
/// The front (next to the head sentinel) is the most recently used end and
/// the back (next to the tail sentinel) is the least recently used end.
pub(crate) struct List<T> {
    nodes: Vec<Entry<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list holding only the two linked sentinels.
    pub(crate) fn new() -> List<T> {
        List::with_capacity(0)
    }

    /// Creates an empty list with room for `cap` entries before reallocating.
    pub(crate) fn with_capacity(cap: usize) -> List<T> {
        let mut nodes = Vec::with_capacity(cap.saturating_add(SENTINELS));
        nodes.push(Entry::sigil(HEAD, TAIL));
        nodes.push(Entry::sigil(HEAD, TAIL));
        List {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of live entries.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries sit between the sentinels.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `slot` currently refers to a live entry.
    #[inline]
    pub(crate) fn is_occupied(&self, slot: Slot) -> bool {
        slot.0 >= SENTINELS
            && self
                .nodes
                .get(slot.0)
                .map_or(false, |entry| entry.val.is_some())
    }

    /// Returns the handle of the most recently used entry.
    #[cfg(test)]
    pub(crate) fn first(&self) -> Option<Slot> {
        let first = self.nodes[HEAD].next;
        (first != TAIL).then_some(Slot(first))
    }

    /// Returns the handle of the least recently used entry.
    pub(crate) fn last(&self) -> Option<Slot> {
        let last = self.nodes[TAIL].prev;
        (last != HEAD).then_some(Slot(last))
    }

    /// Stores `v` in a fresh or recycled slot and links it at the front.
    pub(crate) fn add(&mut self, v: T) -> Slot {
        let entry = Entry {
            val: Some(v),
            prev: HEAD,
            next: HEAD,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = entry;
                idx
            }
            None => {
                self.nodes.push(entry);
                self.nodes.len() - 1
            }
        };
        self.attach(idx);
        self.len += 1;
        Slot(idx)
    }

    /// Relinks a live entry immediately after the head sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `slot` does not refer to a live entry.
    pub(crate) fn move_to_front(&mut self, slot: Slot) {
        assert!(
            self.is_occupied(slot),
            "recency list corrupted: move_to_front on vacant slot {}",
            slot.0
        );
        if self.nodes[HEAD].next == slot.0 {
            return;
        }
        self.detach(slot.0);
        self.attach(slot.0);
    }

    /// Unlinks the entry at `slot`, frees the slot and returns its value.
    ///
    /// Returns `None` if `slot` is a sentinel or already vacant.
    pub(crate) fn remove(&mut self, slot: Slot) -> Option<T> {
        if !self.is_occupied(slot) {
            return None;
        }
        self.detach(slot.0);
        let val = self.nodes[slot.0].val.take();
        self.free.push(slot.0);
        self.len -= 1;
        val
    }

    /// Removes the entry adjacent to the tail sentinel.
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        let last = self.last()?;
        self.remove(last)
    }

    #[inline]
    pub(crate) fn get(&self, slot: Slot) -> Option<&T> {
        if slot.0 < SENTINELS {
            return None;
        }
        self.nodes.get(slot.0).and_then(|entry| entry.val.as_ref())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        if slot.0 < SENTINELS {
            return None;
        }
        self.nodes.get_mut(slot.0).and_then(|entry| entry.val.as_mut())
    }

    /// Drops every entry and relinks the sentinels.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(SENTINELS);
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Iterates entries from the front (MRU) to the back (LRU).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.nodes[HEAD].next,
            remaining: self.len,
        }
    }

    /// Walks the whole chain and checks link symmetry, sentinel placement,
    /// the live count and the free list.
    pub(crate) fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.nodes.len() < SENTINELS {
            return Err(InvariantError::new("sentinel slots missing"));
        }
        if self.nodes[HEAD].val.is_some() || self.nodes[TAIL].val.is_some() {
            return Err(InvariantError::new("sentinel slot holds a value"));
        }

        let mut prev = HEAD;
        let mut cur = self.nodes[HEAD].next;
        let mut count = 0usize;
        while cur != TAIL {
            let Some(entry) = self.nodes.get(cur) else {
                return Err(InvariantError::new(format!(
                    "link from slot {} points outside the arena ({})",
                    prev, cur
                )));
            };
            if cur == HEAD || entry.val.is_none() {
                return Err(InvariantError::new(format!(
                    "slot {} is linked but holds no entry",
                    cur
                )));
            }
            if entry.prev != prev {
                return Err(InvariantError::new(format!(
                    "slot {} has back-link {} but predecessor is {}",
                    cur, entry.prev, prev
                )));
            }
            count += 1;
            if count > self.len {
                return Err(InvariantError::new(format!(
                    "chain is longer than recorded length {}",
                    self.len
                )));
            }
            prev = cur;
            cur = entry.next;
        }
        if self.nodes[TAIL].prev != prev {
            return Err(InvariantError::new(format!(
                "tail sentinel back-link {} but last entry is {}",
                self.nodes[TAIL].prev, prev
            )));
        }
        if count != self.len {
            return Err(InvariantError::new(format!(
                "chain holds {} entries but recorded length is {}",
                count, self.len
            )));
        }
        if self.nodes.len() - SENTINELS != self.len + self.free.len() {
            return Err(InvariantError::new(format!(
                "{} slots allocated but {} live and {} free",
                self.nodes.len() - SENTINELS,
                self.len,
                self.free.len()
            )));
        }
        if let Some(&idx) = self
            .free
            .iter()
            .find(|&&idx| idx < SENTINELS || self.nodes[idx].val.is_some())
        {
            return Err(InvariantError::new(format!(
                "free list holds non-vacant slot {}",
                idx
            )));
        }
        Ok(())
    }

    fn attach(&mut self, idx: usize) {
        let first = self.nodes[HEAD].next;
        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = first;
        self.nodes[first].prev = idx;
        self.nodes[HEAD].next = idx;
    }

    fn detach(&mut self, idx: usize) {
        debug_assert!(idx >= SENTINELS, "sentinels are never detached");
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("length", &self.len)
            .field("slots", &(self.nodes.len() - SENTINELS))
            .field("free", &self.free.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == TAIL {
            return None;
        }
        let entry = &self.list.nodes[self.cursor];
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        entry.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
