//! LRU (Least Recently Used) cache implementation
//!
//! Pairs an AHash-backed index with an arena of intrusively linked nodes.
//! The index stores arena slots; promoting an entry splices its links in
//! place, so other entries' slots stay valid across any reordering.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::stats::CacheStats;

/// Node in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity LRU cache
///
/// Entries are ordered from most-recently used (front) to least-recently
/// used (back). Any read or write of an existing key promotes it to the
/// front; inserting into a full cache evicts the back entry.
pub struct LruCache<K, V> {
    index: HashMap<K, usize, RandomState>,
    slots: Vec<Option<Node<K, V>>>,
    front: Option<usize>,
    back: Option<usize>,
    free: Vec<usize>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new LRU cache holding at most `capacity` entries
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            front: None,
            back: None,
            free: Vec::new(),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Look up a key, promoting it to most-recently used on a hit
    ///
    /// A miss is a normal outcome and leaves the recency order untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(&slot) = self.index.get(key) {
            self.stats.record_hit();
            self.promote(slot);
            self.slots[slot].as_ref().map(|node| &node.value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    /// Look up a key without promoting it or touching the counters
    pub fn peek(&self, key: &K) -> Option<&V> {
        let &slot = self.index.get(key)?;
        self.slots[slot].as_ref().map(|node| &node.value)
    }

    /// Insert a key-value pair, evicting the least-recently used entry
    /// if the cache is full
    ///
    /// Overwriting an existing key updates its value in place and promotes
    /// it; the size is unchanged and nothing is evicted.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            // Overwrite in place, then promote
            if let Some(node) = &mut self.slots[slot] {
                node.value = value;
            }
            self.promote(slot);
            self.stats.record_update();
        } else {
            if self.index.len() == self.capacity {
                self.evict_back();
            }

            let slot = self.alloc_slot();
            self.slots[slot] = Some(Node {
                key: key.clone(),
                value,
                prev: None,
                next: self.front,
            });

            if let Some(front_slot) = self.front {
                if let Some(front_node) = &mut self.slots[front_slot] {
                    front_node.prev = Some(slot);
                }
            }

            self.front = Some(slot);
            if self.back.is_none() {
                self.back = Some(slot);
            }

            self.index.insert(key, slot);
            self.stats.record_insertion();
        }
    }

    /// Remove a key, returning its value if present
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if let Some(slot) = self.index.remove(key) {
            self.unlink(slot);
            let node = self.slots[slot].take();
            self.release_slot(slot);
            node.map(|node| node.value)
        } else {
            None
        }
    }

    /// Copy the cache contents in recency order, most-recently used first
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Iterate over entries in recency order, most-recently used first
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            cursor: self.front,
        }
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries, keeping capacity and statistics
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.front = None;
        self.back = None;
    }

    /// Get the hit/miss/eviction counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn promote(&mut self, slot: usize) {
        if self.front == Some(slot) {
            return; // Already at front
        }

        self.unlink(slot);

        if let Some(node) = &mut self.slots[slot] {
            node.prev = None;
            node.next = self.front;
        }

        if let Some(front_slot) = self.front {
            if let Some(front_node) = &mut self.slots[front_slot] {
                front_node.prev = Some(slot);
            }
        }

        self.front = Some(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = if let Some(node) = &self.slots[slot] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_slot) => {
                if let Some(prev_node) = &mut self.slots[prev_slot] {
                    prev_node.next = next;
                }
            }
            None => {
                self.front = next;
            }
        }

        match next {
            Some(next_slot) => {
                if let Some(next_node) = &mut self.slots[next_slot] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.back = prev;
            }
        }
    }

    // The back node must still occupy its slot when unlinked; take it only
    // after the links and back pointer are repaired.
    fn evict_back(&mut self) {
        if let Some(back_slot) = self.back {
            self.unlink(back_slot);
            if let Some(node) = self.slots[back_slot].take() {
                self.index.remove(&node.key);
            }
            self.release_slot(back_slot);
            self.stats.record_eviction();
        }
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(slot) = self.free.pop() {
            slot
        } else {
            let slot = self.slots.len();
            self.slots.push(None);
            slot
        }
    }

    fn release_slot(&mut self, slot: usize) {
        self.free.push(slot);
    }
}

/// Borrowed traversal of cache entries, most-recently used first
pub struct Iter<'a, K, V> {
    slots: &'a [Option<Node<K, V>>],
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.slots[slot].as_ref()?;
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}
