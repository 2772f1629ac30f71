//! LRU (Least Recently Used) cache implementation
//!
//! Pairs a hash index with a slab-backed doubly linked recency list so that
//! lookup, repositioning, and eviction are all O(1). Entries live in a slab
//! of stable slots; the index and the list links store slot indices instead
//! of references, so no aliasing or cyclic ownership is needed. An
//! access-ordered map primitive would also satisfy the same contract, but
//! the index-linked list is the canonical representation here.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

/// One cached key-value pair threaded into the recency list.
///
/// `prev` walks toward the most-recently-used end (`head` has no `prev`),
/// `next` toward the least-recently-used end (`tail` has no `next`).
struct Entry<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Outcome of [`LruCache::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutStatus {
    /// The key was new and stored without displacing anything.
    Inserted,
    /// The key was new; the least-recently-used entry was dropped for room.
    Evicted,
    /// The key was already present; its value was overwritten in place.
    Updated,
    /// The cache has zero capacity and stores nothing.
    Rejected,
}

/// LRU cache with fixed capacity.
///
/// Capacity is set at construction and never changes. Zero is a legal
/// capacity: every `get` misses and every `put` is rejected.
pub struct LruCache<K, V> {
    index: HashMap<K, usize, RandomState>,
    slots: Vec<Option<Entry<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Look up a key, marking it most-recently-used on a hit.
    ///
    /// A miss has no side effect. The returned borrow ends with the call,
    /// so callers never hold references into the cache across mutations.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        self.slots[idx].as_ref().map(|entry| &entry.value)
    }

    /// Insert or update a key, marking it most-recently-used.
    ///
    /// A new key is linked at the head of the recency list; if that pushes
    /// the cache past capacity, the tail entry is evicted. Updating a
    /// present key overwrites in place and never evicts.
    pub fn put(&mut self, key: K, value: V) -> PutStatus {
        if self.capacity == 0 {
            return PutStatus::Rejected;
        }

        if let Some(&idx) = self.index.get(&key) {
            // Update existing
            if let Some(entry) = &mut self.slots[idx] {
                entry.value = value;
            }
            self.move_to_front(idx);
            return PutStatus::Updated;
        }

        // Insert new at the head
        let idx = self.alloc_slot();
        self.slots[idx] = Some(Entry {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.slots[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.index.insert(key, idx);

        // Capacity can be exceeded by at most one per insertion
        if self.index.len() > self.capacity {
            self.evict_lru();
            PutStatus::Evicted
        } else {
            PutStatus::Inserted
        }
    }

    /// Remove a key from the cache, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        self.unlink(idx);
        self.free.push(idx);
        self.slots[idx].take().map(|entry| entry.value)
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(idx);

        if let Some(entry) = &mut self.slots[idx] {
            entry.prev = None;
            entry.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.slots[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.slots[idx] {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_entry) = &mut self.slots[prev_idx] {
                    prev_entry.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_entry) = &mut self.slots[next_idx] {
                    next_entry.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    // Unlink before vacating the slot: unlink reads the entry's links.
    fn evict_lru(&mut self) {
        if let Some(tail_idx) = self.tail {
            self.unlink(tail_idx);
            if let Some(entry) = self.slots[tail_idx].take() {
                self.index.remove(&entry.key);
            }
            self.free.push(tail_idx);
        }
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free.pop() {
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(None);
            idx
        }
    }

    /// Structural self-check: the index and the recency list must describe
    /// the same set of entries, and the list must read the same both ways.
    #[cfg(test)]
    fn assert_consistent(&self) {
        let mut forward = Vec::new();
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let entry = self.slots[idx].as_ref().expect("linked slot vacated");
            forward.push(idx);
            cursor = entry.next;
        }

        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            let entry = self.slots[idx].as_ref().expect("linked slot vacated");
            backward.push(idx);
            cursor = entry.prev;
        }
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), self.index.len());
        assert!(self.index.len() <= self.capacity);
        assert_eq!(self.head.is_none(), self.index.is_empty());
        assert_eq!(self.tail.is_none(), self.index.is_empty());

        for (key, &idx) in &self.index {
            assert!(forward.contains(&idx));
            let entry = self.slots[idx].as_ref().expect("indexed slot vacated");
            assert!(entry.key == *key);
        }
    }
}
