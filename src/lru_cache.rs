//! Least-recently-used cache with O(1) `get` and `put`.
//!
//! Entries are stored in a slab of nodes forming a doubly linked list by
//! index: `head` is the most recently used entry, `tail` the least. A hash map
//! from key to slot gives constant-time lookup, and slots freed by `remove`
//! are recycled through a free list.

use anyhow::Result;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: HashMap<K, usize>,
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            anyhow::bail!("LRU cache capacity must be greater than zero");
        }
        Ok(Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up `key`, marking it as most recently used on a hit
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_head(idx);
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    /// Insert or update `key`; evicts the least recently used entry when full
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = self.slots[idx].as_mut() {
                node.value = value;
            }
            self.move_to_head(idx);
            return;
        }

        let node = Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.map.insert(key, idx);
        self.attach_head(idx);

        if self.map.len() > self.capacity {
            if let Some(lru) = self.tail {
                debug!(slot = lru, "evicting least recently used entry");
                self.take_slot(lru);
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = *self.map.get(key)?;
        self.take_slot(idx).map(|node| node.value)
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Keys ordered from most to least recently used
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.map.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            match self.slots[idx].as_ref() {
                Some(node) => {
                    keys.push(node.key.clone());
                    cursor = node.next;
                }
                None => break,
            }
        }
        keys
    }

    fn take_slot(&mut self, idx: usize) -> Option<Node<K, V>> {
        self.detach(idx);
        let node = self.slots[idx].take()?;
        self.map.remove(&node.key);
        self.free.push(idx);
        Some(node)
    }

    fn move_to_head(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.attach_head(idx);
    }

    fn attach_head(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(h) = old_head {
            if let Some(node) = self.slots[h].as_mut() {
                node.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.slots[idx].as_mut() {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };
        match prev {
            Some(p) => {
                if let Some(node) = self.slots[p].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.slots[n].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

/// Replay the insert/read/update walkthrough on a cache of `capacity`,
/// returning one line per step with the keys in recency order
pub fn walkthrough(capacity: usize) -> Result<Vec<String>> {
    let mut cache = LruCache::new(capacity)?;
    let mut lines = Vec::with_capacity(5);

    cache.put(1, "A");
    cache.put(2, "B");
    cache.put(3, "C");
    lines.push(format!("LRU initial: {:?}", cache.keys()));

    let hit = cache.get(&2).copied();
    lines.push(format!("get(2): {}", hit.unwrap_or("null")));
    lines.push(format!("LRU after get(2): {:?}", cache.keys()));

    cache.put(4, "D");
    lines.push(format!("LRU after put(4): {:?}", cache.keys()));

    cache.put(2, "B2");
    lines.push(format!("LRU after update(2): {:?}", cache.keys()));

    Ok(lines)
}
