use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

use crate::Weight;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// pop/peek on an empty queue. Avoidable by checking `is_empty` first.
    #[error("the queue is empty")]
    Empty,
    /// update of an item that is not currently enqueued.
    #[error("the item is not in the queue")]
    NotFound,
}

#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    priority: Weight,
    item: T,
}

/// A min-priority queue with in-place priority updates.
///
/// A binary heap of `(priority, item)` entries plus a side index from item to
/// its current heap slot. The index is maintained on every swap during sift
/// operations, which is what makes [`PriorityQueue::update`] O(log n) instead
/// of a linear rewrite.
///
/// Ties between equal priorities are broken arbitrarily (but
/// deterministically); do not assume insertion-order stability. NaN
/// priorities are rejected by assertion.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<Entry<T>>,
    positions: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: Vec::with_capacity(cap),
            positions: HashMap::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Insert `item` with `priority`, or re-prioritize it if already present.
    ///
    /// An item is never enqueued twice; pushing a present item is exactly
    /// [`PriorityQueue::update`].
    pub fn push(&mut self, item: T, priority: Weight) {
        assert!(!priority.is_nan(), "NaN priority");
        if self.contains(&item) {
            self.update(item, priority)
                .expect("contained item must be updatable");
            return;
        }

        let i = self.heap.len();
        self.heap.push(Entry { priority, item });
        self.positions.insert(item, i);
        self.sift_up(i);
    }

    /// Change the priority of an already-enqueued item.
    ///
    /// The sift direction depends on whether the priority shrank or grew,
    /// which is why the item must already be present.
    pub fn update(&mut self, item: T, priority: Weight) -> Result<(), QueueError> {
        assert!(!priority.is_nan(), "NaN priority");
        let i = *self.positions.get(&item).ok_or(QueueError::NotFound)?;
        let old = self.heap[i].priority;
        self.heap[i].priority = priority;
        if priority < old {
            self.sift_up(i);
        } else {
            self.sift_down(i);
        }
        Ok(())
    }

    /// Remove and return the entry with the smallest priority.
    pub fn pop_min(&mut self) -> Result<(Weight, T), QueueError> {
        let last = self.heap.len().checked_sub(1).ok_or(QueueError::Empty)?;
        self.heap.swap(0, last);
        let Entry { priority, item } = self.heap.pop().expect("length checked above");
        self.positions.remove(&item);

        if let Some(first) = self.heap.first() {
            self.positions.insert(first.item, 0);
            self.sift_down(0);
        }
        Ok((priority, item))
    }

    /// Return the entry with the smallest priority without removing it.
    pub fn peek_min(&self) -> Result<(Weight, T), QueueError> {
        self.heap
            .first()
            .map(|e| (e.priority, e.item))
            .ok_or(QueueError::Empty)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].priority >= self.heap[parent].priority {
                break;
            }
            self.swap_entries(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < self.heap.len()
                    && self.heap[child].priority < self.heap[smallest].priority
                {
                    smallest = child;
                }
            }
            if smallest == i {
                return;
            }
            self.swap_entries(i, smallest);
            i = smallest;
        }
    }

    // Every swap goes through here so the side index never goes stale.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].item, a);
        self.positions.insert(self.heap[b].item, b);
    }
}
