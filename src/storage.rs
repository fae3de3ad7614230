//! Shared array-heap core backing [`BinaryHeap`](crate::BinaryHeap) and
//! [`PriorityQueue`](crate::PriorityQueue).
//!
//! Both public heap types are max-heaps over a growable array; the only
//! difference between them is where the ordering key comes from. This module
//! owns the layout and the sift operations once, parameterized by a
//! `(key, item)` pair: the binary heap stores `(V, ())` so the element is its
//! own key, the priority queue stores `(P, V)` with an explicit priority.
//!
//! The backing array starts at [`INITIAL_CAPACITY`] slots and doubles exactly
//! when an insert finds it full. Capacity never shrinks, and removal never
//! triggers a resize.

use std::slice;

use crate::error::Error;

/// Slots allocated by a freshly constructed heap.
pub(crate) const INITIAL_CAPACITY: usize = 15;

/// Capacity multiplier applied when the backing array is full.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// Growable max-heap over `(key, item)` pairs.
///
/// Layout is the usual implicit binary tree: the root lives at index 0, the
/// children of index `i` at `2i + 1` and `2i + 2`. Invariant: every non-root
/// slot's key is `<=` its parent's key.
#[derive(Debug, Clone)]
pub(crate) struct HeapStorage<P: Ord, T> {
    slots: Vec<(P, T)>,
    capacity: usize,
}

impl<P: Ord, T> HeapStorage<P, T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts a pair, growing the backing array first if it is full.
    ///
    /// The new pair is appended at the end and then sifted up: swapped with
    /// its parent while its key is strictly greater than the parent's key.
    pub(crate) fn push(&mut self, key: P, item: T) -> Result<(), Error> {
        if self.slots.len() == self.capacity {
            self.grow()?;
        }
        self.slots.push((key, item));
        self.sift_up(self.slots.len() - 1);
        Ok(())
    }

    /// Removes and returns the pair with the maximum key.
    ///
    /// The last element replaces the root and is sifted down: swapped with
    /// its larger child while a child's key strictly exceeds its own. When
    /// both children carry equal keys the right child is chosen.
    pub(crate) fn pop_max(&mut self) -> Result<(P, T), Error> {
        if self.slots.is_empty() {
            return Err(Error::Empty);
        }
        let max = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Ok(max)
    }

    pub(crate) fn peek_max(&self) -> Result<&(P, T), Error> {
        self.slots.first().ok_or(Error::Empty)
    }

    /// Pairs in internal array order, root first. Not sorted order.
    pub(crate) fn iter(&self) -> slice::Iter<'_, (P, T)> {
        self.slots.iter()
    }

    fn grow(&mut self) -> Result<(), Error> {
        let new_capacity = self.capacity * GROWTH_FACTOR;
        // len == capacity here, so this reserves exactly one doubling
        self.slots.try_reserve_exact(new_capacity - self.slots.len())?;
        log::trace!(
            "heap storage grew from {} to {} slots",
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].0 > self.slots[parent].0 {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // equal children resolve to the right child
            let child = if right < len && self.slots[right].0 >= self.slots[left].0 {
                right
            } else {
                left
            };
            if self.slots[child].0 > self.slots[index].0 {
                self.slots.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_order<P: Ord + std::fmt::Debug, T>(storage: &HeapStorage<P, T>) {
        let keys: Vec<&P> = storage.iter().map(|(p, _)| p).collect();
        for i in 1..keys.len() {
            let parent = (i - 1) / 2;
            assert!(
                keys[i] <= keys[parent],
                "slot {i} ({:?}) exceeds parent {parent} ({:?})",
                keys[i],
                keys[parent]
            );
        }
    }

    #[test]
    fn push_maintains_heap_order() {
        let mut storage: HeapStorage<i32, ()> = HeapStorage::with_capacity(INITIAL_CAPACITY);
        for key in [5, 3, 8, 1, 9, 2, 7] {
            storage.push(key, ()).unwrap();
            assert_heap_order(&storage);
        }
        assert_eq!(storage.peek_max().unwrap().0, 9);
    }

    #[test]
    fn pop_returns_keys_in_descending_order() {
        let mut storage: HeapStorage<i32, ()> = HeapStorage::with_capacity(INITIAL_CAPACITY);
        for key in [4, 10, 2, 8, 6] {
            storage.push(key, ()).unwrap();
        }
        let mut popped = Vec::new();
        while let Ok((key, ())) = storage.pop_max() {
            assert_heap_order(&storage);
            popped.push(key);
        }
        assert_eq!(popped, vec![10, 8, 6, 4, 2]);
    }

    #[test]
    fn equal_children_sift_through_the_right_child() {
        // Root with two equal children: the right child (index 2) must be the
        // one swapped upward when the root is removed.
        let mut storage: HeapStorage<i32, &str> = HeapStorage::with_capacity(INITIAL_CAPACITY);
        storage.push(9, "root").unwrap();
        storage.push(7, "left").unwrap();
        storage.push(7, "right").unwrap();
        storage.push(5, "filler").unwrap();
        // pop moves "filler" to the root; the sift swaps it with the right
        // of the two equal children
        storage.pop_max().unwrap();
        assert_eq!(storage.peek_max().unwrap().1, "right");
    }

    #[test]
    fn capacity_doubles_exactly_when_full() {
        let mut storage: HeapStorage<i32, ()> = HeapStorage::with_capacity(INITIAL_CAPACITY);
        assert_eq!(storage.capacity(), INITIAL_CAPACITY);
        for key in 0..INITIAL_CAPACITY as i32 {
            storage.push(key, ()).unwrap();
        }
        // full but not yet grown
        assert_eq!(storage.capacity(), INITIAL_CAPACITY);
        storage.push(100, ()).unwrap();
        assert_eq!(storage.capacity(), INITIAL_CAPACITY * GROWTH_FACTOR);
    }

    #[test]
    fn capacity_never_shrinks_on_pop() {
        let mut storage: HeapStorage<i32, ()> = HeapStorage::with_capacity(INITIAL_CAPACITY);
        for key in 0..32 {
            storage.push(key, ()).unwrap();
        }
        let grown = storage.capacity();
        while storage.pop_max().is_ok() {}
        assert_eq!(storage.capacity(), grown);
        assert!(storage.is_empty());
    }

    #[test]
    fn pop_on_empty_is_an_error() {
        let mut storage: HeapStorage<i32, ()> = HeapStorage::with_capacity(INITIAL_CAPACITY);
        assert_eq!(storage.pop_max().unwrap_err(), Error::Empty);
        assert_eq!(storage.peek_max().unwrap_err(), Error::Empty);
    }
}
