//! Max-priority queue over (payload, priority) pairs
//!
//! Same array-heap shape as [`BinaryHeap`](crate::BinaryHeap), but every
//! comparison uses an explicitly supplied priority rather than the payload
//! itself. Higher numbers mean higher priority. The payload is opaque: two
//! items with equal payloads and different priorities are distinct, and there
//! is no lookup by payload.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_heaps::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("low", 1).unwrap();
//! queue.insert("high", 5).unwrap();
//!
//! assert_eq!(queue.peek(), Ok(&"high"));
//! assert_eq!(queue.delete_max(), Ok("high"));
//! assert_eq!(queue.delete_max(), Ok("low"));
//! ```

use std::fmt;

use crate::error::Error;
use crate::storage::{HeapStorage, INITIAL_CAPACITY};

/// An array-backed max-priority queue
///
/// Stores `(payload, priority)` pairs; heap order compares priorities only.
/// Items with equal priorities are returned in an arbitrary order determined
/// by sift tie-breaks.
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P: Ord> {
    storage: HeapStorage<P, V>,
}

impl<V, P: Ord> PriorityQueue<V, P> {
    /// Creates an empty queue with the default starting capacity
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty queue with at least `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: HeapStorage::with_capacity(capacity),
        }
    }

    /// Inserts a payload with the given priority
    ///
    /// # Errors
    /// Returns [`Error::Allocation`] if the backing array was full and could
    /// not be grown.
    pub fn insert(&mut self, payload: V, priority: P) -> Result<(), Error> {
        self.storage.push(priority, payload)
    }

    /// Removes and returns the payload with the highest priority
    ///
    /// The priority itself is discarded.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue has no items.
    pub fn delete_max(&mut self) -> Result<V, Error> {
        self.storage.pop_max().map(|(_, payload)| payload)
    }

    /// Returns the payload with the highest priority without removing it
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue has no items.
    pub fn peek(&self) -> Result<&V, Error> {
        self.storage.peek_max().map(|(_, payload)| payload)
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// `(payload, priority)` pairs in internal array order, root first
    pub fn iter(&self) -> impl Iterator<Item = (&V, &P)> {
        self.storage.iter().map(|(priority, payload)| (payload, priority))
    }
}

impl<V, P: Ord> Default for PriorityQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Display, P: Ord> fmt::Display for PriorityQueue<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Priority Queue: ")?;
        let mut first = true;
        for (payload, _) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{payload}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_priority_not_payload() {
        let mut queue = PriorityQueue::new();
        queue.insert(10, 1).unwrap();
        queue.insert(20, 5).unwrap();

        assert_eq!(queue.peek(), Ok(&20));
        assert_eq!(queue.delete_max(), Ok(20));
        assert_eq!(queue.peek(), Ok(&10));
    }

    #[test]
    fn equal_payloads_with_different_priorities_are_distinct() {
        let mut queue = PriorityQueue::new();
        queue.insert("job", 3).unwrap();
        queue.insert("job", 7).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.delete_max(), Ok("job"));
        assert_eq!(queue.delete_max(), Ok("job"));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_priorities_all_drain() {
        let mut queue = PriorityQueue::new();
        queue.insert("a", 1).unwrap();
        queue.insert("b", 1).unwrap();
        queue.insert("c", 1).unwrap();

        let mut drained: Vec<&str> = Vec::new();
        while let Ok(payload) = queue.delete_max() {
            drained.push(payload);
        }
        drained.sort_unstable();
        assert_eq!(drained, vec!["a", "b", "c"]);
    }

    #[test]
    fn peek_and_delete_on_empty_are_errors() {
        let mut queue: PriorityQueue<i32, i32> = PriorityQueue::new();
        assert_eq!(queue.peek(), Err(Error::Empty));
        assert_eq!(queue.delete_max(), Err(Error::Empty));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn display_prints_payloads_in_array_order() {
        let mut queue = PriorityQueue::new();
        queue.insert(10, 1).unwrap();
        queue.insert(20, 5).unwrap();
        assert_eq!(queue.to_string(), "Priority Queue: 20, 10");
    }
}
