//! Array-backed binary max-heap
//!
//! A classic binary heap where each element is its own ordering key. For
//! ordering by an explicit, separately supplied key, use
//! [`PriorityQueue`](crate::PriorityQueue) instead.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity          |
//! |--------------|---------------------|
//! | `insert`     | O(log n) amortized  |
//! | `delete_max` | O(log n)            |
//! | `len`        | O(1)                |
//! | `is_empty`   | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use rust_basic_heaps::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(5).unwrap();
//! heap.insert(3).unwrap();
//! heap.insert(8).unwrap();
//!
//! assert_eq!(heap.delete_max(), Ok(8));
//! assert_eq!(heap.delete_max(), Ok(5));
//! assert_eq!(heap.len(), 1);
//! ```

use std::fmt;

use crate::error::Error;
use crate::storage::{HeapStorage, INITIAL_CAPACITY};

/// An array-backed max-heap
///
/// Elements are ordered by their own `Ord` implementation; `delete_max`
/// always returns the greatest live element. The backing array starts at a
/// small fixed capacity and doubles whenever an insert finds it full.
#[derive(Debug, Clone)]
pub struct BinaryHeap<V: Ord> {
    storage: HeapStorage<V, ()>,
}

impl<V: Ord> BinaryHeap<V> {
    /// Creates an empty heap with the default starting capacity
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty heap with at least `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: HeapStorage::with_capacity(capacity),
        }
    }

    /// Inserts an element, restoring heap order by sifting it up
    ///
    /// # Errors
    /// Returns [`Error::Allocation`] if the backing array was full and could
    /// not be grown.
    pub fn insert(&mut self, value: V) -> Result<(), Error> {
        self.storage.push(value, ())
    }

    /// Removes and returns the maximum element
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the heap has no elements.
    pub fn delete_max(&mut self) -> Result<V, Error> {
        self.storage.pop_max().map(|(value, ())| value)
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Elements in internal array order, root first
    ///
    /// This is a debug aid: array order is heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.storage.iter().map(|(value, ())| value)
    }
}

impl<V: Ord> Default for BinaryHeap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + fmt::Display> fmt::Display for BinaryHeap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heap:")?;
        for value in self.iter() {
            write!(f, " {value} |")?;
        }
        Ok(())
    }
}
