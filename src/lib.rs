//! Basic Heap and Queue Data Structures for Rust
//!
//! This crate provides three textbook container ADTs with a shared
//! array-heap core and typed errors:
//!
//! - **[`BinaryHeap`]**: array-backed max-heap; the element is its own
//!   ordering key
//! - **[`PriorityQueue`]**: array-backed max-heap over (payload, priority)
//!   pairs; ordering uses the explicit priority only
//! - **[`LinkedQueue`]**: doubly-linked FIFO queue with O(1) enqueue and
//!   dequeue
//!
//! The array-backed containers start with a small fixed capacity and double
//! it whenever an insert finds the backing array full; capacity never
//! shrinks. Removing or peeking at an element of an empty container is the
//! single error condition of the system and is always checked, reported as
//! [`Error::Empty`]. A growth that cannot obtain memory surfaces as
//! [`Error::Allocation`] instead of aborting the process.
//!
//! Each container also ships an interactive line-oriented driver binary
//! (`heap_repl`, `priority_queue_repl`, `queue_repl`) for manual testing;
//! see the [`repl`] module for the command protocol.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_heaps::{BinaryHeap, PriorityQueue};
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(5).unwrap();
//! heap.insert(8).unwrap();
//! assert_eq!(heap.delete_max(), Ok(8));
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("payload", 3).unwrap();
//! assert_eq!(queue.peek(), Ok(&"payload"));
//! ```

pub mod binary_heap;
pub mod error;
pub mod linked_queue;
pub mod priority_queue;
pub mod repl;
mod storage;

pub use binary_heap::BinaryHeap;
pub use error::Error;
pub use linked_queue::LinkedQueue;
pub use priority_queue::PriorityQueue;
