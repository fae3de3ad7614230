//! Doubly-linked FIFO queue
//!
//! A node-per-element queue with head and tail pointers so both ends are
//! reachable in O(1). Nodes are heap-allocated boxes linked through
//! `Option<NonNull>` pointers; `next` is the owning direction (front to
//! back), `prev` is a non-owning back-reference and is never used to free
//! anything.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_heaps::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.peek(), Ok(&2));
//! assert_eq!(queue.len(), 2);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::Error;

struct Node<V> {
    value: V,
    next: Option<NonNull<Node<V>>>,
    prev: Option<NonNull<Node<V>>>,
}

/// A FIFO queue over a doubly-linked list
///
/// Link invariant: `head` and `tail` are both `None` exactly when `len` is 0;
/// otherwise following `next` from `head` visits `len` nodes and reaches
/// `tail` last. There is no capacity limit and no growth policy.
pub struct LinkedQueue<V> {
    head: Option<NonNull<Node<V>>>,
    tail: Option<NonNull<Node<V>>>,
    len: usize,
    marker: PhantomData<Box<Node<V>>>,
}

impl<V> LinkedQueue<V> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Adds a value to the back of the queue, O(1)
    pub fn enqueue(&mut self, value: V) {
        let node = Box::new(Node {
            value,
            next: None,
            prev: self.tail,
        });
        let node = NonNull::from(Box::leak(node));
        match self.tail {
            // SAFETY: tail points at the live back node, exclusively owned
            // by this queue.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the front of the queue, O(1)
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue has no values.
    pub fn dequeue(&mut self) -> Result<V, Error> {
        let head = self.head.ok_or(Error::Empty)?;
        // SAFETY: head was allocated by enqueue via Box and is only reachable
        // through this queue, so reclaiming it here is sound.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        match self.head {
            // SAFETY: the successor is a live node owned by this queue.
            Some(next) => unsafe { (*next.as_ptr()).prev = None },
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the value at the front of the queue without removing it, O(1)
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue has no values.
    pub fn peek(&self) -> Result<&V, Error> {
        match self.head {
            // SAFETY: head is live while the queue holds it; the borrow is
            // tied to &self.
            Some(head) => Ok(unsafe { &(*head.as_ptr()).value }),
            None => Err(Error::Empty),
        }
    }

    /// Returns the number of values in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values front to back
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<V> Default for LinkedQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LinkedQueue<V> {
    fn drop(&mut self) {
        while self.dequeue().is_ok() {}
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedQueue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for LinkedQueue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue: ")?;
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

/// Front-to-back iterator over a [`LinkedQueue`]
pub struct Iter<'a, V> {
    next: Option<NonNull<Node<V>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        if self.remaining == 0 {
            return None;
        }
        self.next.map(|node| {
            // SAFETY: the node is live for 'a; the iterator borrows the queue.
            let node = unsafe { &(*node.as_ptr()) };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Ok(&3));
    }

    #[test]
    fn empties_and_refills() {
        let mut queue = LinkedQueue::new();
        queue.enqueue("a");
        assert_eq!(queue.dequeue(), Ok("a"));
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(Error::Empty));
        assert_eq!(queue.peek(), Err(Error::Empty));

        // tail was reset; a fresh enqueue must become the new head
        queue.enqueue("b");
        assert_eq!(queue.peek(), Ok(&"b"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn iterates_front_to_back() {
        let mut queue = LinkedQueue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }
        let collected: Vec<i32> = queue.iter().copied().collect();
        assert_eq!(collected, vec![0, 1, 2, 3, 4]);
        // iteration does not consume
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn display_prints_front_to_back() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.to_string(), "Queue: 1, 2, 3");
    }

    #[test]
    fn drop_releases_owned_values() {
        use std::rc::Rc;

        let probe = Rc::new(());
        {
            let mut queue = LinkedQueue::new();
            for _ in 0..10 {
                queue.enqueue(Rc::clone(&probe));
            }
            assert_eq!(Rc::strong_count(&probe), 11);
        }
        assert_eq!(Rc::strong_count(&probe), 1);
    }
}
