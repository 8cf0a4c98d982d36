//! Queues, stacks and priority queues.
//!
//! The linked variants are thin adapters over [`crate::lists`]. [`CircularArrayBuffer`]
//! is a fixed-capacity ring, and the priority queues order their elements with a
//! [`Comparator`](crate::comparators::Comparator), smallest first.

mod buffer;
mod heap;
mod linked;
mod priority;

pub use buffer::CircularArrayBuffer;
pub use heap::{AdaptableHeapPriorityQueue, Locator, PeekMut};
pub use linked::{CircularQueue, LinkedDeque, LinkedQueue, LinkedStack};
pub use priority::{SortedPriorityQueue, UnsortedPriorityQueue};

use crate::Result;

/// First in, first out. Priority queues dequeue their smallest element instead.
pub trait Queue<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails only for bounded queues, with [`Full`](crate::Error::Full).
    fn enqueue(&mut self, element: T) -> Result<()>;

    /// Fails with [`Empty`](crate::Error::Empty) on an empty queue.
    fn dequeue(&mut self) -> Result<T>;

    /// The element the next [`dequeue`](Queue::dequeue) would return.
    fn first(&self) -> Result<&T>;

    fn clear(&mut self);
}

/// Last in, first out.
pub trait Stack<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, element: T);

    /// Fails with [`Empty`](crate::Error::Empty) on an empty stack.
    fn pop(&mut self) -> Result<T>;

    fn top(&self) -> Result<&T>;

    fn clear(&mut self);
}
