use std::cmp::Ordering;

use super::Queue;
use crate::comparators::{AsNumbers, Comparator};
use crate::lists::DoublyLinkedList;
use crate::{Error, Position, Result};

const POSITION_ERROR: &str = "invariant violated: the list issued a stale position";

/// A priority queue kept sorted on insertion: `O(n)` enqueue, `O(1)` dequeue.
///
/// Elements that compare equal leave in insertion order.
///
///```
/// use copse::queues::SortedPriorityQueue;
///
/// let mut queue: SortedPriorityQueue<_> = vec![5, 1, 4].into_iter().collect();
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.first(), Ok(&2));
///```
pub struct SortedPriorityQueue<T, C = AsNumbers> {
    list: DoublyLinkedList<T>,
    comparator: C,
}

impl<T> SortedPriorityQueue<T> {
    pub fn new() -> Self {
        SortedPriorityQueue::with_comparator(AsNumbers)
    }
}

impl<T, C> SortedPriorityQueue<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        SortedPriorityQueue {
            list: DoublyLinkedList::new(),
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements in dequeue order.
    pub fn iter(&self) -> crate::lists::doubly::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T, C: Comparator<T>> SortedPriorityQueue<T, C> {
    pub fn enqueue(&mut self, element: T) {
        // walk back past every strictly greater element
        let mut cursor = self.list.last();
        while let Some(position) = cursor {
            let current = self.list.element(position).expect(POSITION_ERROR);
            if self.comparator.compare(current, &element) != Ordering::Greater {
                break;
            }
            cursor = self.list.before(position).expect(POSITION_ERROR);
        }
        match cursor {
            Some(position) => {
                self.list
                    .add_after(position, element)
                    .expect(POSITION_ERROR);
            }
            None => {
                self.list.add_first(element);
            }
        }
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_first().map_err(|_| Error::Empty("queue"))
    }

    pub fn first(&self) -> Result<&T> {
        self.list.front().map_err(|_| Error::Empty("queue"))
    }
}

/// A priority queue that appends on insertion: `O(1)` enqueue, `O(n)` dequeue.
///
/// Elements that compare equal leave in insertion order.
///
///```
/// use copse::queues::UnsortedPriorityQueue;
///
/// let mut queue: UnsortedPriorityQueue<_> = vec![5, 1, 4].into_iter().collect();
/// assert_eq!(queue.first(), Ok(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(4));
///```
pub struct UnsortedPriorityQueue<T, C = AsNumbers> {
    list: DoublyLinkedList<T>,
    comparator: C,
}

impl<T> UnsortedPriorityQueue<T> {
    pub fn new() -> Self {
        UnsortedPriorityQueue::with_comparator(AsNumbers)
    }
}

impl<T, C> UnsortedPriorityQueue<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        UnsortedPriorityQueue {
            list: DoublyLinkedList::new(),
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> crate::lists::doubly::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T, C: Comparator<T>> UnsortedPriorityQueue<T, C> {
    pub fn enqueue(&mut self, element: T) {
        self.list.add_last(element);
    }

    /// The first of the smallest elements.
    fn min_position(&self) -> Option<Position> {
        let mut best = self.list.first()?;
        let mut cursor = self.list.after(best).expect(POSITION_ERROR);
        while let Some(position) = cursor {
            let candidate = self.list.element(position).expect(POSITION_ERROR);
            let current = self.list.element(best).expect(POSITION_ERROR);
            if self.comparator.compare(candidate, current) == Ordering::Less {
                best = position;
            }
            cursor = self.list.after(position).expect(POSITION_ERROR);
        }
        Some(best)
    }

    pub fn dequeue(&mut self) -> Result<T> {
        let position = self.min_position().ok_or(Error::Empty("queue"))?;
        self.list.remove(position)
    }

    pub fn first(&self) -> Result<&T> {
        let position = self.min_position().ok_or(Error::Empty("queue"))?;
        self.list.element(position)
    }
}

macro_rules! impl_priority_queue_traits {
    ($name:ident) => {
        impl<T, C: Comparator<T>> Queue<T> for $name<T, C> {
            fn len(&self) -> usize {
                $name::len(self)
            }

            fn enqueue(&mut self, element: T) -> Result<()> {
                $name::enqueue(self, element);
                Ok(())
            }

            fn dequeue(&mut self) -> Result<T> {
                $name::dequeue(self)
            }

            fn first(&self) -> Result<&T> {
                $name::first(self)
            }

            fn clear(&mut self) {
                $name::clear(self)
            }
        }

        impl<T, C: Default> Default for $name<T, C> {
            fn default() -> Self {
                $name::with_comparator(C::default())
            }
        }

        impl<T, C: Comparator<T>> Extend<T> for $name<T, C> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for element in iter {
                    self.enqueue(element);
                }
            }
        }

        impl<T, C: Comparator<T> + Default> std::iter::FromIterator<T> for $name<T, C> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut queue = $name::default();
                queue.extend(iter);
                queue
            }
        }

        impl<T: std::fmt::Debug, C> std::fmt::Debug for $name<T, C> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list().entries(self.list.iter()).finish()
            }
        }
    };
}

impl_priority_queue_traits!(SortedPriorityQueue);
impl_priority_queue_traits!(UnsortedPriorityQueue);
