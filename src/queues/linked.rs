use super::{Queue, Stack};
use crate::lists::{CircularlyLinkedList, DoublyLinkedList, SinglyLinkedList};
use crate::{Error, Result};

/// A FIFO queue over a [`SinglyLinkedList`].
///
///```
/// use copse::queues::LinkedQueue;
///
/// let mut queue: LinkedQueue<_> = (1..=3).collect();
/// queue.enqueue(4);
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.first(), Ok(&2));
/// assert_eq!(queue.len(), 3);
///```
pub struct LinkedQueue<T> {
    list: SinglyLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        LinkedQueue {
            list: SinglyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, element: T) {
        self.list.add_last(element);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_first().map_err(|_| Error::Empty("queue"))
    }

    pub fn first(&self) -> Result<&T> {
        self.list.front().map_err(|_| Error::Empty("queue"))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.list.iter()
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn len(&self) -> usize {
        LinkedQueue::len(self)
    }

    fn enqueue(&mut self, element: T) -> Result<()> {
        LinkedQueue::enqueue(self, element);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        LinkedQueue::dequeue(self)
    }

    fn first(&self) -> Result<&T> {
        LinkedQueue::first(self)
    }

    fn clear(&mut self) {
        LinkedQueue::clear(self)
    }
}

/// A LIFO stack over a [`SinglyLinkedList`]. The top is the head of the list.
///
///```
/// use copse::queues::LinkedStack;
///
/// let mut stack: LinkedStack<_> = (1..=3).collect();
/// assert_eq!(stack.top(), Ok(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
///```
pub struct LinkedStack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        LinkedStack {
            list: SinglyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push(&mut self, element: T) {
        self.list.add_first(element);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_first().map_err(|_| Error::Empty("stack"))
    }

    pub fn top(&self) -> Result<&T> {
        self.list.front().map_err(|_| Error::Empty("stack"))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.list.iter()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn len(&self) -> usize {
        LinkedStack::len(self)
    }

    fn push(&mut self, element: T) {
        LinkedStack::push(self, element)
    }

    fn pop(&mut self) -> Result<T> {
        LinkedStack::pop(self)
    }

    fn top(&self) -> Result<&T> {
        LinkedStack::top(self)
    }

    fn clear(&mut self) {
        LinkedStack::clear(self)
    }
}

/// A double-ended queue over a [`DoublyLinkedList`].
///
/// As a [`Queue`] it enqueues at the back and dequeues at the front.
/// As a [`Stack`] its top is the back.
pub struct LinkedDeque<T> {
    list: DoublyLinkedList<T>,
}

impl<T> LinkedDeque<T> {
    pub fn new() -> Self {
        LinkedDeque {
            list: DoublyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn add_first(&mut self, element: T) {
        self.list.add_first(element);
    }

    pub fn add_last(&mut self, element: T) {
        self.list.add_last(element);
    }

    pub fn remove_first(&mut self) -> Result<T> {
        self.list.remove_first().map_err(|_| Error::Empty("deque"))
    }

    pub fn remove_last(&mut self) -> Result<T> {
        self.list.remove_last().map_err(|_| Error::Empty("deque"))
    }

    pub fn first(&self) -> Result<&T> {
        self.list.front().map_err(|_| Error::Empty("deque"))
    }

    pub fn last(&self) -> Result<&T> {
        self.list.back().map_err(|_| Error::Empty("deque"))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements front to back. Reversible.
    pub fn iter(&self) -> crate::lists::doubly::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Queue<T> for LinkedDeque<T> {
    fn len(&self) -> usize {
        LinkedDeque::len(self)
    }

    fn enqueue(&mut self, element: T) -> Result<()> {
        self.add_last(element);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        self.remove_first()
    }

    fn first(&self) -> Result<&T> {
        LinkedDeque::first(self)
    }

    fn clear(&mut self) {
        LinkedDeque::clear(self)
    }
}

impl<T> Stack<T> for LinkedDeque<T> {
    fn len(&self) -> usize {
        LinkedDeque::len(self)
    }

    fn push(&mut self, element: T) {
        self.add_last(element)
    }

    fn pop(&mut self) -> Result<T> {
        self.remove_last()
    }

    fn top(&self) -> Result<&T> {
        self.last()
    }

    fn clear(&mut self) {
        LinkedDeque::clear(self)
    }
}

/// A FIFO queue over a [`CircularlyLinkedList`], which can also rotate its elements.
///
///```
/// use copse::queues::CircularQueue;
///
/// let mut queue: CircularQueue<_> = (1..=4).collect();
/// queue.rotate(2);
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4, 1, 2]);
/// assert_eq!(queue.dequeue(), Ok(3));
///```
pub struct CircularQueue<T> {
    list: CircularlyLinkedList<T>,
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        CircularQueue {
            list: CircularlyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, element: T) {
        self.list.add_current(element);
        self.list.rotate();
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_current().map_err(|_| Error::Empty("queue"))
    }

    pub fn first(&self) -> Result<&T> {
        self.list.front().map_err(|_| Error::Empty("queue"))
    }

    /// Moves the first element to the back, `steps` times.
    pub fn rotate(&mut self, steps: usize) {
        if self.list.is_empty() {
            return;
        }
        for _ in 0..steps % self.list.len() {
            self.list.rotate();
        }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements in dequeue order.
    pub fn iter(&self) -> crate::lists::circular::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Queue<T> for CircularQueue<T> {
    fn len(&self) -> usize {
        CircularQueue::len(self)
    }

    fn enqueue(&mut self, element: T) -> Result<()> {
        CircularQueue::enqueue(self, element);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        CircularQueue::dequeue(self)
    }

    fn first(&self) -> Result<&T> {
        CircularQueue::first(self)
    }

    fn clear(&mut self) {
        CircularQueue::clear(self)
    }
}

macro_rules! impl_collection_traits {
    ($name:ident, $add:ident) => {
        impl<T> Default for $name<T> {
            fn default() -> Self {
                $name::new()
            }
        }

        impl<T> Extend<T> for $name<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for element in iter {
                    self.$add(element);
                }
            }
        }

        impl<T> std::iter::FromIterator<T> for $name<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut collection = $name::new();
                collection.extend(iter);
                collection
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }
    };
}

impl_collection_traits!(LinkedQueue, enqueue);
impl_collection_traits!(LinkedStack, push);
impl_collection_traits!(LinkedDeque, add_last);
impl_collection_traits!(CircularQueue, enqueue);
