use crate::handle::{Arena, Idx};
use crate::{Error, Position, Result};

struct Node<T> {
    element: T,
    // in a ring, every live node has a successor (possibly itself)
    next: Idx,
}

/// A circularly linked list.
///
/// The list has a current front (the node after the tail) that [`rotate`] moves along
/// the ring.
///
/// [`rotate`]: CircularlyLinkedList::rotate
///
///```
/// use copse::lists::CircularlyLinkedList;
///
/// let mut ring = CircularlyLinkedList::new();
/// ring.add_current(3);
/// ring.add_current(2);
/// ring.add_current(1);
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// ring.rotate();
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
/// assert_eq!(ring.remove_current(), Ok(2));
///```
pub struct CircularlyLinkedList<T> {
    nodes: Arena<Node<T>>,
    tail: Option<Idx>,
}

impl<T> CircularlyLinkedList<T> {
    pub fn new() -> Self {
        CircularlyLinkedList {
            nodes: Arena::new(),
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// The front of the ring.
    pub fn current(&self) -> Option<Position> {
        self.tail
            .map(|tail| self.nodes.position(self.nodes.get(tail).next))
    }

    /// The back of the ring.
    pub fn last(&self) -> Option<Position> {
        self.tail.map(|tail| self.nodes.position(tail))
    }

    /// The next position around the ring. Never absent.
    pub fn after(&self, position: Position) -> Result<Position> {
        let idx = self.nodes.validate(position)?;
        Ok(self.nodes.position(self.nodes.get(idx).next))
    }

    pub fn element(&self, position: Position) -> Result<&T> {
        let idx = self.nodes.validate(position)?;
        Ok(&self.nodes.get(idx).element)
    }

    pub fn element_mut(&mut self, position: Position) -> Result<&mut T> {
        let idx = self.nodes.validate(position)?;
        Ok(&mut self.nodes.get_mut(idx).element)
    }

    /// The element at the front of the ring.
    pub fn front(&self) -> Result<&T> {
        let tail = self.tail.ok_or(Error::Empty("list"))?;
        Ok(&self.nodes.get(self.nodes.get(tail).next).element)
    }

    /// Links a new node right after `before`.
    fn insert_after(&mut self, before: Idx, element: T) -> Idx {
        let next = self.nodes.get(before).next;
        let idx = self.nodes.insert(Node { element, next });
        self.nodes.get_mut(before).next = idx;
        idx
    }

    /// Adds an element at the front of the ring.
    pub fn add_current(&mut self, element: T) -> Position {
        let idx = match self.tail {
            None => {
                let idx = self.nodes.insert(Node { element, next: 0 });
                self.nodes.get_mut(idx).next = idx;
                self.tail = Some(idx);
                idx
            }
            Some(tail) => self.insert_after(tail, element),
        };
        self.nodes.position(idx)
    }

    /// Adds an element after the position. Adding after the tail makes it the new front.
    pub fn add_after(&mut self, position: Position, element: T) -> Result<Position> {
        let before = self.nodes.validate(position)?;
        let idx = self.insert_after(before, element);
        Ok(self.nodes.position(idx))
    }

    /// Removes the element at the front of the ring.
    pub fn remove_current(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::Empty("list"))?;
        let current = self.nodes.get(tail).next;
        if current == tail {
            self.tail = None;
        } else {
            let next = self.nodes.get(current).next;
            self.nodes.get_mut(tail).next = next;
        }
        Ok(self.nodes.remove(current).element)
    }

    pub fn replace(&mut self, position: Position, element: T) -> Result<T> {
        Ok(std::mem::replace(self.element_mut(position)?, element))
    }

    /// Moves the front element to the back.
    pub fn rotate(&mut self) {
        if let Some(tail) = self.tail {
            self.tail = Some(self.nodes.get(tail).next);
        }
    }

    /// Removes every element. Every position issued so far becomes deprecated.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.tail = None;
    }

    /// Elements once around the ring, starting at the front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.tail.map(|tail| self.nodes.get(tail).next),
            remaining: self.len(),
        }
    }
}

impl<T> Default for CircularlyLinkedList<T> {
    fn default() -> Self {
        CircularlyLinkedList::new()
    }
}

impl<T> Extend<T> for CircularlyLinkedList<T> {
    /// Appends at the back of the ring.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_current(element);
            self.rotate();
        }
    }
}

impl<T> std::iter::FromIterator<T> for CircularlyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularlyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a CircularlyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CircularlyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements of a [`CircularlyLinkedList`], once around the ring.
pub struct Iter<'a, T> {
    list: &'a CircularlyLinkedList<T>,
    next: Option<Idx>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.next?);
        self.next = Some(node.next);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
