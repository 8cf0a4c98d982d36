use crate::handle::{Arena, Idx};
use crate::{Error, Position, Result};

struct Node<T> {
    element: T,
    prev: Option<Idx>,
    next: Option<Idx>,
}

/// A doubly linked list with positions.
///
///```
/// use copse::lists::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// let middle = list.add_first(2);
/// list.add_before(middle, 1).unwrap();
/// list.add_after(middle, 3).unwrap();
/// assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
///
/// assert_eq!(list.remove(middle), Ok(2));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
///```
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<Idx>,
    tail: Option<Idx>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        DoublyLinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<Position> {
        self.head.map(|idx| self.nodes.position(idx))
    }

    pub fn last(&self) -> Option<Position> {
        self.tail.map(|idx| self.nodes.position(idx))
    }

    pub fn after(&self, position: Position) -> Result<Option<Position>> {
        let idx = self.nodes.validate(position)?;
        Ok(self.nodes.get(idx).next.map(|next| self.nodes.position(next)))
    }

    pub fn before(&self, position: Position) -> Result<Option<Position>> {
        let idx = self.nodes.validate(position)?;
        Ok(self.nodes.get(idx).prev.map(|prev| self.nodes.position(prev)))
    }

    pub fn element(&self, position: Position) -> Result<&T> {
        let idx = self.nodes.validate(position)?;
        Ok(&self.nodes.get(idx).element)
    }

    pub fn element_mut(&mut self, position: Position) -> Result<&mut T> {
        let idx = self.nodes.validate(position)?;
        Ok(&mut self.nodes.get_mut(idx).element)
    }

    /// The first element.
    pub fn front(&self) -> Result<&T> {
        let head = self.head.ok_or(Error::Empty("list"))?;
        Ok(&self.nodes.get(head).element)
    }

    /// The last element.
    pub fn back(&self) -> Result<&T> {
        let tail = self.tail.ok_or(Error::Empty("list"))?;
        Ok(&self.nodes.get(tail).element)
    }

    /// Links a new node between `prev` and `next`, which must be neighbors.
    fn insert_between(&mut self, element: T, prev: Option<Idx>, next: Option<Idx>) -> Position {
        let idx = self.nodes.insert(Node {
            element,
            prev,
            next,
        });
        match prev {
            None => self.head = Some(idx),
            Some(prev) => self.nodes.get_mut(prev).next = Some(idx),
        }
        match next {
            None => self.tail = Some(idx),
            Some(next) => self.nodes.get_mut(next).prev = Some(idx),
        }
        self.nodes.position(idx)
    }

    pub fn add_first(&mut self, element: T) -> Position {
        self.insert_between(element, None, self.head)
    }

    pub fn add_last(&mut self, element: T) -> Position {
        self.insert_between(element, self.tail, None)
    }

    pub fn add_after(&mut self, position: Position, element: T) -> Result<Position> {
        let idx = self.nodes.validate(position)?;
        let next = self.nodes.get(idx).next;
        Ok(self.insert_between(element, Some(idx), next))
    }

    pub fn add_before(&mut self, position: Position, element: T) -> Result<Position> {
        let idx = self.nodes.validate(position)?;
        let prev = self.nodes.get(idx).prev;
        Ok(self.insert_between(element, prev, Some(idx)))
    }

    fn unlink(&mut self, idx: Idx) -> T {
        let node = self.nodes.remove(idx);
        match node.prev {
            None => self.head = node.next,
            Some(prev) => self.nodes.get_mut(prev).next = node.next,
        }
        match node.next {
            None => self.tail = node.prev,
            Some(next) => self.nodes.get_mut(next).prev = node.prev,
        }
        node.element
    }

    /// Removes the element at the position.
    pub fn remove(&mut self, position: Position) -> Result<T> {
        let idx = self.nodes.validate(position)?;
        Ok(self.unlink(idx))
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty("list"))?;
        Ok(self.unlink(head))
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::Empty("list"))?;
        Ok(self.unlink(tail))
    }

    pub fn replace(&mut self, position: Position, element: T) -> Result<T> {
        Ok(std::mem::replace(self.element_mut(position)?, element))
    }

    /// Removes every element. Every position issued so far becomes deprecated.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

impl<T> std::iter::FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements of a [`DoublyLinkedList`], from either end.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<Idx>,
    back: Option<Idx>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
