use crate::handle::{Arena, Idx};
use crate::{Error, Position, Result};

struct Node<T> {
    element: T,
    next: Option<Idx>,
}

/// A singly linked list with positions.
///
///```
/// use copse::lists::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList<_> = (1..=3).collect();
/// let first = list.first().unwrap();
/// list.add_after(first, 10).unwrap();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 10, 2, 3]);
/// assert_eq!(list.remove_first(), Ok(1));
/// assert!(list.element(first).is_err());
///```
pub struct SinglyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<Idx>,
    tail: Option<Idx>,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList {
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

    pub fn add_first(&mut self, element: T) -> Position {
        let idx = self.nodes.insert(Node {
            element,
            next: self.head,
        });
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.nodes.position(idx)
    }

    pub fn add_last(&mut self, element: T) -> Position {
        let idx = self.nodes.insert(Node {
            element,
            next: None,
        });
        match self.tail {
            None => self.head = Some(idx),
            Some(tail) => self.nodes.get_mut(tail).next = Some(idx),
        }
        self.tail = Some(idx);
        self.nodes.position(idx)
    }

    pub fn add_after(&mut self, position: Position, element: T) -> Result<Position> {
        let before = self.nodes.validate(position)?;
        let next = self.nodes.get(before).next;
        let idx = self.nodes.insert(Node { element, next });
        self.nodes.get_mut(before).next = Some(idx);
        if self.tail == Some(before) {
            self.tail = Some(idx);
        }
        Ok(self.nodes.position(idx))
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty("list"))?;
        let node = self.nodes.remove(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.element)
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
            next: self.head,
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

impl<T> std::iter::FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements of a [`SinglyLinkedList`], front to back.
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    next: Option<Idx>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.nodes.get(self.next?);
        self.next = node.next;
        Some(&node.element)
    }
}
