//! The search-tree layer.
//!
//! A [`SearchTree`] is a [`BinaryTree`] whose elements carry keys, together with a
//! comparator that orders them. It knows how to find keys, extremes, predecessors and
//! successors, but never changes the shape of the tree by itself: inserting, removing and
//! rebalancing are up to the ordered maps built on top of it.

use std::cmp::Ordering;

use super::BinaryTree;
use crate::comparators::Comparator;
use crate::{Position, Result};

/// Elements that can be ordered by a key.
pub trait Keyed {
    type Key;
    fn key(&self) -> &Self::Key;
}

impl<K, V> Keyed for (K, V) {
    type Key = K;
    fn key(&self) -> &K {
        &self.0
    }
}

/// A binary tree of keyed elements, ordered by a comparator.
pub struct SearchTree<T, A, C> {
    tree: BinaryTree<T, A>,
    compare: C,
}

impl<T, A, C> SearchTree<T, A, C> {
    pub fn new(compare: C) -> Self {
        SearchTree {
            tree: BinaryTree::default(),
            compare,
        }
    }

    pub fn tree(&self) -> &BinaryTree<T, A> {
        &self.tree
    }

    /// Note: changing the tree directly may break its ordering.
    pub fn tree_mut(&mut self) -> &mut BinaryTree<T, A> {
        &mut self.tree
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Splits into the tree and the comparator.
    pub fn into_parts(self) -> (BinaryTree<T, A>, C) {
        (self.tree, self.compare)
    }
}

impl<T: Keyed, A, C: Comparator<T::Key>> SearchTree<T, A, C> {
    /// Compares the key at `position` against `query`.
    pub fn compare_at(&self, position: Position, query: &T::Key) -> Result<Ordering> {
        Ok(self.compare.compare(self.tree.element(position)?.key(), query))
    }

    /// Compares two keys with this tree's comparator.
    pub fn compare_keys(&self, a: &T::Key, b: &T::Key) -> Ordering {
        self.compare.compare(a, b)
    }

    /// Finds the node holding `query`. If there is none, returns the last node visited on
    /// the way down, which is where `query` would be attached. Only an empty tree
    /// returns `None`.
    pub fn search(&self, query: &T::Key) -> Option<Position> {
        let root = self.tree.root()?;
        Some(
            self.search_from(query, root)
                .expect("invariant violated: root position is invalid"),
        )
    }

    /// Like [`SearchTree::search`], but restricted to the subtree under `position`.
    pub fn search_from(&self, query: &T::Key, position: Position) -> Result<Position> {
        let mut walk = position;
        loop {
            let next = match self.compare_at(walk, query)? {
                Ordering::Equal => return Ok(walk),
                Ordering::Greater => self.tree.left(walk)?,
                Ordering::Less => self.tree.right(walk)?,
            };
            match next {
                Some(next) => walk = next,
                None => return Ok(walk),
            }
        }
    }

    /// Finds the node holding exactly `query`.
    pub fn find(&self, query: &T::Key) -> Option<Position> {
        let position = self.search(query)?;
        match self.compare_at(position, query) {
            Ok(Ordering::Equal) => Some(position),
            _ => None,
        }
    }
}

impl<T, A, C> SearchTree<T, A, C> {
    /// The leftmost node of the tree.
    pub fn first(&self) -> Option<Position> {
        self.tree.root().and_then(|root| self.first_in(root).ok())
    }

    /// The rightmost node of the tree.
    pub fn last(&self) -> Option<Position> {
        self.tree.root().and_then(|root| self.last_in(root).ok())
    }

    /// The leftmost node of the subtree under `position`.
    pub fn first_in(&self, position: Position) -> Result<Position> {
        let mut walk = position;
        while let Some(left) = self.tree.left(walk)? {
            walk = left;
        }
        Ok(walk)
    }

    /// The rightmost node of the subtree under `position`.
    pub fn last_in(&self, position: Position) -> Result<Position> {
        let mut walk = position;
        while let Some(right) = self.tree.right(walk)? {
            walk = right;
        }
        Ok(walk)
    }

    /// The inorder predecessor.
    pub fn before(&self, position: Position) -> Result<Option<Position>> {
        if let Some(left) = self.tree.left(position)? {
            return self.last_in(left).map(Some);
        }
        let mut walk = position;
        let mut parent = self.tree.parent(walk)?;
        while let Some(above) = parent {
            if !self.tree.is_left_child(walk, above)? {
                break;
            }
            walk = above;
            parent = self.tree.parent(walk)?;
        }
        Ok(parent)
    }

    /// The inorder successor.
    pub fn after(&self, position: Position) -> Result<Option<Position>> {
        if let Some(right) = self.tree.right(position)? {
            return self.first_in(right).map(Some);
        }
        let mut walk = position;
        let mut parent = self.tree.parent(walk)?;
        while let Some(above) = parent {
            if !self.tree.is_right_child(walk, above)? {
                break;
            }
            walk = above;
            parent = self.tree.parent(walk)?;
        }
        Ok(parent)
    }

    /// A lazy sequence that starts at `start` and repeatedly applies `next`.
    /// `next` runs only when the sequence is advanced past a position.
    /// An error from `next` ends the sequence. Use a [`Cursor`] to observe it.
    ///
    ///```
    /// use copse::trees::SearchTree;
    /// use copse::comparators::Natural;
    ///
    /// let mut search: SearchTree<(i32, ()), (), _> = SearchTree::new(Natural);
    /// let tree = search.tree_mut();
    /// let root = tree.add_root((2, ())).unwrap();
    /// tree.add_left(root, (1, ())).unwrap();
    /// tree.add_right(root, (3, ())).unwrap();
    ///
    /// let keys: Vec<i32> = search
    ///     .iterate(|s, p| s.after(p), search.first())
    ///     .map(|p| search.tree().element(p).unwrap().0)
    ///     .collect();
    /// assert_eq!(keys, vec![1, 2, 3]);
    ///```
    pub fn iterate<F>(&self, next: F, start: Option<Position>) -> Iterate<'_, T, A, C, F>
    where
        F: FnMut(&Self, Position) -> Result<Option<Position>>,
    {
        Iterate {
            search: self,
            next,
            pending: Some(start),
            last: None,
        }
    }
}

/// Lazy sequence of positions produced by [`SearchTree::iterate`].
pub struct Iterate<'a, T, A, C, F> {
    search: &'a SearchTree<T, A, C>,
    next: F,
    // the start position, until it has been yielded
    pending: Option<Option<Position>>,
    last: Option<Position>,
}

impl<'a, T, A, C, F> Iterator for Iterate<'a, T, A, C, F>
where
    F: FnMut(&SearchTree<T, A, C>, Position) -> Result<Option<Position>>,
{
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = match self.pending.take() {
            Some(start) => start,
            None => {
                let last = self.last.take()?;
                // errors end the sequence
                (self.next)(self.search, last).ok().flatten()
            }
        };
        self.last = current;
        current
    }
}

/// A traversal cursor that does not borrow the tree.
///
/// It only remembers the last position it yielded, and resolves the next one against
/// whatever shape the tree has when it is advanced. The tree can therefore be changed
/// between steps. Keys inserted ahead of the cursor are visited, keys inserted behind it
/// are not. If the node the cursor stands on gets removed, advancing fails with
/// [`Deprecated`](crate::Error::Deprecated).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cursor {
    state: CursorState,
    ascending: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CursorState {
    Start,
    At(Position),
    Done,
}

impl Cursor {
    /// A cursor that walks from the smallest key upwards.
    pub fn ascending() -> Self {
        Cursor {
            state: CursorState::Start,
            ascending: true,
        }
    }

    /// A cursor that walks from the largest key downwards.
    pub fn descending() -> Self {
        Cursor {
            state: CursorState::Start,
            ascending: false,
        }
    }

    /// The last position yielded, if any.
    pub fn position(&self) -> Option<Position> {
        match self.state {
            CursorState::At(position) => Some(position),
            _ => None,
        }
    }

    /// Moves to the next position, and returns it.
    pub fn advance<T, A, C>(&mut self, search: &SearchTree<T, A, C>) -> Result<Option<Position>> {
        let next = match self.state {
            CursorState::Done => None,
            CursorState::Start if self.ascending => search.first(),
            CursorState::Start => search.last(),
            CursorState::At(position) if self.ascending => search.after(position)?,
            CursorState::At(position) => search.before(position)?,
        };
        self.state = match next {
            Some(position) => CursorState::At(position),
            None => CursorState::Done,
        };
        Ok(next)
    }
}
