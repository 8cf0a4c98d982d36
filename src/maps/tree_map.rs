//! The ordered-map engine.
//!
//! A [`TreeMap`] projects `(key, value)` pairs onto a [`SearchTree`]: it locates,
//! inserts and removes nodes, and leaves all shape decisions to its [`Balance`] strategy.

use std::cmp::Ordering;

use super::avl::Avl;
use super::balance::{Balance, Removal};
use super::red_black::RedBlack;
use super::splay::Splay;
use crate::comparators::{AsNumbers, Comparator};
use crate::trees::{BinaryTree, Cursor, Iterate, SearchTree, Tree};
use crate::{Error, Position, Result};

/// Positions held by the engine itself are always valid, and the strategies only
/// report errors on broken invariants.
const ENGINE_ERROR: &str = "invariant violated: ordered map lost track of its own nodes";

/// An ordered map over a binary search tree, kept in shape by the strategy `S`
/// and ordered by the comparator `C`.
///
///```
/// use copse::maps::AvlTreeMap;
///
/// let mut map = AvlTreeMap::new();
/// map.set(3, "c").set(1, "a").set(2, "b");
/// assert_eq!(map.get(&2), Ok(&"b"));
/// assert!(map.get(&4).is_err());
///
/// assert!(map.delete(&1));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
/// # map.assert_correctness();
///```
pub struct TreeMap<K, V, S: Balance = Splay, C = AsNumbers> {
    search: SearchTree<(K, V), S::Meta, C>,
    strategy: S,
}

/// An ordered map kept height-balanced.
pub type AvlTreeMap<K, V, C = AsNumbers> = TreeMap<K, V, Avl, C>;
/// An ordered map kept color-balanced.
pub type RedBlackTreeMap<K, V, C = AsNumbers> = TreeMap<K, V, RedBlack, C>;
/// An ordered map that moves every accessed key to the root.
pub type SplayTreeMap<K, V, C = AsNumbers> = TreeMap<K, V, Splay, C>;

impl<K, V, S: Balance + Default> TreeMap<K, V, S, AsNumbers> {
    /// Creates an empty map ordered by [`AsNumbers`].
    pub fn new() -> Self {
        Self::with_comparator(AsNumbers)
    }
}

impl<K, V, S: Balance, C> TreeMap<K, V, S, C> {
    /// Creates an empty map with the given order.
    pub fn with_comparator(compare: C) -> Self
    where
        S: Default,
    {
        Self::with_strategy(S::default(), compare)
    }

    pub fn with_strategy(strategy: S, compare: C) -> Self {
        TreeMap {
            search: SearchTree::new(compare),
            strategy,
        }
    }

    pub fn len(&self) -> usize {
        self.search.tree().len()
    }

    pub fn is_empty(&self) -> bool {
        self.search.tree().is_empty()
    }

    /// The underlying tree, for inspecting its shape.
    pub fn tree(&self) -> &BinaryTree<(K, V), S::Meta> {
        self.search.tree()
    }

    pub fn search_tree(&self) -> &SearchTree<(K, V), S::Meta, C> {
        &self.search
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.search.tree_mut().clear();
    }

    /// The key and value stored at a position of [`TreeMap::tree`].
    pub fn entry_at(&self, position: Position) -> Result<(&K, &V)> {
        let (key, value) = self.search.tree().element(position)?;
        Ok((key, value))
    }

    fn entry_of(&self, position: Position) -> (&K, &V) {
        self.entry_at(position).expect(ENGINE_ERROR)
    }

    pub fn find_min(&self) -> Option<(&K, &V)> {
        self.search.first().map(|position| self.entry_of(position))
    }

    pub fn find_max(&self) -> Option<(&K, &V)> {
        self.search.last().map(|position| self.entry_of(position))
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> Iter<'_, K, V, S::Meta, C> {
        Iter::new(&self.search, SearchTree::after, self.search.first(), None)
    }

    /// Same as [`TreeMap::iter`].
    pub fn entries(&self) -> Iter<'_, K, V, S::Meta, C> {
        self.iter()
    }

    /// Entries in descending order.
    pub fn reversed(&self) -> Iter<'_, K, V, S::Meta, C> {
        Iter::new(&self.search, SearchTree::before, self.search.last(), None)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Calls `f` with every value, its key and the map, in ascending key order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in self.iter() {
            f(value, key, self);
        }
    }

    /// Like [`TreeMap::for_each`], stopping at the first error `f` returns.
    pub fn try_for_each<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&V, &K, &Self) -> std::result::Result<(), E>,
    {
        for (key, value) in self.iter() {
            f(value, key, self)?;
        }
        Ok(())
    }

    /// A cursor starting below the smallest key. See [`Cursor`].
    pub fn cursor(&self) -> Cursor {
        Cursor::ascending()
    }

    /// A cursor starting above the largest key. See [`Cursor`].
    pub fn cursor_back(&self) -> Cursor {
        Cursor::descending()
    }

    /// Moves the cursor one entry on, against the current state of the map.
    ///
    ///```
    /// use copse::maps::RedBlackTreeMap;
    ///
    /// let mut map: RedBlackTreeMap<i32, ()> = (0..4).map(|k| (k * 10, ())).collect();
    /// let mut cursor = map.cursor();
    /// let mut seen = vec![];
    /// while let Some((&key, _)) = map.advance(&mut cursor).unwrap() {
    ///     seen.push(key);
    ///     if key == 10 {
    ///         map.set(15, ()).set(5, ());
    ///     }
    /// }
    /// assert_eq!(seen, vec![0, 10, 15, 20, 30]);
    ///```
    pub fn advance(&self, cursor: &mut Cursor) -> Result<Option<(&K, &V)>> {
        Ok(cursor
            .advance(&self.search)?
            .map(|position| self.entry_of(position)))
    }
}

impl<K, V, S: Balance, C: Comparator<K>> TreeMap<K, V, S, C> {
    /// Inserts or overwrites. The strategy runs even if only the value changed.
    ///
    ///```
    /// use copse::maps::SplayTreeMap;
    ///
    /// let mut map = SplayTreeMap::new();
    /// map.set(1, 'a').set(2, 'b').set(7, 'c').set(2, 'x');
    /// assert_eq!(map.len(), 3);
    /// let root = map.tree().root().unwrap();
    /// assert_eq!(map.entry_at(root).unwrap(), (&2, &'x'));
    ///```
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        let position = match self.search.search(&key) {
            None => self.search.tree_mut().add_root((key, value)),
            Some(position) => {
                let ordering = self.search.compare_at(position, &key).expect(ENGINE_ERROR);
                let tree = self.search.tree_mut();
                match ordering {
                    Ordering::Equal => tree
                        .element_mut(position)
                        .map(|entry| entry.1 = value)
                        .map(|()| position),
                    Ordering::Greater => tree.add_left(position, (key, value)),
                    Ordering::Less => tree.add_right(position, (key, value)),
                }
            }
        }
        .expect(ENGINE_ERROR);

        self.strategy
            .on_add(self.search.tree_mut(), position)
            .expect(ENGINE_ERROR);
        self
    }

    /// Looks the key up and lets the strategy react to the visit.
    /// Returns the matching position, if any.
    fn access(&mut self, key: &K) -> Option<Position> {
        let visited = self.search.search(key)?;
        let found = self.search.compare_at(visited, key).expect(ENGINE_ERROR) == Ordering::Equal;
        self.strategy
            .on_get(self.search.tree_mut(), visited)
            .expect(ENGINE_ERROR);
        if found {
            Some(visited)
        } else {
            None
        }
    }

    pub fn get(&mut self, key: &K) -> Result<&V> {
        let position = self.access(key).ok_or(Error::KeyNotFound)?;
        Ok(self.entry_of(position).1)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let position = self.access(key).ok_or(Error::KeyNotFound)?;
        let entry = self.search.tree_mut().element_mut(position).expect(ENGINE_ERROR);
        Ok(&mut entry.1)
    }

    pub fn has(&mut self, key: &K) -> bool {
        self.access(key).is_some()
    }

    /// Looks the key up without letting the strategy react.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.search
            .find(key)
            .map(|position| self.entry_of(position).1)
    }

    /// Removes the key, returning whether it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the key, returning the stored key and value.
    ///
    /// A node with two children trades its entry with its inorder predecessor first,
    /// and the predecessor's node, which has at most one child, is the one spliced out.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let position = self.search.find(key)?;
        let tree = self.search.tree();
        let has_two_children =
            tree.num_children(position).expect(ENGINE_ERROR) == 2;
        let target = if has_two_children {
            let predecessor = self
                .search
                .before(position)
                .expect(ENGINE_ERROR)
                .expect(ENGINE_ERROR);
            tracing::debug!("swapping entry with its predecessor before removal");
            self.search
                .tree_mut()
                .swap_elements(position, predecessor)
                .expect(ENGINE_ERROR);
            predecessor
        } else {
            position
        };

        let tree = self.search.tree_mut();
        let parent = tree.parent(target).expect(ENGINE_ERROR);
        let side = tree.side(target).expect(ENGINE_ERROR);
        let (entry, alg_data) = tree.remove_with_alg_data(target).expect(ENGINE_ERROR);
        let removal = Removal {
            parent,
            side,
            alg_data,
        };
        self.strategy.on_remove(tree, removal).expect(ENGINE_ERROR);
        Some(entry)
    }

    fn greater_or_equal_position(&self, key: &K) -> Option<Position> {
        let position = self.search.search(key)?;
        match self.search.compare_at(position, key).expect(ENGINE_ERROR) {
            Ordering::Less => self.search.after(position).expect(ENGINE_ERROR),
            _ => Some(position),
        }
    }

    fn greater_position(&self, key: &K) -> Option<Position> {
        let position = self.search.search(key)?;
        match self.search.compare_at(position, key).expect(ENGINE_ERROR) {
            Ordering::Greater => Some(position),
            _ => self.search.after(position).expect(ENGINE_ERROR),
        }
    }

    fn less_or_equal_position(&self, key: &K) -> Option<Position> {
        let position = self.search.search(key)?;
        match self.search.compare_at(position, key).expect(ENGINE_ERROR) {
            Ordering::Greater => self.search.before(position).expect(ENGINE_ERROR),
            _ => Some(position),
        }
    }

    fn less_position(&self, key: &K) -> Option<Position> {
        let position = self.search.search(key)?;
        match self.search.compare_at(position, key).expect(ENGINE_ERROR) {
            Ordering::Less => Some(position),
            _ => self.search.before(position).expect(ENGINE_ERROR),
        }
    }

    /// The entry with the smallest key greater than `key`.
    pub fn find_greater(&self, key: &K) -> Option<(&K, &V)> {
        self.greater_position(key).map(|position| self.entry_of(position))
    }

    pub fn find_greater_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        self.greater_or_equal_position(key)
            .map(|position| self.entry_of(position))
    }

    /// The entry with the largest key less than `key`.
    pub fn find_less(&self, key: &K) -> Option<(&K, &V)> {
        self.less_position(key).map(|position| self.entry_of(position))
    }

    pub fn find_less_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        self.less_or_equal_position(key)
            .map(|position| self.entry_of(position))
    }

    /// Entries with keys in `[start, stop)`, ascending. Empty if `start >= stop`.
    ///
    ///```
    /// use copse::maps::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, ()> = (0..10).map(|k| (k, ())).collect();
    /// let keys: Vec<_> = map.find_range(&3, &6).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![3, 4, 5]);
    /// assert_eq!(map.find_range(&6, &3).count(), 0);
    ///```
    pub fn find_range(&self, start: &K, stop: &K) -> Iter<'_, K, V, S::Meta, C> {
        if self.search.compare_keys(start, stop) != Ordering::Less {
            return Iter::new(&self.search, SearchTree::after, None, None);
        }
        Iter::new(
            &self.search,
            SearchTree::after,
            self.greater_or_equal_position(start),
            self.greater_or_equal_position(stop),
        )
    }

    /// Asserts that the tree is a well-linked binary search tree, and that the
    /// strategy's invariants hold. Otherwise, panics.
    pub fn assert_correctness(&self) {
        let tree = self.search.tree();
        let mut count = 0;
        let mut previous: Option<&K> = None;
        for position in tree.inorder() {
            count += 1;
            for child in tree.children(position).expect(ENGINE_ERROR) {
                assert_eq!(tree.parent(child), Ok(Some(position)), "broken parent link");
            }
            let key = self.entry_of(position).0;
            if let Some(previous) = previous {
                assert_eq!(
                    self.search.compare_keys(previous, key),
                    Ordering::Less,
                    "keys out of order"
                );
            }
            previous = Some(key);
        }
        assert_eq!(count, self.len());
        if let Some(root) = tree.root() {
            assert_eq!(tree.parent(root), Ok(None));
        }
        S::assert_balanced(tree);
    }
}

impl<K, V, S: Balance + Default, C: Default> Default for TreeMap<K, V, S, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, S, C> std::iter::FromIterator<(K, V)> for TreeMap<K, V, S, C>
where
    S: Balance + Default,
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S: Balance, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, S, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K, V, S: Balance, C> IntoIterator for &'a TreeMap<K, V, S, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S::Meta, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, S: Balance, C> std::fmt::Debug
    for TreeMap<K, V, S, C>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

type Step<K, V, A, C> = fn(&SearchTree<(K, V), A, C>, Position) -> Result<Option<Position>>;

/// Lazy sequence of entries of a [`TreeMap`].
pub struct Iter<'a, K, V, A, C> {
    search: &'a SearchTree<(K, V), A, C>,
    positions: Iterate<'a, (K, V), A, C, Step<K, V, A, C>>,
    // first position not to yield
    end: Option<Position>,
    done: bool,
}

impl<'a, K, V, A, C> Iter<'a, K, V, A, C> {
    fn new(
        search: &'a SearchTree<(K, V), A, C>,
        step: Step<K, V, A, C>,
        start: Option<Position>,
        end: Option<Position>,
    ) -> Self {
        Iter {
            search,
            positions: search.iterate(step, start),
            end,
            done: false,
        }
    }
}

impl<'a, K, V, A, C> Iterator for Iter<'a, K, V, A, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let position = self.positions.next();
        if position.is_none() || position == self.end {
            self.done = true;
            return None;
        }
        let (key, value) = self
            .search
            .tree()
            .element(position?)
            .expect(ENGINE_ERROR);
        Some((key, value))
    }
}
