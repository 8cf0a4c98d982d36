//! Ordered maps.
//!
//! [`TreeMap`] is a binary search tree engine with pluggable balancing:
//! [`AvlTreeMap`], [`RedBlackTreeMap`] and [`SplayTreeMap`] share everything but their
//! [`Balance`] strategy. [`SortedVecMap`] keeps its entries in a sorted vector instead.
//! Both implement the [`OrderedMap`] contract.

pub mod avl;
mod balance;
mod maxima_set;
pub mod red_black;
mod sorted_vec;
pub mod splay;
mod tree_map;

pub use avl::Avl;
pub use balance::{Balance, Removal};
pub use maxima_set::MaximaSet;
pub use red_black::RedBlack;
pub use sorted_vec::{Entries, SortedVecMap};
pub use splay::Splay;
pub use tree_map::{AvlTreeMap, Iter, RedBlackTreeMap, SplayTreeMap, TreeMap};

use crate::comparators::Comparator;
use crate::Result;

/// The ordered-map contract.
///
/// Lookups take `&mut self` because some maps (splay maps) reorganize themselves on
/// every access.
pub trait OrderedMap<K, V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts or overwrites. Chainable.
    fn set(&mut self, key: K, value: V) -> &mut Self;

    /// Fails with [`KeyNotFound`](crate::Error::KeyNotFound) if the key is absent.
    fn get(&mut self, key: &K) -> Result<&V>;

    fn has(&mut self, key: &K) -> bool;

    /// Returns whether the key was present.
    fn delete(&mut self, key: &K) -> bool;

    fn clear(&mut self);

    fn find_greater(&self, key: &K) -> Option<(&K, &V)>;
    fn find_greater_or_equal(&self, key: &K) -> Option<(&K, &V)>;
    fn find_less(&self, key: &K) -> Option<(&K, &V)>;
    fn find_less_or_equal(&self, key: &K) -> Option<(&K, &V)>;
    fn find_min(&self) -> Option<(&K, &V)>;
    fn find_max(&self) -> Option<(&K, &V)>;

    /// Entries with keys in `[start, stop)`, ascending. Empty if `start >= stop`.
    fn find_range<'a>(&'a self, start: &K, stop: &K) -> Self::Iter<'a>;

    /// Entries in ascending key order.
    fn entries(&self) -> Self::Iter<'_>;

    /// Entries in descending key order.
    fn reversed(&self) -> Self::Iter<'_>;
}

impl<K, V, S: Balance, C: Comparator<K>> OrderedMap<K, V> for TreeMap<K, V, S, C> {
    type Iter<'a> = Iter<'a, K, V, S::Meta, C>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        TreeMap::len(self)
    }

    fn set(&mut self, key: K, value: V) -> &mut Self {
        TreeMap::set(self, key, value)
    }

    fn get(&mut self, key: &K) -> Result<&V> {
        TreeMap::get(self, key)
    }

    fn has(&mut self, key: &K) -> bool {
        TreeMap::has(self, key)
    }

    fn delete(&mut self, key: &K) -> bool {
        TreeMap::delete(self, key)
    }

    fn clear(&mut self) {
        TreeMap::clear(self)
    }

    fn find_greater(&self, key: &K) -> Option<(&K, &V)> {
        TreeMap::find_greater(self, key)
    }

    fn find_greater_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        TreeMap::find_greater_or_equal(self, key)
    }

    fn find_less(&self, key: &K) -> Option<(&K, &V)> {
        TreeMap::find_less(self, key)
    }

    fn find_less_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        TreeMap::find_less_or_equal(self, key)
    }

    fn find_min(&self) -> Option<(&K, &V)> {
        TreeMap::find_min(self)
    }

    fn find_max(&self) -> Option<(&K, &V)> {
        TreeMap::find_max(self)
    }

    fn find_range<'a>(&'a self, start: &K, stop: &K) -> Self::Iter<'a> {
        TreeMap::find_range(self, start, stop)
    }

    fn entries(&self) -> Self::Iter<'_> {
        TreeMap::iter(self)
    }

    fn reversed(&self) -> Self::Iter<'_> {
        TreeMap::reversed(self)
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V> for SortedVecMap<K, V, C> {
    type Iter<'a> = Entries<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        SortedVecMap::len(self)
    }

    fn set(&mut self, key: K, value: V) -> &mut Self {
        SortedVecMap::set(self, key, value)
    }

    fn get(&mut self, key: &K) -> Result<&V> {
        SortedVecMap::get(self, key)
    }

    fn has(&mut self, key: &K) -> bool {
        SortedVecMap::has(self, key)
    }

    fn delete(&mut self, key: &K) -> bool {
        SortedVecMap::delete(self, key)
    }

    fn clear(&mut self) {
        SortedVecMap::clear(self)
    }

    fn find_greater(&self, key: &K) -> Option<(&K, &V)> {
        SortedVecMap::find_greater(self, key)
    }

    fn find_greater_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        SortedVecMap::find_greater_or_equal(self, key)
    }

    fn find_less(&self, key: &K) -> Option<(&K, &V)> {
        SortedVecMap::find_less(self, key)
    }

    fn find_less_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        SortedVecMap::find_less_or_equal(self, key)
    }

    fn find_min(&self) -> Option<(&K, &V)> {
        SortedVecMap::find_min(self)
    }

    fn find_max(&self) -> Option<(&K, &V)> {
        SortedVecMap::find_max(self)
    }

    fn find_range<'a>(&'a self, start: &K, stop: &K) -> Self::Iter<'a> {
        SortedVecMap::find_range(self, start, stop)
    }

    fn entries(&self) -> Self::Iter<'_> {
        SortedVecMap::iter(self)
    }

    fn reversed(&self) -> Self::Iter<'_> {
        SortedVecMap::reversed(self)
    }
}
