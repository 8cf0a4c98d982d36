//! An ordered map kept as a sorted vector.
//!
//! Lookups are binary searches. Insertions and removals shift the tail of the vector,
//! so this map suits small or read-mostly data.

use std::cmp::Ordering;

use crate::comparators::{AsNumbers, Comparator};
use crate::searches::{binary_search_by, Found};
use crate::{Error, Result};

/// An ordered map over a vector of entries sorted by key.
///
///```
/// use copse::maps::SortedVecMap;
///
/// let mut map = SortedVecMap::new();
/// map.set(2, "two").set(1, "one").set(3, "three");
/// assert_eq!(map.find_less(&3), Some((&2, &"two")));
/// assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!["one", "two", "three"]);
///```
pub struct SortedVecMap<K, V, C = AsNumbers> {
    pub(super) entries: Vec<(K, V)>,
    compare: C,
}

impl<K, V> SortedVecMap<K, V, AsNumbers> {
    pub fn new() -> Self {
        Self::with_comparator(AsNumbers)
    }
}

impl<K, V, C> SortedVecMap<K, V, C> {
    pub fn with_comparator(compare: C) -> Self {
        SortedVecMap {
            entries: vec![],
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get(index).map(|(key, value)| (key, value))
    }

    pub fn find_min(&self) -> Option<(&K, &V)> {
        self.entry(0)
    }

    pub fn find_max(&self) -> Option<(&K, &V)> {
        self.entry(self.entries.len().checked_sub(1)?)
    }

    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.entries.iter(),
            reversed: false,
        }
    }

    /// Same as [`SortedVecMap::iter`].
    pub fn entries(&self) -> Entries<'_, K, V> {
        self.iter()
    }

    pub fn reversed(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.entries.iter(),
            reversed: true,
        }
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
}

impl<K, V, C: Comparator<K>> SortedVecMap<K, V, C> {
    pub(super) fn locate(&self, key: &K) -> Found {
        binary_search_by(&self.entries, .., |(probe, _)| self.compare.compare(probe, key))
    }

    /// Inserts or overwrites.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        match self.locate(&key) {
            Found { index, exact: true } => self.entries[index].1 = value,
            Found { index, exact: false } => self.entries.insert(index, (key, value)),
        }
        self
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        match self.locate(key) {
            Found { index, exact: true } => Ok(&self.entries[index].1),
            _ => Err(Error::KeyNotFound),
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.locate(key) {
            Found { index, exact: true } => Ok(&mut self.entries[index].1),
            _ => Err(Error::KeyNotFound),
        }
    }

    pub fn has(&self, key: &K) -> bool {
        self.locate(key).exact
    }

    pub fn delete(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        match self.locate(key) {
            Found { index, exact: true } => Some(self.entries.remove(index)),
            _ => None,
        }
    }

    pub fn find_greater(&self, key: &K) -> Option<(&K, &V)> {
        let Found { index, exact } = self.locate(key);
        self.entry(if exact { index + 1 } else { index })
    }

    pub fn find_greater_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(self.locate(key).index)
    }

    pub fn find_less(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(self.locate(key).index.checked_sub(1)?)
    }

    pub fn find_less_or_equal(&self, key: &K) -> Option<(&K, &V)> {
        let Found { index, exact } = self.locate(key);
        if exact {
            self.entry(index)
        } else {
            self.entry(index.checked_sub(1)?)
        }
    }

    /// Entries with keys in `[start, stop)`, ascending. Empty if `start >= stop`.
    pub fn find_range(&self, start: &K, stop: &K) -> Entries<'_, K, V> {
        let range = if self.compare.compare(start, stop) == Ordering::Less {
            self.locate(start).index..self.locate(stop).index
        } else {
            0..0
        };
        Entries {
            inner: self.entries[range].iter(),
            reversed: false,
        }
    }
}

impl<K, V, C: Default> Default for SortedVecMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K> + Default> std::iter::FromIterator<(K, V)> for SortedVecMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for SortedVecMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a SortedVecMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, C> std::fmt::Debug for SortedVecMap<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Entries of a [`SortedVecMap`], in either direction.
pub struct Entries<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
    reversed: bool,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        };
        entry.map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Entries<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        };
        entry.map(|(key, value)| (key, value))
    }
}

impl<'a, K, V> ExactSizeIterator for Entries<'a, K, V> {}
