//! A set of pairs forming a strictly increasing trend in both coordinates.
//!
//! Useful for cost/performance trade-offs: a pair is only worth keeping if no other pair
//! has a smaller or equal `x` with a greater or equal `y`.

use std::cmp::Ordering;

use super::sorted_vec::{Entries, SortedVecMap};
use crate::comparators::{AsNumbers, Comparator};
use crate::searches::Found;

/// The maxima of a set of `(x, y)` pairs, built on a [`SortedVecMap`].
///
///```
/// use copse::maps::MaximaSet;
///
/// let mut set: MaximaSet<i32, i32> = [(1, 2), (2, 3), (3, 4)].into_iter().collect();
/// set.add(2, 4);
/// assert_eq!(set.iter().map(|(x, y)| (*x, *y)).collect::<Vec<_>>(), vec![(1, 2), (2, 4)]);
/// assert_eq!(set.best(&5), Some((&2, &4)));
/// assert_eq!(set.best(&0), None);
///```
pub struct MaximaSet<X, Y, CX = AsNumbers, CY = AsNumbers> {
    map: SortedVecMap<X, Y, CX>,
    compare_y: CY,
}

impl<X, Y> MaximaSet<X, Y> {
    pub fn new() -> Self {
        Self::with_comparators(AsNumbers, AsNumbers)
    }
}

impl<X, Y, CX, CY> MaximaSet<X, Y, CX, CY> {
    pub fn with_comparators(compare_x: CX, compare_y: CY) -> Self {
        MaximaSet {
            map: SortedVecMap::with_comparator(compare_x),
            compare_y,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// The pair with the smallest `x`.
    pub fn first(&self) -> Option<(&X, &Y)> {
        self.map.find_min()
    }

    /// The pair with the greatest `x`.
    pub fn last(&self) -> Option<(&X, &Y)> {
        self.map.find_max()
    }

    /// Pairs in ascending order of both coordinates.
    pub fn iter(&self) -> Entries<'_, X, Y> {
        self.map.iter()
    }
}

impl<X, Y, CX: Comparator<X>, CY: Comparator<Y>> MaximaSet<X, Y, CX, CY> {
    /// Adds the pair, unless some pair with a smaller or equal `x` has a
    /// greater or equal `y`. Drops the pairs the new one makes redundant.
    /// Returns `true` if the pair was added.
    pub fn add(&mut self, x: X, y: Y) -> bool {
        if let Some((_, best)) = self.map.find_less_or_equal(&x) {
            if self.compare_y.compare(best, &y) != Ordering::Less {
                return false;
            }
        }
        let index = match self.map.locate(&x) {
            Found { index, exact: true } => {
                self.map.entries[index].1 = y;
                index
            }
            Found { index, exact: false } => {
                self.map.entries.insert(index, (x, y));
                index
            }
        };

        // drop the pairs to the right that are no better than the new one
        let redundant = self.map.entries[index + 1..]
            .iter()
            .take_while(|(_, other)| {
                self.compare_y.compare(other, &self.map.entries[index].1) != Ordering::Greater
            })
            .count();
        self.map.entries.drain(index + 1..index + 1 + redundant);
        true
    }

    /// The pair with the greatest `x` not exceeding the given one.
    pub fn best(&self, x: &X) -> Option<(&X, &Y)> {
        self.map.find_less_or_equal(x)
    }
}

impl<X, Y, CX: Default, CY: Default> Default for MaximaSet<X, Y, CX, CY> {
    fn default() -> Self {
        Self::with_comparators(CX::default(), CY::default())
    }
}

impl<X, Y, CX, CY> std::iter::FromIterator<(X, Y)> for MaximaSet<X, Y, CX, CY>
where
    CX: Comparator<X> + Default,
    CY: Comparator<Y> + Default,
{
    fn from_iter<I: IntoIterator<Item = (X, Y)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (x, y) in iter {
            set.add(x, y);
        }
        set
    }
}

impl<'a, X, Y, CX, CY> IntoIterator for &'a MaximaSet<X, Y, CX, CY> {
    type Item = (&'a X, &'a Y);
    type IntoIter = Entries<'a, X, Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<X: std::fmt::Debug, Y: std::fmt::Debug, CX, CY> std::fmt::Debug for MaximaSet<X, Y, CX, CY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
