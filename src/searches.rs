//! Searching in slices: binary search and quickselect.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

use rand::Rng;

use crate::comparators::Comparator;
use crate::{Error, Result};

/// Outcome of a binary search.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Found {
    /// Index of a matching item if `exact`, otherwise the index where the
    /// target would have to be inserted to keep the slice sorted.
    pub index: usize,
    pub exact: bool,
}

/// Binary search over the part of a sorted slice inside `range`.
/// `probe` compares an item against the target.
///
/// The range is clamped to the slice.
pub fn binary_search_by<T, R, F>(items: &[T], range: R, mut probe: F) -> Found
where
    R: RangeBounds<usize>,
    F: FnMut(&T) -> Ordering,
{
    let mut low = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let mut high = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => items.len(),
    }
    .min(items.len());
    low = low.min(high);

    // the answer is in `low..=high`
    while low < high {
        let mid = low + (high - low) / 2;
        match probe(&items[mid]) {
            Ordering::Equal => return Found { index: mid, exact: true },
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }
    Found {
        index: low,
        exact: false,
    }
}

/// Binary search for `target` in a slice sorted by `compare`.
///
///```
/// use copse::searches::{binary_search, Found};
/// use copse::comparators::AsNumbers;
///
/// let items = [1, 3, 5, 7];
/// assert_eq!(binary_search(&items, &5, AsNumbers), Found { index: 2, exact: true });
/// assert_eq!(binary_search(&items, &4, AsNumbers), Found { index: 2, exact: false });
/// assert_eq!(binary_search(&items, &9, AsNumbers), Found { index: 4, exact: false });
///```
pub fn binary_search<T, C: Comparator<T>>(items: &[T], target: &T, compare: C) -> Found {
    binary_search_by(items, .., |item| compare.compare(item, target))
}

/// Returns the item that would sit at index `n` if the slice was sorted.
/// Expected linear time, using random pivots.
///
///```
/// use copse::searches::quick_select;
/// use copse::comparators::Natural;
///
/// let items = [7, 1, 5, 3, 9];
/// assert_eq!(quick_select(&items, 0, Natural), Ok(&1));
/// assert_eq!(quick_select(&items, 2, Natural), Ok(&5));
/// assert!(quick_select(&items, 5, Natural).is_err());
///```
pub fn quick_select<T, C: Comparator<T>>(items: &[T], n: usize, compare: C) -> Result<&T> {
    if items.is_empty() {
        return Err(Error::Empty("array"));
    }
    if n >= items.len() {
        return Err(Error::OutOfBounds {
            index: n,
            len: items.len(),
        });
    }

    let mut rng = rand::thread_rng();
    let mut candidates: Vec<&T> = items.iter().collect();
    let mut n = n;
    loop {
        let pivot = candidates[rng.gen_range(0..candidates.len())];
        let mut less = vec![];
        let mut equal = 0;
        let mut greater = vec![];
        for item in candidates {
            match compare.compare(item, pivot) {
                Ordering::Less => less.push(item),
                Ordering::Equal => equal += 1,
                Ordering::Greater => greater.push(item),
            }
        }

        if n < less.len() {
            candidates = less;
        } else if n < less.len() + equal {
            return Ok(pivot);
        } else {
            n -= less.len() + equal;
            candidates = greater;
        }
    }
}
