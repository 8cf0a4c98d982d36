//! Comparators: total orders supplied by callers.
//!
//! Every ordered structure in the crate takes a [`Comparator`] as a type parameter.
//! Any `Fn(&K, &K) -> Ordering` closure is a comparator, and a few common ones are
//! provided as unit structs.

use std::cmp::Ordering;
use std::fmt::Display;

/// A total order over `K`.
///
/// Implementations must be reflexive, antisymmetric and transitive.
/// The structures assume this, but don't verify it.
pub trait Comparator<K: ?Sized> {
    /// Read it as "`a` is `<result>` than `b`".
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The order given by [`Ord`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Values that can be read as a float.
pub trait Numeric {
    /// Returns NaN if the value has no numeric reading.
    fn to_number(&self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Numeric for str {
    /// Reads the longest numeric prefix, after leading whitespace.
    /// The only spelling of infinity accepted is `Infinity`, optionally signed.
    fn to_number(&self) -> f64 {
        let trimmed = self.trim_start();
        trimmed
            .char_indices()
            .map(|(index, c)| index + c.len_utf8())
            .rev()
            .find_map(|end| {
                let prefix = &trimmed[..end];
                prefix
                    .parse::<f64>()
                    .ok()
                    .filter(|value| spells_number(prefix, *value))
            })
            .unwrap_or(f64::NAN)
    }
}

/// `f64` parsing also takes `inf` and `infinity` in any case. Only digits that
/// overflow and the exact word `Infinity` count.
fn spells_number(prefix: &str, value: f64) -> bool {
    if !value.is_infinite() {
        return true;
    }
    let unsigned = prefix
        .strip_prefix('+')
        .or_else(|| prefix.strip_prefix('-'))
        .unwrap_or(prefix);
    unsigned == "Infinity" || unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

impl Numeric for String {
    fn to_number(&self) -> f64 {
        self.as_str().to_number()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

/// Compares keys by their numeric reading. This is the default for the ordered maps.
///
/// # Panics
///
/// Panics with "can not compare with NaN" if either key reads as NaN.
///
///```
/// use copse::comparators::{AsNumbers, Comparator};
/// use std::cmp::Ordering;
///
/// assert_eq!(AsNumbers.compare("10", "9"), Ordering::Greater);
/// assert_eq!(AsNumbers.compare(&2.5, &2.5), Ordering::Equal);
///```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct AsNumbers;

impl<K: Numeric + ?Sized> Comparator<K> for AsNumbers {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.to_number()
            .partial_cmp(&b.to_number())
            .unwrap_or_else(|| panic!("can not compare with NaN"))
    }
}

/// Compares keys by their [`Display`] rendering.
///
///```
/// use copse::comparators::{AsStrings, Comparator};
/// use std::cmp::Ordering;
///
/// assert_eq!(AsStrings.compare(&10, &9), Ordering::Less);
///```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct AsStrings;

impl<K: Display + ?Sized> Comparator<K> for AsStrings {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.to_string().cmp(&b.to_string())
    }
}

/// Flips another comparator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reverse<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Compares `(key, value)` pairs by their keys only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct ByKey<C>(pub C);

impl<K, V, C: Comparator<K>> Comparator<(K, V)> for ByKey<C> {
    fn compare(&self, a: &(K, V), b: &(K, V)) -> Ordering {
        self.0.compare(&a.0, &b.0)
    }
}
