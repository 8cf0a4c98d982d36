//! Pattern matching and common-subsequence algorithms.
//!
//! Matching works on bytes, so returned indices are byte offsets into the source.

use crate::{Error, Result};

/// The first byte offset where `pattern` occurs in `source`, by Boyer-Moore with the
/// last-occurrence heuristic. An empty pattern matches at 0.
///
///```
/// use copse::text::index_of_bm;
///
/// assert_eq!(index_of_bm("abacaabadcabacabaabb", "abacab"), Some(10));
/// assert_eq!(index_of_bm("abc", "d"), None);
///```
pub fn index_of_bm(source: &str, pattern: &str) -> Option<usize> {
    let (source, pattern) = (source.as_bytes(), pattern.as_bytes());
    if pattern.is_empty() {
        return Some(0);
    }
    let mut last = [None; 256];
    for (index, &byte) in pattern.iter().enumerate() {
        last[byte as usize] = Some(index);
    }

    let tail = pattern.len() - 1;
    // `start` is the candidate alignment, `i` the source byte being compared
    let mut start = 0;
    let mut i = tail;
    while i < source.len() {
        let k = i - start;
        if source[i] == pattern[k] {
            if k == 0 {
                return Some(start);
            }
            i -= 1;
        } else {
            let shift = match last[source[i] as usize] {
                Some(occurrence) if occurrence < k => k - occurrence,
                Some(_) => 1,
                None => k + 1,
            };
            start += shift;
            i = start + tail;
        }
    }
    None
}

/// A pattern with its precomputed Knuth-Morris-Pratt failure table, for searching
/// many sources.
///
///```
/// use copse::text::Pattern;
/// use copse::Error;
///
/// let pattern = Pattern::new("abacab").unwrap();
/// assert_eq!(pattern.find_in("abacaabaccabacabaabb"), Some(10));
/// assert_eq!(Pattern::new("").unwrap_err(), Error::EmptyPattern);
///```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    // overlaps[i]: length of the longest proper prefix that is also a suffix of text[..=i]
    overlaps: Vec<usize>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Pattern> {
        let bytes = pattern.as_bytes();
        if bytes.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let mut overlaps = vec![0; bytes.len()];
        let mut i = 1;
        let mut j = 0;
        while i < bytes.len() {
            if bytes[i] == bytes[j] {
                j += 1;
                overlaps[i] = j;
                i += 1;
            } else if j > 0 {
                j = overlaps[j - 1];
            } else {
                i += 1;
            }
        }
        Ok(Pattern {
            text: pattern.to_string(),
            overlaps,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn overlaps(&self) -> &[usize] {
        &self.overlaps
    }

    /// The first byte offset where the pattern occurs in `source`.
    pub fn find_in(&self, source: &str) -> Option<usize> {
        let (source, pattern) = (source.as_bytes(), self.text.as_bytes());
        let mut i = 0;
        // number of pattern bytes matched so far
        let mut k = 0;
        while i < source.len() {
            if source[i] == pattern[k] {
                if k == pattern.len() - 1 {
                    return Some(i - k);
                }
                i += 1;
                k += 1;
            } else if k > 0 {
                k = self.overlaps[k - 1];
            } else {
                i += 1;
            }
        }
        None
    }
}

/// The first byte offset where `pattern` occurs in `source`, by Knuth-Morris-Pratt.
/// An empty pattern matches at 0.
///
///```
/// use copse::text::index_of_kmp;
///
/// assert_eq!(index_of_kmp("hello world", "o w"), Some(4));
/// assert_eq!(index_of_kmp("hello", ""), Some(0));
///```
pub fn index_of_kmp(source: &str, pattern: &str) -> Option<usize> {
    match Pattern::new(pattern) {
        Ok(pattern) => pattern.find_in(source),
        Err(_) => Some(0),
    }
}

/// A longest sequence of characters appearing in order (not necessarily adjacent) in
/// both strings. Ties are broken towards earlier characters of `x`.
///
///```
/// use copse::text::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence("abcbdab", "bdcaba").len(), 4);
/// assert_eq!(longest_common_subsequence("abc", ""), "");
///```
pub fn longest_common_subsequence(x: &str, y: &str) -> String {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    // lengths[i][j]: length of the answer for x[i..] and y[j..]
    let mut lengths = vec![vec![0usize; y.len() + 1]; x.len() + 1];
    for i in (0..x.len()).rev() {
        for j in (0..y.len()).rev() {
            lengths[i][j] = if x[i] == y[j] {
                lengths[i + 1][j + 1] + 1
            } else {
                lengths[i + 1][j].max(lengths[i][j + 1])
            };
        }
    }

    let mut result = String::with_capacity(lengths[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < x.len() && j < y.len() {
        if x[i] == y[j] {
            result.push(x[i]);
            i += 1;
            j += 1;
        } else if lengths[i + 1][j] >= lengths[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}

/// The first longest run of characters of `x` that also appears contiguously in `y`.
///
///```
/// use copse::text::longest_common_substring;
///
/// assert_eq!(longest_common_substring("xabcdey", "zzbcdq"), "bcd");
/// assert_eq!(longest_common_substring("abc", "xyz"), "");
///```
pub fn longest_common_substring<'a>(x: &'a str, y: &str) -> &'a str {
    let xs: Vec<(usize, char)> = x.char_indices().collect();
    let ys: Vec<char> = y.chars().collect();
    // rows[j + 1]: length of the common run ending at the current x char and y[j]
    let mut previous = vec![0usize; ys.len() + 1];
    let mut current = vec![0usize; ys.len() + 1];
    let mut best = (0, 0); // (length, end char index in x, exclusive)

    for (i, &(_, xc)) in xs.iter().enumerate() {
        for (j, &yc) in ys.iter().enumerate() {
            current[j + 1] = if xc == yc { previous[j] + 1 } else { 0 };
            if current[j + 1] > best.0 {
                best = (current[j + 1], i + 1);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let (length, end) = best;
    if length == 0 {
        return "";
    }
    let start = xs[end - length].0;
    let stop = xs.get(end).map_or(x.len(), |&(offset, _)| offset);
    &x[start..stop]
}
