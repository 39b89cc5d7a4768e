//! Occurrence counting over word collections

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Occurrence counts with a running total
///
/// The total is the sum of all counts, kept alongside the map so that no
/// reserved key is ever mixed in with real ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<K: Eq + Hash> {
    counts: FxHashMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> Histogram<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`
    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `key` (0 when absent)
    #[must_use]
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(key, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    /// Share of the total held by each key
    ///
    /// Every counted key is kept, non-letters such as `-` included, so the
    /// shares always sum to one. Empty when nothing was counted.
    #[must_use]
    pub fn frequencies(&self) -> FxHashMap<&K, f64> {
        if self.total == 0 {
            return FxHashMap::default();
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .map(|(k, &v)| (k, v as f64 / total))
            .collect()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Histogram<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for key in iter {
            histogram.add(key);
        }
        histogram
    }
}

/// Count every letter of every word, lowercased
///
/// A letter appearing `k` times in one word contributes `k`.
///
/// # Examples
/// ```
/// use hangman_solver::solver::build_letter_histogram;
///
/// let histogram = build_letter_histogram(&["ab", "ba"]);
/// assert_eq!(histogram.get(&'a'), 2);
/// assert_eq!(histogram.get(&'b'), 2);
/// assert_eq!(histogram.total(), 4);
/// ```
#[must_use]
pub fn build_letter_histogram<S: AsRef<str>>(words: &[S]) -> Histogram<char> {
    words
        .iter()
        .flat_map(|w| w.as_ref().chars())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Count substrings of length `n`
///
/// Windows start at every position except the last one, and a window running
/// past the end of the word is cut short. For `n == 1` the final letter of
/// each word is never counted; for `n > 2` shorter tail fragments are counted
/// alongside the full n-grams. Words are not case-normalised here.
///
/// `n == 0` counts nothing.
#[must_use]
pub fn build_ngram_histogram<S: AsRef<str>>(words: &[S], n: usize) -> Histogram<String> {
    let mut histogram = Histogram::new();
    if n == 0 {
        return histogram;
    }

    for word in words {
        let chars: Vec<char> = word.as_ref().chars().collect();
        for start in 0..chars.len().saturating_sub(1) {
            let end = (start + n).min(chars.len());
            histogram.add(chars[start..end].iter().collect());
        }
    }

    histogram
}
