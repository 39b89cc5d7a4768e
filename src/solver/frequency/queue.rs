//! Priority ordering of histogram keys

use std::cmp::Reverse;
use std::hash::Hash;

use super::Histogram;

/// Order keys by descending count
///
/// Equal counts fall back to ascending key order, so the result does not
/// depend on the histogram's internal iteration order.
///
/// # Examples
/// ```
/// use hangman_solver::solver::{build_letter_histogram, build_priority_queue};
///
/// let histogram = build_letter_histogram(&["cat", "dog", "ant"]);
/// let queue = build_priority_queue(&histogram);
/// assert_eq!(queue[..3], ['a', 't', 'c']);
/// ```
#[must_use]
pub fn build_priority_queue<K: Eq + Hash + Ord + Clone>(histogram: &Histogram<K>) -> Vec<K> {
    let mut entries: Vec<(&K, usize)> = histogram.iter().collect();
    entries.sort_by_key(|&(key, count)| (Reverse(count), key));
    entries.into_iter().map(|(key, _)| key.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::frequency::build_letter_histogram;

    #[test]
    fn most_frequent_first() {
        let histogram = build_letter_histogram(&["eee", "ea", "t"]);
        assert_eq!(build_priority_queue(&histogram), vec!['e', 'a', 't']);
    }

    #[test]
    fn ties_are_alphabetical() {
        let histogram = build_letter_histogram(&["dcba"]);
        assert_eq!(build_priority_queue(&histogram), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn keys_are_distinct() {
        let histogram = build_letter_histogram(&["banana", "bandana"]);
        let queue = build_priority_queue(&histogram);
        assert_eq!(queue.len(), histogram.len());
        assert_eq!(queue[0], 'a');
    }

    #[test]
    fn empty_histogram_gives_empty_queue() {
        let histogram: Histogram<char> = Histogram::new();
        assert!(build_priority_queue(&histogram).is_empty());
    }

    #[test]
    fn works_for_ngrams() {
        let histogram: Histogram<String> = ["th", "he", "th"].iter().map(ToString::to_string).collect();
        assert_eq!(build_priority_queue(&histogram), vec!["th".to_string(), "he".to_string()]);
    }
}
