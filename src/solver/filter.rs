//! Word list narrowing
//!
//! Stateless filters over a word collection. Input order is preserved.

use crate::core::Mask;

/// Keep only words with exactly `length` characters
#[must_use]
pub fn filter_by_length<S: AsRef<str>>(words: &[S], length: usize) -> Vec<&str> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|w| w.chars().count() == length)
        .collect()
}

/// Keep only words consistent with every revealed position of `mask`
///
/// This is a positional filter. A word that contains a letter already guessed
/// wrong is kept as long as that letter sits in a still hidden position.
///
/// # Examples
/// ```
/// use hangman_solver::core::Mask;
/// use hangman_solver::solver::filter_by_mask;
///
/// let words = ["abcd", "abce", "xbcd"];
/// assert_eq!(filter_by_mask(&words, &Mask::parse("ab**")), vec!["abcd", "abce"]);
/// ```
#[must_use]
pub fn filter_by_mask<'a, S: AsRef<str>>(words: &'a [S], mask: &Mask) -> Vec<&'a str> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|w| mask.matches(w))
        .collect()
}
