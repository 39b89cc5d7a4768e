//! Word lists for hangman
//!
//! An embedded default list plus loading from plain text files.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};

/// Length of the longest word, in characters
///
/// Returns `None` for an empty list.
#[must_use]
pub fn find_max_length<S: AsRef<str>>(words: &[S]) -> Option<usize> {
    words.iter().map(|w| w.as_ref().chars().count()).max()
}
