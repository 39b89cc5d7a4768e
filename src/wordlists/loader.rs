//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Failure to produce a usable word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no usable words", path.display())]
    Empty { path: PathBuf },
}

/// Normalise one entry: trimmed, lowercased, no inner whitespace, not too long
fn normalize(entry: &str, max_word_length: usize) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    let word = trimmed.to_lowercase();
    (word.chars().count() <= max_word_length).then_some(word)
}

/// Load words from a file, one per line
///
/// Blank lines, entries with inner whitespace, and entries longer than
/// `max_word_length` characters are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and `LoadError::Empty`
/// if nothing usable is left after filtering.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 24).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    max_word_length: usize,
) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .filter_map(|line| normalize(line, max_word_length))
        .collect();

    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to an owned word list
///
/// Applies the same normalisation as [`load_from_file`].
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::EMBEDDED;
///
/// let words = words_from_slice(EMBEDDED, 24);
/// assert_eq!(words.len(), EMBEDDED.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], max_word_length: usize) -> Vec<String> {
    slice
        .iter()
        .filter_map(|s| normalize(s, max_word_length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["crane", "ox", "elephant"], 24);
        assert_eq!(words, vec!["crane", "ox", "elephant"]);
    }

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["  Crane ", "", "two words", "SLATE"], 24);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_respects_max_length() {
        let words = words_from_slice(&["short", "muchlonger"], 5);
        assert_eq!(words, vec!["short"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 24).is_empty());
    }

    #[test]
    fn non_alphabetic_entries_are_kept() {
        let words = words_from_slice(&["o'clock", "x-ray"], 24);
        assert_eq!(words, vec!["o'clock", "x-ray"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("definitely/not/here.txt", 24).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
