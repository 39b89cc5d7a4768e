//! Positional word mask
//!
//! A mask mirrors the hidden word position by position: each cell is either a
//! revealed letter or the wildcard `*`.

use std::fmt;

/// Marker used for unrevealed positions when a mask is rendered or parsed
pub const WILDCARD: char = '*';

/// Revealed letters of a hidden word, with wildcards elsewhere
///
/// Cells only ever move from hidden to revealed; there is no way to hide a
/// position again short of building a new mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Mask {
    cells: Vec<Option<char>>,
}

impl Mask {
    /// Create a fully hidden mask of `len` positions
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Parse a mask from its textual form, e.g. `"ab**"`
    ///
    /// Every character other than [`WILDCARD`] is taken as a revealed letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Mask;
    ///
    /// let mask = Mask::parse("ab**");
    /// assert_eq!(mask.len(), 4);
    /// assert_eq!(mask.get(0), Some('a'));
    /// assert_eq!(mask.get(2), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            cells: text
                .chars()
                .map(|c| (c != WILDCARD).then_some(c))
                .collect(),
        }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Revealed letter at `position`, or `None` for a wildcard or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.cells.get(position).copied().flatten()
    }

    /// True once no wildcard remains
    ///
    /// An empty mask is trivially complete.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Check whether `word` agrees with every revealed position
    ///
    /// Lengths are compared in characters. Letters guessed wrong elsewhere are
    /// not taken into account; only revealed cells constrain the word.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for cell in &self.cells {
            match (chars.next(), cell) {
                (None, _) => return false,
                (Some(actual), Some(expected)) if actual != *expected => return false,
                _ => {}
            }
        }
        chars.next().is_none()
    }

    /// Reveal `letter` at `position`
    ///
    /// Revealing an already revealed cell is a no-op as long as the letter
    /// agrees. Returns `false` when the position is out of range.
    pub(crate) fn reveal(&mut self, position: usize, letter: char) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) => {
                debug_assert!(cell.is_none_or(|c| c == letter), "revealed cell changed");
                *cell = Some(letter);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}
