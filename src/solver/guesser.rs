//! Guesser interface
//!
//! Defines the Guesser trait and the report a finished round produces.

use crate::core::{RoundError, RoundState};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Every position revealed
    Won,
    /// Attempts exhausted with wildcards left
    Lost,
    /// The guesser ran out of candidate letters before attempts ran out
    Stalled,
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// One guess and what it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: char,
    /// Size of the candidate pool the letter was drawn from
    pub candidates: usize,
    pub hit: bool,
    /// Mask after the guess was processed
    pub mask: String,
}

/// Everything a guesser reports back about a round it played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub steps: Vec<GuessStep>,
}

impl RoundReport {
    /// Number of letters submitted
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }
}

/// A player that drives a round to its end
pub trait Guesser {
    /// Play the current round of `round` against the word universe `words`
    ///
    /// # Errors
    /// Returns a `RoundError` when the round state rejects a guess. Running out
    /// of candidate letters is not an error; it ends the round as
    /// [`RoundOutcome::Stalled`].
    fn play(&self, round: &mut RoundState, words: &[String]) -> Result<RoundReport, RoundError>;
}
