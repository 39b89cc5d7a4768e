//! Word solving command
//!
//! Plays a single traced round against a chosen word.

use crate::config::GameConfig;
use crate::core::{RoundError, RoundState};
use crate::solver::{Guesser, RoundReport};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    /// Whether the target appears in the word list the guesser narrows
    pub in_word_list: bool,
    pub report: RoundReport,
    pub mask: String,
    pub attempts_used: usize,
    pub max_attempts: usize,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.report.outcome.is_win()
    }
}

/// Play one round against `target`
///
/// The target is trimmed and lowercased first. It does not have to be in
/// `words`, though the guesser will usually stall when it is not.
///
/// # Errors
///
/// Returns a `RoundError` if the round state rejects one of the guesser's moves.
pub fn solve_word<G: Guesser>(
    guesser: &G,
    words: &[String],
    config: &GameConfig,
    target: &str,
) -> Result<SolveResult, RoundError> {
    let target = target.trim().to_lowercase();
    let mut round = RoundState::new(config);
    round.reset(&target);

    let report = guesser.play(&mut round, words)?;

    Ok(SolveResult {
        in_word_list: words.contains(&target),
        mask: round.mask().to_string(),
        attempts_used: round.attempts_used(),
        max_attempts: round.max_attempts(),
        report,
        target,
    })
}
