//! Round state machine
//!
//! A [`RoundState`] is created once per game and reset for every new hidden
//! word. Scores survive resets; everything else is per round.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use super::Mask;
use crate::config::GameConfig;

/// Errors raised while a round is being played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Every letter the candidate pool suggests has been tried already.
    #[error("no candidate letters left with {attempts_used} wrong attempts used")]
    NoCandidateLetters { attempts_used: usize },

    /// Mask and hidden word disagree on length. Never expected.
    #[error("mask has {actual} positions but the hidden word has {expected}")]
    InvalidMaskLength { expected: usize, actual: usize },

    #[error("the round is already finished")]
    RoundFinished,

    #[error("letter '{0}' was already guessed this round")]
    RepeatedGuess(char),
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Running,
    /// Terminal: no further guesses are accepted until the next reset.
    Finished,
}

/// The hidden word
///
/// Only [`RoundState::process_guess`] looks inside.
#[derive(Clone, Default)]
struct Secret {
    letters: Vec<char>,
}

impl Secret {
    fn new(word: &str) -> Self {
        Self {
            letters: word.chars().collect(),
        }
    }

    fn len(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} letters>)", self.letters.len())
    }
}

/// Read-only projection of a round, everything a guesser may observe
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub mask: &'a Mask,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub guessed_letters: &'a BTreeSet<char>,
}

impl RoundView<'_> {
    /// Wrong guesses still available
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }
}

/// Mutable record of the current round plus the scores of the whole game
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: Secret,
    mask: Mask,
    attempts_used: usize,
    max_attempts: usize,
    guessed_letters: BTreeSet<char>,
    abandoned: bool,
    player_score: usize,
    adversary_score: usize,
}

impl RoundState {
    /// Create a game with an empty first round and zero scores
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            secret: Secret::default(),
            mask: Mask::default(),
            attempts_used: 0,
            max_attempts: config.max_attempts,
            guessed_letters: BTreeSet::new(),
            abandoned: false,
            player_score: 0,
            adversary_score: 0,
        }
    }

    /// Start a new round against `word`
    ///
    /// The mask becomes all wildcards of the word's length; attempts and
    /// guessed letters are cleared. Scores are left alone, except that an
    /// empty word has nothing to hide and scores for the player at once.
    pub fn reset(&mut self, word: &str) {
        self.secret = Secret::new(word);
        self.mask = Mask::hidden(self.secret.len());
        self.attempts_used = 0;
        self.guessed_letters.clear();
        self.abandoned = false;

        if self.mask.is_complete() {
            self.player_score += 1;
        }
    }

    /// Submit a letter
    ///
    /// Reveals every position holding `letter`. A miss costs one attempt.
    /// The player scores as soon as the mask is complete.
    ///
    /// Returns whether at least one position matched.
    ///
    /// # Errors
    /// - `RoundFinished` if the round no longer accepts guesses
    /// - `RepeatedGuess` if `letter` was already submitted this round
    /// - `InvalidMaskLength` if the mask and hidden word have drifted apart
    pub fn process_guess(&mut self, letter: char) -> Result<bool, RoundError> {
        if self.phase() == RoundPhase::Finished {
            return Err(RoundError::RoundFinished);
        }
        if self.guessed_letters.contains(&letter) {
            return Err(RoundError::RepeatedGuess(letter));
        }
        if self.mask.len() != self.secret.len() {
            return Err(RoundError::InvalidMaskLength {
                expected: self.secret.len(),
                actual: self.mask.len(),
            });
        }

        self.guessed_letters.insert(letter);

        let mut matched = 0;
        for (position, &actual) in self.secret.letters.iter().enumerate() {
            if actual == letter && self.mask.reveal(position, letter) {
                matched += 1;
            }
        }

        if matched == 0 {
            self.attempts_used += 1;
        }

        if self.mask.is_complete() {
            self.player_score += 1;
        }

        Ok(matched > 0)
    }

    /// End the round early, leaving the mask as it is
    pub fn abandon(&mut self) {
        self.abandoned = true;
    }

    /// Credit the adversary with a round
    pub fn award_adversary(&mut self) {
        self.adversary_score += 1;
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.abandoned || self.mask.is_complete() || self.attempts_used >= self.max_attempts {
            RoundPhase::Finished
        } else {
            RoundPhase::Running
        }
    }

    /// True once the mask is fully revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.mask.is_complete()
    }

    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            mask: &self.mask,
            attempts_used: self.attempts_used,
            max_attempts: self.max_attempts,
            guessed_letters: &self.guessed_letters,
        }
    }

    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    #[must_use]
    pub const fn player_score(&self) -> usize {
        self.player_score
    }

    #[must_use]
    pub const fn adversary_score(&self) -> usize {
        self.adversary_score
    }
}
