//! Simulate command
//!
//! Plays many rounds in a row against one game state, the adversary choosing
//! each hidden word. Scores accumulate across rounds.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{error, info};

use crate::adversary::Adversary;
use crate::config::GameConfig;
use crate::core::{RoundError, RoundState};
use crate::solver::{Guesser, RoundOutcome};

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub word: String,
    pub mask: String,
    pub attempts_used: usize,
    pub guesses: usize,
    /// `Err` when the round was cut short by a contract violation
    pub outcome: Result<RoundOutcome, RoundError>,
}

impl RoundRecord {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self.outcome, Ok(RoundOutcome::Won))
    }
}

/// Aggregate of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub stalled: usize,
    pub faulted: usize,
    pub player_score: usize,
    pub adversary_score: usize,
    /// Wrong attempts used per round -> number of rounds
    pub attempts_distribution: HashMap<usize, usize>,
    pub records: Vec<RoundRecord>,
    pub duration: Duration,
}

impl SimulationReport {
    /// Share of rounds won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64
        }
    }
}

/// Drives rounds between a guesser and an adversary
pub struct Simulator<'a, G: Guesser, A: Adversary> {
    guesser: G,
    adversary: A,
    words: &'a [String],
    round: RoundState,
}

impl<'a, G: Guesser, A: Adversary> Simulator<'a, G, A> {
    /// Create a simulator over the word universe `words`
    #[must_use]
    pub fn new(guesser: G, adversary: A, words: &'a [String], config: &GameConfig) -> Self {
        Self {
            guesser,
            adversary,
            words,
            round: RoundState::new(config),
        }
    }

    /// Game state, including the scores so far
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.round
    }

    /// Play a single round
    ///
    /// Returns `None` if the adversary has nothing to choose from.
    pub fn play_round(&mut self) -> Option<RoundRecord> {
        let word = self.adversary.choose_word(self.words)?.to_string();
        self.round.reset(&word);

        let result = self.guesser.play(&mut self.round, self.words);
        let guesses = result.as_ref().map_or(0, |report| report.guesses());
        let outcome = result.map(|report| report.outcome);

        if let Err(e) = &outcome {
            error!("round against '{word}' faulted: {e}");
        }
        if !matches!(outcome, Ok(RoundOutcome::Won)) {
            self.round.award_adversary();
        }

        Some(RoundRecord {
            word,
            mask: self.round.mask().to_string(),
            attempts_used: self.round.attempts_used(),
            guesses,
            outcome,
        })
    }

    /// Play up to `rounds` rounds and summarize them
    pub fn run(&mut self, rounds: usize) -> SimulationReport {
        let start = Instant::now();
        let mut records = Vec::with_capacity(rounds);
        let mut attempts_distribution: HashMap<usize, usize> = HashMap::new();
        let (mut won, mut lost, mut stalled, mut faulted) = (0, 0, 0, 0);

        for _ in 0..rounds {
            let Some(record) = self.play_round() else {
                break;
            };

            match record.outcome {
                Ok(RoundOutcome::Won) => won += 1,
                Ok(RoundOutcome::Lost) => lost += 1,
                Ok(RoundOutcome::Stalled) => stalled += 1,
                Err(_) => faulted += 1,
            }
            *attempts_distribution
                .entry(record.attempts_used)
                .or_insert(0) += 1;
            records.push(record);
        }

        let report = SimulationReport {
            rounds: records.len(),
            won,
            lost,
            stalled,
            faulted,
            player_score: self.round.player_score(),
            adversary_score: self.round.adversary_score(),
            attempts_distribution,
            records,
            duration: start.elapsed(),
        };

        info!(
            "simulated {} rounds: {} won, {} lost, {} stalled, {} faulted",
            report.rounds, report.won, report.lost, report.stalled, report.faulted
        );

        report
    }
}
