//! Hangman Solver
//!
//! A hangman simulator whose guesser narrows the word list to the words
//! consistent with the revealed letters and guesses the most frequent letter
//! left among them.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::config::GameConfig;
//! use hangman_solver::core::RoundState;
//! use hangman_solver::solver::{AdaptiveGuesser, Guesser, RoundOutcome};
//!
//! let words: Vec<String> = ["cat", "dog", "ant"].iter().map(ToString::to_string).collect();
//!
//! let mut round = RoundState::new(&GameConfig::default());
//! round.reset("cat");
//!
//! let report = AdaptiveGuesser.play(&mut round, &words).unwrap();
//! assert_eq!(report.outcome, RoundOutcome::Won);
//! assert_eq!(round.player_score(), 1);
//! ```

// Game limits
pub mod config;

// Core domain types
pub mod core;

// Guessing algorithms
pub mod solver;

// Hidden word selection
pub mod adversary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
