//! Hangman guessing algorithms
//!
//! Word filters, frequency analysis, and the adaptive guesser built on them.

pub mod adaptive;
mod filter;
pub mod frequency;
pub mod guesser;

pub use adaptive::AdaptiveGuesser;
pub use filter::{filter_by_length, filter_by_mask};
pub use frequency::{Histogram, build_letter_histogram, build_ngram_histogram, build_priority_queue};
pub use guesser::{GuessStep, Guesser, RoundOutcome, RoundReport};
