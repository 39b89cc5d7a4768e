//! Core domain types for hangman
//!
//! The positional mask and the round state machine. Nothing here knows how
//! guesses are chosen.

mod mask;
mod round;

pub use mask::{Mask, WILDCARD};
pub use round::{RoundError, RoundPhase, RoundState, RoundView};
