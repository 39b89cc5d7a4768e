//! Adaptive frequency guesser
//!
//! Narrows the word list to the words consistent with the mask, recounts letter
//! frequencies over that pool, and guesses the most frequent letter not tried yet.
//! The frequencies are rebuilt before every guess because they shift as the
//! pool shrinks.

use log::{debug, warn};

use super::filter::filter_by_mask;
use super::frequency::{build_letter_histogram, build_priority_queue};
use super::guesser::{GuessStep, Guesser, RoundOutcome, RoundReport};
use crate::core::{RoundError, RoundPhase, RoundState, RoundView};

/// Greedy candidate-narrowing guesser
///
/// Each step runs against the full word list:
/// ```text
/// candidates = words consistent with the mask
/// queue      = letters of candidates by descending count, minus guessed ones
/// guess        queue[0]
/// ```
///
/// If the hidden word is in the word list it is always among the candidates,
/// since revealed positions come from the word itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveGuesser;

impl AdaptiveGuesser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Pick the next letter for the round seen through `view`
    ///
    /// Returns the letter together with the size of the candidate pool.
    ///
    /// # Errors
    /// Returns `RoundError::NoCandidateLetters` when every letter of every
    /// candidate has been guessed already, or no candidate is left.
    pub fn next_letter<S: AsRef<str>>(
        &self,
        view: &RoundView<'_>,
        words: &[S],
    ) -> Result<(char, usize), RoundError> {
        let candidates = filter_by_mask(words, view.mask);
        let histogram = build_letter_histogram(&candidates);

        build_priority_queue(&histogram)
            .into_iter()
            .find(|c| !view.guessed_letters.contains(c))
            .map(|c| (c, candidates.len()))
            .ok_or(RoundError::NoCandidateLetters {
                attempts_used: view.attempts_used,
            })
    }
}

impl Guesser for AdaptiveGuesser {
    fn play(&self, round: &mut RoundState, words: &[String]) -> Result<RoundReport, RoundError> {
        let mut steps = Vec::new();

        while round.phase() == RoundPhase::Running {
            let next = self.next_letter(&round.view(), words);
            let (letter, candidates) = match next {
                Ok(next) => next,
                Err(RoundError::NoCandidateLetters { attempts_used }) => {
                    warn!(
                        "no candidate letters left for mask {} after {attempts_used} wrong attempts",
                        round.mask()
                    );
                    round.abandon();
                    return Ok(RoundReport {
                        outcome: RoundOutcome::Stalled,
                        steps,
                    });
                }
                Err(e) => return Err(e),
            };

            let hit = round.process_guess(letter)?;
            debug!(
                "guessed '{letter}' from {candidates} candidates: {} ({}/{})",
                round.mask(),
                round.attempts_used(),
                round.max_attempts()
            );

            steps.push(GuessStep {
                letter,
                candidates,
                hit,
                mask: round.mask().to_string(),
            });
        }

        let outcome = if round.is_won() {
            RoundOutcome::Won
        } else {
            RoundOutcome::Lost
        };

        Ok(RoundReport { outcome, steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn play(list: &[&str], hidden: &str, max_attempts: usize) -> (RoundState, RoundReport) {
        let words = words(list);
        let mut round = RoundState::new(&GameConfig::new(max_attempts, 24));
        round.reset(hidden);
        let report = AdaptiveGuesser.play(&mut round, &words).unwrap();
        (round, report)
    }

    #[test]
    fn wins_against_small_list() {
        let (round, report) = play(&["cat", "dog", "ant"], "cat", 8);

        assert_eq!(report.outcome, RoundOutcome::Won);
        assert_eq!(round.mask().to_string(), "cat");
        assert_eq!(round.player_score(), 1);
        assert_eq!(round.phase(), RoundPhase::Finished);
        assert_eq!(round.attempts_used(), 0);

        let letters: Vec<char> = report.steps.iter().map(|s| s.letter).collect();
        assert_eq!(letters, vec!['a', 'c', 't']);
        assert_eq!(report.steps[0].candidates, 3);
        assert_eq!(report.steps[1].candidates, 1);
    }

    #[test]
    fn loses_when_first_guess_misses_with_one_attempt() {
        let (round, report) = play(&["aab", "ccd"], "ccd", 1);

        assert_eq!(report.outcome, RoundOutcome::Lost);
        assert_eq!(round.attempts_used(), 1);
        assert!(!round.mask().is_complete());
        assert_eq!(round.player_score(), 0);
    }

    #[test]
    fn stalls_when_hidden_word_is_unknown() {
        let (round, report) = play(&["cat"], "dog", 8);

        assert_eq!(report.outcome, RoundOutcome::Stalled);
        assert_eq!(round.attempts_used(), 3);
        assert_eq!(round.phase(), RoundPhase::Finished);
        assert_eq!(round.player_score(), 0);
    }

    #[test]
    fn stall_does_not_consume_attempt() {
        // After 'a' hits and 'b' misses, "ab" offers nothing new
        let (round, report) = play(&["ab"], "ac", 8);

        assert_eq!(report.outcome, RoundOutcome::Stalled);
        assert_eq!(round.attempts_used(), 1);
        assert_eq!(round.mask().to_string(), "a*");
    }

    #[test]
    fn empty_word_wins_immediately() {
        let (round, report) = play(&["cat"], "", 8);

        assert_eq!(report.outcome, RoundOutcome::Won);
        assert!(report.steps.is_empty());
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.player_score(), 1);
    }

    #[test]
    fn zero_attempts_ends_before_first_guess() {
        let (round, report) = play(&["cat"], "cat", 0);

        assert_eq!(report.outcome, RoundOutcome::Lost);
        assert!(report.steps.is_empty());
        assert_eq!(round.player_score(), 0);
    }

    #[test]
    fn wrong_letters_stay_in_candidates() {
        // the miss on 'c' leaves "cap" in the pool
        let (round, report) = play(&["zap", "cap", "map"], "map", 8);

        assert_eq!(report.outcome, RoundOutcome::Won);
        assert_eq!(round.mask().to_string(), "map");
        let letters: Vec<char> = report.steps.iter().map(|s| s.letter).collect();
        assert_eq!(letters, vec!['a', 'p', 'c', 'm']);
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn next_letter_skips_guessed_letters() {
        let words = words(&["eel", "elk"]);
        let mut round = RoundState::new(&GameConfig::default());
        round.reset("elk");
        round.process_guess('e').unwrap();

        let (letter, candidates) = AdaptiveGuesser.next_letter(&round.view(), &words).unwrap();
        // "eel" still fits "e**"
        assert_eq!(letter, 'l');
        assert_eq!(candidates, 2);
    }

    #[test]
    fn next_letter_reports_exhaustion() {
        let words = words(&["aa"]);
        let mut round = RoundState::new(&GameConfig::default());
        round.reset("ab");
        round.process_guess('a').unwrap();

        assert_eq!(
            AdaptiveGuesser.next_letter(&round.view(), &words),
            Err(RoundError::NoCandidateLetters { attempts_used: 0 })
        );
    }

    proptest! {
        #[test]
        fn never_repeats_or_overspends(
            list in prop::collection::vec("[a-f]{1,5}", 1..20),
            pick in any::<prop::sample::Index>(),
            max_attempts in 0usize..6,
        ) {
            let hidden = list[pick.index(list.len())].clone();
            let words = list.clone();
            let mut round = RoundState::new(&GameConfig::new(max_attempts, 24));
            round.reset(&hidden);

            let report = AdaptiveGuesser.play(&mut round, &words).unwrap();

            let mut seen = std::collections::HashSet::new();
            for step in &report.steps {
                prop_assert!(seen.insert(step.letter));
            }
            prop_assert!(round.attempts_used() <= max_attempts);
            prop_assert_eq!(round.phase(), RoundPhase::Finished);
            // Hidden word is always a candidate, so the guesser never stalls
            prop_assert_ne!(report.outcome, RoundOutcome::Stalled);
        }
    }
}
