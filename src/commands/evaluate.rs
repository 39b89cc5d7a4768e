//! Evaluate every word - comprehensive guesser evaluation
//!
//! Plays one round against each word of the list. Rounds are independent, each
//! with its own game state, so they run in parallel.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rayon::prelude::*;

use crate::config::GameConfig;
use crate::core::{RoundError, RoundState};
use crate::solver::{Guesser, RoundOutcome};

/// Result from playing against a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub attempts_used: usize,
    pub guesses: usize,
    pub outcome: Result<RoundOutcome, RoundError>,
}

impl WordResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self.outcome, Ok(RoundOutcome::Won))
    }
}

/// Results for every evaluated word, in word list order
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub results: Vec<WordResult>,
    pub max_attempts: usize,
    pub duration: Duration,
}

impl EvaluationReport {
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.results.iter().filter(|r| r.is_win()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_words() - self.solved()
    }

    /// Mean wrong attempts over all words, 0 when empty
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: usize = self.results.iter().map(|r| r.attempts_used).sum();
        total as f64 / self.results.len() as f64
    }

    /// The `n` words that cost the most wrong attempts
    ///
    /// Ties keep word list order.
    #[must_use]
    pub fn hardest(&self, n: usize) -> Vec<&WordResult> {
        let mut sorted: Vec<&WordResult> = self.results.iter().collect();
        sorted.sort_by_key(|r| std::cmp::Reverse(r.attempts_used));
        sorted.truncate(n);
        sorted
    }

    /// Write a `word,attempts` scorecard, one line per word
    ///
    /// # Errors
    /// Propagates any error from `writer`.
    pub fn write_scorecard<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for result in &self.results {
            writeln!(writer, "{},{}", result.word, result.attempts_used)?;
        }
        writer.flush()
    }
}

fn play_word<G: Guesser>(guesser: &G, words: &[String], config: &GameConfig, word: &str) -> WordResult {
    let mut round = RoundState::new(config);
    round.reset(word);

    let result = guesser.play(&mut round, words);
    if let Err(e) = &result {
        error!("round against '{word}' faulted: {e}");
    }

    WordResult {
        word: word.to_string(),
        attempts_used: round.attempts_used(),
        guesses: result.as_ref().map_or(0, |report| report.guesses()),
        outcome: result.map(|report| report.outcome),
    }
}

/// Play against every word of `words` (or the first `limit` of them)
///
/// With `show_progress` a progress bar is drawn on stderr.
pub fn evaluate_all<G: Guesser + Sync>(
    guesser: &G,
    words: &[String],
    config: &GameConfig,
    limit: Option<usize>,
    show_progress: bool,
) -> EvaluationReport {
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Vec<WordResult> = targets
        .par_iter()
        .map(|word| {
            let result = play_word(guesser, words, config, word);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let report = EvaluationReport {
        results,
        max_attempts: config.max_attempts,
        duration: start.elapsed(),
    };

    info!(
        "evaluated {} words: {} solved, {:.2} wrong attempts on average",
        report.total_words(),
        report.solved(),
        report.average_attempts()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AdaptiveGuesser;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn evaluates_every_word_in_order() {
        let words = words(&["cat", "dog", "ant"]);
        let report = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::default(), None, false);

        let played: Vec<&str> = report.results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(played, vec!["cat", "dog", "ant"]);
        assert_eq!(report.solved(), 3);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn limit_truncates() {
        let words = words(&["cat", "dog", "ant"]);
        let report = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::default(), Some(2), false);
        assert_eq!(report.total_words(), 2);

        let report = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::default(), Some(10), false);
        assert_eq!(report.total_words(), 3);
    }

    #[test]
    fn hardest_word_costs_most_attempts() {
        let words = words(&["cat", "dog", "ant"]);
        let report = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::default(), None, false);

        // "dog" misses on 'a', 't' and 'c' before 'd' lands
        let hardest = report.hardest(1);
        assert_eq!(hardest[0].word, "dog");
        assert_eq!(hardest[0].attempts_used, 3);
        assert!((report.average_attempts() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scorecard_lists_word_and_attempts() {
        let words = words(&["cat", "dog"]);
        let report = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::default(), None, false);

        let mut out = Vec::new();
        report.write_scorecard(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat,0\ndog,2\n");
    }

    #[test]
    fn empty_list_gives_empty_report() {
        let words: Vec<String> = Vec::new();
        let report = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::default(), None, false);
        assert_eq!(report.total_words(), 0);
        assert!(report.average_attempts().abs() < f64::EPSILON);
    }
}
