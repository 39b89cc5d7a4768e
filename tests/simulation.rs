use std::fs;

use hangman_solver::adversary::{RandomAdversary, SequentialAdversary};
use hangman_solver::commands::{Simulator, evaluate_all, solve_word};
use hangman_solver::config::GameConfig;
use hangman_solver::core::WILDCARD;
use hangman_solver::solver::{AdaptiveGuesser, RoundOutcome};
use hangman_solver::wordlists::EMBEDDED;
use hangman_solver::wordlists::loader::{LoadError, load_from_file, words_from_slice};

fn embedded() -> Vec<String> {
    words_from_slice(EMBEDDED, GameConfig::DEFAULT_MAX_WORD_LENGTH)
}

#[test]
fn seeded_simulation_keeps_consistent_score() {
    let words = embedded();
    let config = GameConfig::default();
    let mut simulator =
        Simulator::new(AdaptiveGuesser, RandomAdversary::with_seed(42), &words, &config);

    let report = simulator.run(200);

    assert_eq!(report.rounds, 200);
    assert_eq!(report.faulted, 0);
    // Hidden words come from the list, so the guesser never runs dry
    assert_eq!(report.stalled, 0);
    assert_eq!(report.player_score, report.won);
    assert_eq!(report.player_score + report.adversary_score, report.rounds);

    for record in &report.records {
        assert!(record.attempts_used <= config.max_attempts);
        assert_eq!(record.is_win(), !record.mask.contains(WILDCARD));
    }
}

#[test]
fn same_seed_same_games() {
    let words = embedded();
    let config = GameConfig::default();

    let run = |seed| {
        let mut simulator =
            Simulator::new(AdaptiveGuesser, RandomAdversary::with_seed(seed), &words, &config);
        simulator.run(25).records
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn more_attempts_never_hurt() {
    let words: Vec<String> = embedded().into_iter().take(300).collect();

    let tight = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::new(3, 24), None, false);
    let loose = evaluate_all(&AdaptiveGuesser, &words, &GameConfig::new(10, 24), None, false);

    // The guess sequence for a word does not depend on the budget, only where it stops
    for (t, l) in tight.results.iter().zip(&loose.results) {
        if t.is_win() {
            assert!(l.is_win(), "{} won with 3 attempts but not 10", t.word);
            assert_eq!(t.attempts_used, l.attempts_used);
        }
    }
    assert!(loose.solved() >= tight.solved());
}

#[test]
fn sequential_simulation_matches_evaluation() {
    let words: Vec<String> = embedded().into_iter().take(50).collect();
    let config = GameConfig::default();

    let mut simulator = Simulator::new(AdaptiveGuesser, SequentialAdversary::new(), &words, &config);
    let simulated = simulator.run(words.len());
    let evaluated = evaluate_all(&AdaptiveGuesser, &words, &config, None, false);

    for (record, result) in simulated.records.iter().zip(&evaluated.results) {
        assert_eq!(record.word, result.word);
        assert_eq!(record.attempts_used, result.attempts_used);
        assert_eq!(record.outcome, result.outcome);
    }
}

#[test]
fn solve_from_loaded_file() {
    let path = std::env::temp_dir().join(format!("hangman_words_{}.txt", std::process::id()));
    fs::write(&path, "Cat\n\n  dog  \nant\nnot a word\n").unwrap();

    let words = load_from_file(&path, 24).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(words, vec!["cat", "dog", "ant"]);

    let result = solve_word(&AdaptiveGuesser, &words, &GameConfig::default(), "dog").unwrap();
    assert_eq!(result.report.outcome, RoundOutcome::Won);
    assert_eq!(result.attempts_used, 3);
}

#[test]
fn file_without_usable_words_is_rejected() {
    let path = std::env::temp_dir().join(format!("hangman_empty_{}.txt", std::process::id()));
    fs::write(&path, "\n   \ntoolongforthelimit\n").unwrap();

    let err = load_from_file(&path, 5).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, LoadError::Empty { .. }));
}
