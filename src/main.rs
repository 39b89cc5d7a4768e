//! Hangman Solver - CLI
//!
//! Simulates hangman games played by the adaptive frequency guesser.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    adversary::RandomAdversary,
    commands::{Simulator, analyze_words, evaluate_all, solve_word},
    config::GameConfig,
    output::{
        print_analysis_result, print_evaluation_report, print_simulation_report,
        print_solve_result,
    },
    solver::AdaptiveGuesser,
    wordlists::{
        EMBEDDED,
        loader::{load_from_file, words_from_slice},
    },
};
use log::info;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman simulator with an adaptive, frequency-driven letter guesser",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per round
    #[arg(short = 'a', long, global = true, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Longest word accepted from the word list
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_MAX_WORD_LENGTH)]
    max_word_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds against randomly chosen words, keeping score
    Simulate {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Seed for the adversary's word choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play once against every word in the list
    Evaluate {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write a `word,attempts` scorecard to this file
        #[arg(long)]
        scorecard: Option<PathBuf>,
    },

    /// Play a single round against a chosen word
    Solve {
        /// The hidden word
        word: String,

        /// Show candidate pool sizes
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show letter and n-gram frequencies of the word list
    Analyze {
        /// Only consider words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// N-gram size for the second table
        #[arg(long, default_value = "2")]
        ngram: usize,

        /// Rows to show per table
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str, config: &GameConfig) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(EMBEDDED, config.max_word_length)),
        path => load_from_file(path, config.max_word_length)
            .with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.attempts, cli.max_word_length)
        .validate()
        .context("invalid game configuration")?;
    let words = load_words(&cli.wordlist, &config)?;
    info!("using {} words, {} attempts per round", words.len(), config.max_attempts);

    match cli.command {
        Commands::Simulate { rounds, seed } => {
            run_simulate_command(&words, &config, rounds, seed);
            Ok(())
        }
        Commands::Evaluate { limit, scorecard } => {
            run_evaluate_command(&words, &config, limit, scorecard.as_deref())
        }
        Commands::Solve { word, verbose } => run_solve_command(&words, &config, &word, verbose),
        Commands::Analyze { length, ngram, top } => {
            let result = analyze_words(&words, length, ngram);
            print_analysis_result(&result, top);
            Ok(())
        }
    }
}

fn run_simulate_command(words: &[String], config: &GameConfig, rounds: usize, seed: Option<u64>) {
    let adversary = seed.map_or_else(RandomAdversary::new, RandomAdversary::with_seed);
    println!("Simulating {rounds} rounds...");

    let mut simulator = Simulator::new(AdaptiveGuesser, adversary, words, config);
    let report = simulator.run(rounds);
    print_simulation_report(&report, config.max_attempts);
}

fn run_evaluate_command(
    words: &[String],
    config: &GameConfig,
    limit: Option<usize>,
    scorecard: Option<&std::path::Path>,
) -> Result<()> {
    let report = evaluate_all(&AdaptiveGuesser, words, config, limit, true);
    print_evaluation_report(&report);

    if let Some(path) = scorecard {
        let file = File::create(path)
            .with_context(|| format!("failed to create scorecard '{}'", path.display()))?;
        report
            .write_scorecard(BufWriter::new(file))
            .with_context(|| format!("failed to write scorecard '{}'", path.display()))?;
        println!("\nScorecard written to {}", path.display());
    }
    Ok(())
}

fn run_solve_command(words: &[String], config: &GameConfig, word: &str, verbose: bool) -> Result<()> {
    let result = solve_word(&AdaptiveGuesser, words, config, word)
        .with_context(|| format!("round against '{word}' failed"))?;
    print_solve_result(&result, verbose);
    Ok(())
}
