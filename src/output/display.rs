//! Display functions for command results

use super::formatters::{attempts_gauge, create_progress_bar, spaced_mask};
use crate::commands::{AnalysisResult, EvaluationReport, SimulationReport, SolveResult};
use crate::solver::RoundOutcome;
use colored::Colorize;

/// Print the trace of a solved (or failed) word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    if !result.in_word_list {
        println!("{}", "  (not in the word list)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    let mut used = 0;
    for (i, step) in result.report.steps.iter().enumerate() {
        if !step.hit {
            used += 1;
        }
        let letter = step.letter.to_uppercase().to_string();
        let letter = if step.hit {
            letter.green().bold()
        } else {
            letter.red().bold()
        };
        println!(
            "\nGuess {}: {}  {}  {}",
            i + 1,
            letter,
            spaced_mask(&step.mask),
            attempts_gauge(used, result.max_attempts).bright_red()
        );

        if verbose {
            println!("  Candidates: {}", step.candidates);
        }
    }

    println!();
    match result.report.outcome {
        RoundOutcome::Won => println!(
            "{}",
            format!(
                "✅ Solved with {} of {} wrong attempts",
                result.attempts_used, result.max_attempts
            )
            .green()
            .bold()
        ),
        RoundOutcome::Lost => println!(
            "{}",
            format!("❌ Hanged at {}", spaced_mask(&result.mask))
                .red()
                .bold()
        ),
        RoundOutcome::Stalled => println!(
            "{}",
            format!(
                "⚠️  Ran out of candidate letters at {}",
                spaced_mask(&result.mask)
            )
            .yellow()
            .bold()
        ),
    }
}

/// Print letter and n-gram tables of a word list
pub fn print_analysis_result(result: &AnalysisResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    let scope = result
        .length
        .map_or_else(|| "ALL WORDS".to_string(), |l| format!("{l}-LETTER WORDS"));
    println!(
        " {} {} ",
        "FREQUENCY ANALYSIS:".bright_cyan().bold(),
        scope.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words, {} letters",
        result.pool_size, result.total_letters
    );

    println!("\n🔤 {}", "Letter priority:".bright_cyan().bold());
    let max_freq = result.letters.first().map_or(0.0, |r| r.frequency);
    for row in result.letters.iter().take(top) {
        println!(
            "   {}  [{}] {:6} ({:5.2}%)",
            row.key.to_string().bright_yellow(),
            create_progress_bar(row.frequency, max_freq, 30).green(),
            row.count,
            row.frequency * 100.0
        );
    }

    println!(
        "\n🧩 {}",
        format!("Top {}-grams:", result.n).bright_cyan().bold()
    );
    for row in result.ngrams.iter().take(top) {
        println!(
            "   {:<8} {:6} ({:5.2}%)",
            row.key, row.count, row.frequency * 100.0
        );
    }
}

/// Print the summary of a simulation
pub fn print_simulation_report(report: &SimulationReport, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Score:".bright_cyan().bold());
    println!("   Rounds played:    {}", report.rounds);
    println!(
        "   Player score:     {}",
        format!("{}", report.player_score).green().bold()
    );
    println!(
        "   Adversary score:  {}",
        format!("{}", report.adversary_score).red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", report.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    if report.stalled > 0 {
        println!("   Stalled rounds:   {}", format!("{}", report.stalled).yellow());
    }
    if report.faulted > 0 {
        println!("   Faulted rounds:   {}", format!("{}", report.faulted).red());
    }
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong attempts per round:".bright_cyan().bold());
    for attempts in 0..=max_attempts {
        if let Some(&count) = report.attempts_distribution.get(&attempts) {
            let pct = (count as f64 / report.rounds as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print the summary of a whole-list evaluation
pub fn print_evaluation_report(report: &EvaluationReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluation Results ");
    println!("{}", "═".repeat(70));

    let total = report.total_words();
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {total}");
    if total == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        report.solved(),
        format!("({:.1}%)", report.solved() as f64 / total as f64 * 100.0).green()
    );
    if report.failed() > 0 {
        println!(
            "  Failed to solve:     {} {}",
            report.failed(),
            format!("({:.1}%)", report.failed() as f64 / total as f64 * 100.0).red()
        );
    }
    println!(
        "  Average wrong tries: {}",
        format!("{:.3}", report.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        report.duration.as_secs_f64()
    );

    let hardest = report.hardest(5);
    if !hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for result in hardest {
            let status = if result.is_win() { "solved" } else { "failed" };
            println!(
                "  {} ({} of {} wrong attempts, {status})",
                result.word.to_uppercase().yellow(),
                result.attempts_used,
                report.max_attempts
            );
        }
    }
}
