//! Display functions for command results

use super::formatters::{
    create_progress_bar, guess_label, outcome_label, pattern_colored, status_label,
};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{Guess, Letter};
use crate::solver::LetterMode;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} wrong guesses allowed)",
        result.target.bright_yellow().bold(),
        result.max_wrong_guesses
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.turns.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} → {}",
            turn,
            guess_label(&step.guess),
            outcome_label(step.outcome),
            pattern_colored(&step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!("\nStatus: {}", status_label(result.status));
    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} turns, score {}",
                result.turns.len(),
                result.score
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Lost after {} turns, score {}", result.turns.len(), result.score)
                .red()
                .bold()
        );
    }
}

/// Print the analysis of a position
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POSITION ANALYSIS:".bright_cyan().bold(),
        pattern_colored(&result.pattern)
    );
    println!("{}", "═".repeat(60).cyan());

    let wrong = if result.incorrect_letters.is_empty() {
        "none".to_string()
    } else {
        result.incorrect_letters.clone()
    };
    println!("\n   Wrong letters:   {}", wrong.red());
    println!("   Wrong remaining: {}", result.wrong_guesses_remaining);
    println!("   Strategy:        {}", result.strategy);

    println!(
        "\n📚 {} candidates",
        result.total_candidates.to_string().bright_yellow().bold()
    );
    if !result.sample.is_empty() {
        let more = result.total_candidates.saturating_sub(result.sample.len());
        let suffix = if more > 0 {
            format!(" … and {more} more")
        } else {
            String::new()
        };
        println!("   {}{}", result.sample.join(", "), suffix.bright_black());
    }

    println!("\n📊 {}", "Letter counts:".bright_cyan().bold());
    let max = result.total_candidates as f64;
    for (letter, count) in result.stats.iter() {
        match count {
            Some(count) if count > 0 => {
                let bar = create_progress_bar(count as f64, max, 30);
                println!("   {letter}: [{}] {count}", bar.green());
            }
            Some(_) => {}
            None => println!("   {letter}: {}", "guessed".bright_black()),
        }
    }

    let letter_or_dash = |letter: Option<Letter>| {
        letter.map_or_else(|| "-".to_string(), |l| l.to_string())
    };
    let mode = match result.mode {
        LetterMode::Reduction => "reduction",
        LetterMode::Likelihood => "likelihood",
    };

    println!("\n🎯 {}", "Selection:".bright_cyan().bold());
    println!("   Highest letter:    {}", letter_or_dash(result.highest));
    println!(
        "   Reduction letter:  {} (target {:.2})",
        letter_or_dash(result.reduction),
        result.reduction_point
    );
    println!(
        "   Halving guesses:   {} → {} uses {mode}",
        result.halving_guesses, result.strategy
    );

    let kind = match result.guess {
        Guess::Letter(_) => "letter",
        Guess::Word(_) => "word",
    };
    println!(
        "   Next guess:        {} ({kind})",
        guess_label(&result.guess)
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average score:    {}",
        format!("{:.3}", result.average_score).bright_yellow().bold()
    );
    println!("   Won:              {}", result.won.to_string().green());
    println!("   Lost:             {}", result.lost.to_string().red());
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().yellow());
    }
    println!(
        "   Best score:       {}",
        result.min_score.to_string().green()
    );
    println!(
        "   Worst score:      {}",
        result.max_score.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    let finished = result.finished_games();
    if finished > 0 {
        println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
        let mut scores: Vec<_> = result.distribution.iter().collect();
        scores.sort_unstable();
        for (&score, &count) in scores {
            let pct = (count as f64 / finished as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {score:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Failures:".yellow().bold());
        for (secret, error) in result.failures.iter().take(10) {
            println!("   {secret}: {error}");
        }
    }
}
