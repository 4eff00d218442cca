//! Formatting utilities for terminal output

use crate::core::{GameStatus, Guess, GuessOutcome, RevealedPattern};
use colored::{ColoredString, Colorize};

/// Format a pattern with revealed letters highlighted
#[must_use]
pub fn pattern_colored(pattern: &RevealedPattern) -> String {
    pattern
        .to_string()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                ch.to_string().bright_green().bold().to_string()
            } else {
                ch.to_string().bright_black().to_string()
            }
        })
        .collect()
}

/// Format a guess, words in yellow
#[must_use]
pub fn guess_label(guess: &Guess) -> ColoredString {
    match guess {
        Guess::Letter(letter) => letter.to_string().bright_cyan().bold(),
        Guess::Word(word) => word.text().bright_yellow().bold(),
    }
}

/// Short description of what a guess did
#[must_use]
pub fn outcome_label(outcome: GuessOutcome) -> ColoredString {
    match outcome {
        GuessOutcome::Revealed { count: 1 } => "hit (1 position)".green(),
        GuessOutcome::Revealed { count } => format!("hit ({count} positions)").green(),
        GuessOutcome::Solved => "solved".green().bold(),
        GuessOutcome::Miss => "miss".red(),
        GuessOutcome::AlreadyGuessed => "repeated".yellow(),
        GuessOutcome::GameOver => "game over".bright_black(),
    }
}

#[must_use]
pub fn status_label(status: GameStatus) -> ColoredString {
    match status {
        GameStatus::Won => status.to_string().green().bold(),
        GameStatus::Lost => status.to_string().red().bold(),
        GameStatus::KeepGuessing => status.to_string().yellow(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_keeps_characters() {
        colored::control::set_override(false);
        let pattern: RevealedPattern = "-A---A-".parse().unwrap();
        assert_eq!(pattern_colored(&pattern), "-A---A-");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
