//! Position analysis command
//!
//! Shows what the strategy sees for a typed-in position: the candidates, the
//! letter statistics, both selection rules and the guess it would make.

use crate::core::{GameSnapshot, GameView, Guess, Letter, RevealedPattern, Word};
use crate::error::AnalyzeError;
use crate::solver::selection::{self, guesses_if_halving_held};
use crate::solver::{LetterMode, LetterStats, Solver, StrategyConfig, StrategyType};
use std::collections::BTreeSet;

/// Candidate words listed in an analysis
pub const SAMPLE_SIZE: usize = 10;

/// Result of analyzing a position
pub struct AnalysisResult {
    pub pattern: RevealedPattern,
    pub incorrect_letters: String,
    pub wrong_guesses_remaining: u32,
    pub strategy: &'static str,
    pub total_candidates: usize,
    pub sample: Vec<String>,
    pub stats: LetterStats,
    pub highest: Option<Letter>,
    pub reduction: Option<Letter>,
    pub reduction_point: f64,
    pub halving_guesses: u32,
    /// Rule the selected strategy applies to this position
    pub mode: LetterMode,
    pub guess: Guess,
}

fn wrong_letters(incorrect: &str) -> impl Iterator<Item = char> + '_ {
    incorrect.chars().filter(|&c| !c.is_whitespace() && c != ',')
}

/// Wrong guesses left after the distinct letters in `incorrect`
///
/// # Examples
/// ```
/// use hangman_solver::commands::analyze::remaining_after;
///
/// assert_eq!(remaining_after(5, "x, X, q"), 3);
/// assert_eq!(remaining_after(2, "abc"), 0);
/// ```
#[must_use]
pub fn remaining_after(max_wrong_guesses: u32, incorrect: &str) -> u32 {
    let distinct: BTreeSet<char> = wrong_letters(incorrect)
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    max_wrong_guesses.saturating_sub(distinct.len() as u32)
}

/// Analyze a position given as a pattern and the letters guessed wrong
///
/// `pattern` uses `-` or `_` for hidden positions. `incorrect` lists the
/// wrong letters; spaces and commas are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern does not parse
/// - No dictionary word fits the position
/// - A wrong letter lies outside the configured alphabet
/// - Every letter has been guessed
pub fn analyze_position(
    pattern: &str,
    incorrect: &str,
    wrong_guesses_remaining: u32,
    strategy: StrategyType,
    config: StrategyConfig,
    dictionary: &[Word],
) -> Result<AnalysisResult, AnalyzeError> {
    let pattern: RevealedPattern = pattern.parse()?;
    let game = GameSnapshot::new(
        pattern.clone(),
        wrong_letters(incorrect),
        wrong_guesses_remaining,
    );

    let mut solver = Solver::new(strategy, config, dictionary, pattern.len());
    let total_candidates = solver.narrow(&game)?;

    let stats = LetterStats::compute(
        config.alphabet(),
        game.correctly_guessed_letters(),
        game.incorrectly_guessed_letters(),
        solver.candidates(),
    )?;
    let reduction_point =
        selection::reduction_point(total_candidates, config.reduction_proportion());

    let sample = solver
        .candidates()
        .iter()
        .take(SAMPLE_SIZE)
        .map(|word| word.text().to_string())
        .collect();

    let highest = selection::highest_letter(&stats);
    let reduction = selection::reduction_letter(&stats, reduction_point);
    let guess = solver.next_guess(&game)?;

    Ok(AnalysisResult {
        incorrect_letters: game.incorrectly_guessed_letters().iter().collect(),
        wrong_guesses_remaining,
        strategy: strategy.name(),
        total_candidates,
        sample,
        highest,
        reduction,
        reduction_point,
        halving_guesses: guesses_if_halving_held(total_candidates),
        mode: strategy.mode(total_candidates, wrong_guesses_remaining),
        stats,
        guess,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PatternError, SolverError};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn analyze(
        pattern: &str,
        incorrect: &str,
        remaining: u32,
        words: &[Word],
    ) -> Result<AnalysisResult, AnalyzeError> {
        analyze_with(StrategyType::default(), pattern, incorrect, remaining, words)
    }

    fn analyze_with(
        strategy: StrategyType,
        pattern: &str,
        incorrect: &str,
        remaining: u32,
        words: &[Word],
    ) -> Result<AnalysisResult, AnalyzeError> {
        analyze_position(
            pattern,
            incorrect,
            remaining,
            strategy,
            StrategyConfig::default(),
            words,
        )
    }

    #[test]
    fn analyze_two_candidates() {
        let words = words_from_slice(&["cat", "bat"]);
        let result = analyze("---", "", 5, &words).unwrap();

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.sample, ["CAT", "BAT"]);
        assert_eq!(result.highest.map(Letter::as_char), Some('T'));
        assert_eq!(result.reduction.map(Letter::as_char), Some('C'));
        assert_eq!(result.halving_guesses, 1);
        assert_eq!(result.mode, LetterMode::Reduction);
        assert_eq!(result.guess, Guess::Word(Word::new("cat").unwrap()));
    }

    #[test]
    fn analyze_applies_wrong_letters() {
        let words = words_from_slice(WORDS);
        let result = analyze("-a---a-", "n, p", 3, &words).unwrap();

        assert_eq!(result.pattern.to_string(), "-A---A-");
        assert_eq!(result.incorrect_letters, "NP");
        assert!(result.sample.iter().all(|w| !w.contains('N') && !w.contains('P')));
        assert!(result.stats.is_excluded(Letter::new('A').unwrap()));
        assert!(result.stats.is_excluded(Letter::new('N').unwrap()));
    }

    #[test]
    fn analyze_bad_pattern() {
        let words = words_from_slice(&["cat"]);
        assert_eq!(
            analyze("c?t", "", 5, &words).err(),
            Some(AnalyzeError::Pattern(PatternError::InvalidCharacter('?')))
        );
    }

    #[test]
    fn analyze_impossible_position() {
        let words = words_from_slice(&["cat", "bat"]);
        assert!(matches!(
            analyze("---", "t", 5, &words),
            Err(AnalyzeError::Solver(SolverError::NoCandidates { .. }))
        ));
    }

    #[test]
    fn mode_follows_selected_strategy() {
        let words = words_from_slice(WORDS);
        let modes: Vec<LetterMode> = ["adaptive", "likely", "reduction"]
            .into_iter()
            .map(|name| {
                analyze_with(StrategyType::from_name(name), "-----", "", 5, &words)
                    .unwrap()
                    .mode
            })
            .collect();

        // Hundreds of 5-letter candidates need more than 5 halvings
        assert_eq!(
            modes,
            [
                LetterMode::Likelihood,
                LetterMode::Likelihood,
                LetterMode::Reduction
            ]
        );
    }

    #[test]
    fn remaining_counts_distinct_letters() {
        assert_eq!(remaining_after(5, ""), 5);
        assert_eq!(remaining_after(5, "xx"), 4);
        assert_eq!(remaining_after(5, "x X, x"), 4);
        assert_eq!(remaining_after(5, "e,o"), 3);
        assert_eq!(remaining_after(1, "eo"), 0);
    }
}
