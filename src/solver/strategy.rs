//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::adaptive::{AdaptiveStrategy, LetterMode};
use super::selection;
use super::stats::LetterStats;
use crate::core::Letter;

/// What a strategy knows about the position besides the letter counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionContext {
    /// Size of the candidate set the counts were taken over
    pub candidates: usize,
    pub wrong_guesses_remaining: u32,
    pub reduction_proportion: f64,
}

impl SelectionContext {
    #[must_use]
    pub fn reduction_point(&self) -> f64 {
        selection::reduction_point(self.candidates, self.reduction_proportion)
    }
}

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Pick a letter from the non-excluded letters of `stats`
    ///
    /// Returns `None` only if every letter is excluded.
    fn select_letter(&self, stats: &LetterStats, ctx: &SelectionContext) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Reduction or likelihood depending on the remaining budget (default)
    Adaptive(AdaptiveStrategy),
    /// Always the most likely letter
    Likely(LikelyStrategy),
    /// Always the reduction letter
    Reduction(ReductionStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, stats: &LetterStats, ctx: &SelectionContext) -> Option<Letter> {
        match self {
            Self::Adaptive(s) => s.select_letter(stats, ctx),
            Self::Likely(s) => s.select_letter(stats, ctx),
            Self::Reduction(s) => s.select_letter(stats, ctx),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "adaptive", "likely", "reduction".
    /// Defaults to adaptive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "likely" | "highest" => Self::Likely(LikelyStrategy),
            "reduction" => Self::Reduction(ReductionStrategy),
            _ => Self::Adaptive(AdaptiveStrategy::default()),
        }
    }

    /// The selection rule this strategy applies to a position
    #[must_use]
    pub const fn mode(&self, candidates: usize, wrong_guesses_remaining: u32) -> LetterMode {
        match self {
            Self::Adaptive(s) => s.mode(candidates, wrong_guesses_remaining),
            Self::Likely(_) => LetterMode::Likelihood,
            Self::Reduction(_) => LetterMode::Reduction,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adaptive(_) => "adaptive",
            Self::Likely(_) => "likely",
            Self::Reduction(_) => "reduction",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Adaptive(AdaptiveStrategy::default())
    }
}

/// Most-likely strategy
///
/// Always guesses the letter contained in the most candidate words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikelyStrategy;

impl Strategy for LikelyStrategy {
    fn select_letter(&self, stats: &LetterStats, _ctx: &SelectionContext) -> Option<Letter> {
        selection::highest_letter(stats)
    }
}

/// Reduction strategy
///
/// Always guesses the letter whose count is nearest the reduction point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionStrategy;

impl Strategy for ReductionStrategy {
    fn select_letter(&self, stats: &LetterStats, ctx: &SelectionContext) -> Option<Letter> {
        selection::reduction_letter(stats, ctx.reduction_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Word};
    use crate::solver::CandidateSet;
    use std::collections::BTreeSet;

    fn setup_stats() -> (LetterStats, usize) {
        let words: Vec<Word> = ["cat", "bat"].iter().map(|w| Word::new(*w).unwrap()).collect();
        let set = CandidateSet::from_words(words);
        let stats =
            LetterStats::compute(Alphabet::LATIN, &BTreeSet::new(), &BTreeSet::new(), &set)
                .unwrap();
        (stats, set.len())
    }

    fn context(candidates: usize, wrong_guesses_remaining: u32) -> SelectionContext {
        SelectionContext {
            candidates,
            wrong_guesses_remaining,
            reduction_proportion: 0.62,
        }
    }

    #[test]
    fn likely_strategy_selects_highest() {
        let (stats, n) = setup_stats();
        let letter = LikelyStrategy.select_letter(&stats, &context(n, 5)).unwrap();
        assert_eq!(letter.as_char(), 'T');
    }

    #[test]
    fn reduction_strategy_selects_nearest_point() {
        let (stats, n) = setup_stats();
        let letter = ReductionStrategy.select_letter(&stats, &context(n, 0)).unwrap();
        assert_eq!(letter.as_char(), 'C');
    }

    #[test]
    fn adaptive_follows_budget() {
        let (stats, n) = setup_stats();
        let strategy = StrategyType::default();

        let relaxed = strategy.select_letter(&stats, &context(n, 1)).unwrap();
        assert_eq!(relaxed.as_char(), 'C');

        let tight = strategy.select_letter(&stats, &context(n, 0)).unwrap();
        assert_eq!(tight.as_char(), 'T');
    }

    #[test]
    fn mode_per_strategy() {
        let likely = StrategyType::from_name("likely");
        let reduction = StrategyType::from_name("reduction");
        let adaptive = StrategyType::default();

        assert_eq!(likely.mode(2, 5), LetterMode::Likelihood);
        assert_eq!(reduction.mode(4000, 0), LetterMode::Reduction);
        assert_eq!(adaptive.mode(2, 5), LetterMode::Reduction);
        assert_eq!(adaptive.mode(4000, 0), LetterMode::Likelihood);
    }

    #[test]
    fn from_name_round_trips() {
        for name in ["adaptive", "likely", "reduction"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name("unknown").name(), "adaptive");
    }
}
