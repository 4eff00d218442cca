//! Adaptive strategy
//!
//! Switches between the two letter selection rules depending on how many
//! wrong guesses the game can still absorb.

use super::selection::{self, guesses_if_halving_held};
use super::stats::LetterStats;
use super::strategy::{SelectionContext, Strategy};
use crate::core::Letter;

/// Dual-mode letter selection
///
/// If every guess halved the candidate set, `floor(log2 n)` wrong guesses
/// would be enough to isolate the secret. While that fits in the remaining
/// budget the strategy can afford misses and picks the reduction letter;
/// otherwise it plays safe and picks the most likely letter.
///
/// ```text
/// floor(log2 candidates) <= wrong guesses remaining  → Reduction
/// otherwise                                          → Likelihood
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptiveStrategy;

impl AdaptiveStrategy {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Which rule to use for the given position
    #[must_use]
    pub const fn mode(&self, candidates: usize, wrong_guesses_remaining: u32) -> LetterMode {
        if guesses_if_halving_held(candidates) <= wrong_guesses_remaining {
            LetterMode::Reduction
        } else {
            LetterMode::Likelihood
        }
    }
}

/// The rule the adaptive strategy picked for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMode {
    /// Count closest to the reduction point
    Reduction,
    /// Highest count
    Likelihood,
}

impl Strategy for AdaptiveStrategy {
    fn select_letter(&self, stats: &LetterStats, ctx: &SelectionContext) -> Option<Letter> {
        match self.mode(ctx.candidates, ctx.wrong_guesses_remaining) {
            LetterMode::Reduction => selection::reduction_letter(stats, ctx.reduction_point()),
            LetterMode::Likelihood => selection::highest_letter(stats),
        }
    }
}
