//! Letter selection rules
//!
//! Two ways to pick a letter from [`LetterStats`]:
//!
//! - [`highest_letter`] maximizes the chance the guess is right.
//! - [`reduction_letter`] aims for the letter whose count is closest to a
//!   fixed fraction of the candidates, which splits the set most usefully
//!   whether the guess hits or misses.
//!
//! Both scan the alphabet from its last letter towards its first; ties are
//! broken in favour of the letter seen first, i.e. the later one.

use super::stats::LetterStats;
use crate::core::Letter;

/// Letter contained in the most candidate words
///
/// Returns `None` if every letter is excluded.
///
/// # Examples
/// ```
/// use hangman_solver::core::{Alphabet, Word};
/// use hangman_solver::solver::{CandidateSet, LetterStats};
/// use hangman_solver::solver::selection::highest_letter;
/// use std::collections::BTreeSet;
///
/// let words = ["cat", "bat"].map(|w| Word::new(w).unwrap()).to_vec();
/// let stats = LetterStats::compute(
///     Alphabet::LATIN,
///     &BTreeSet::new(),
///     &BTreeSet::new(),
///     &CandidateSet::from_words(words),
/// )
/// .unwrap();
///
/// // A and T both appear in two words; T comes later in the alphabet
/// assert_eq!(highest_letter(&stats).unwrap().as_char(), 'T');
/// ```
#[must_use]
pub fn highest_letter(stats: &LetterStats) -> Option<Letter> {
    let mut best: Option<(Letter, usize)> = None;
    for (letter, count) in stats.available().rev() {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((letter, count));
        }
    }
    best.map(|(letter, _)| letter)
}

/// Letter whose count is closest to `reduction_point`
///
/// Equal distances go to the higher count.
#[must_use]
pub fn reduction_letter(stats: &LetterStats, reduction_point: f64) -> Option<Letter> {
    let distance = |count: usize| (reduction_point - count as f64).abs();

    let mut best: Option<(Letter, usize)> = None;
    for (letter, count) in stats.available().rev() {
        let better = best.is_none_or(|(_, best_count)| {
            match distance(count).total_cmp(&distance(best_count)) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Equal => count > best_count,
                std::cmp::Ordering::Greater => false,
            }
        });
        if better {
            best = Some((letter, count));
        }
    }
    best.map(|(letter, _)| letter)
}

/// Target count for [`reduction_letter`] given `candidates` words
#[must_use]
pub fn reduction_point(candidates: usize, proportion: f64) -> f64 {
    proportion * candidates as f64
}

/// Wrong guesses needed if every guess halved the candidates: `floor(log2 n)`
///
/// Zero for an empty set.
#[must_use]
pub const fn guesses_if_halving_held(candidates: usize) -> u32 {
    match candidates.checked_ilog2() {
        Some(guesses) => guesses,
        None => 0,
    }
}
