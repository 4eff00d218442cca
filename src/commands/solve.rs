//! Word solving command
//!
//! Plays one game against a given secret and returns every turn.

use super::play::{DEFAULT_MAX_WRONG_GUESSES, Player, TurnRecord};
use crate::core::GameStatus;
use crate::error::PlayError;
use crate::solver::Strategy;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_wrong_guesses: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub status: GameStatus,
    pub score: u32,
    pub max_wrong_guesses: u32,
    pub turns: Vec<TurnRecord>,
}

/// Solve a specific word with the given player
///
/// # Errors
///
/// Returns an error if:
/// - The target is empty or the wrong-guess budget is zero
/// - No dictionary word fits the target (it is not in the word list)
/// - The strategy repeats a guess or the game overruns its turn cap
pub fn solve_word<S: Strategy + Clone>(
    config: SolveConfig,
    player: &Player<'_, S>,
) -> Result<SolveResult, PlayError> {
    let record = player.play(&config.target, config.max_wrong_guesses)?;

    Ok(SolveResult {
        target: record.secret,
        success: record.status == GameStatus::Won,
        status: record.status,
        score: record.score,
        max_wrong_guesses: config.max_wrong_guesses,
        turns: record.turns,
    })
}
