//! Hangman guessing strategy
//!
//! Candidate narrowing, letter statistics and the rules that turn them into
//! the next guess.

pub mod adaptive;
mod candidates;
mod config;
mod engine;
pub mod selection;
mod stats;
pub mod strategy;

pub use adaptive::{AdaptiveStrategy, LetterMode};
pub use candidates::CandidateSet;
pub use config::{DEFAULT_REDUCTION_PROPORTION, DEFAULT_WORD_GUESS_THRESHOLD, StrategyConfig};
pub use engine::Solver;
pub use stats::LetterStats;
pub use strategy::{LikelyStrategy, ReductionStrategy, SelectionContext, Strategy, StrategyType};
