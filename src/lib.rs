//! Hangman Solver
//!
//! A Hangman player that keeps the dictionary words still consistent with
//! the game and picks each letter from how many of those words contain it.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::commands::Player;
//! use hangman_solver::solver::{StrategyConfig, StrategyType};
//! use hangman_solver::wordlists::{WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let player = Player::new(StrategyType::default(), StrategyConfig::default(), &words);
//!
//! let record = player.play("factual", 5).unwrap();
//! assert!(record.won());
//! println!("{} turns, score {}", record.turns.len(), record.score);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guessing strategy
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
