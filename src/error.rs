//! Error types
//!
//! Every failure is terminal for the game it happens in. Nothing in the crate
//! retries; errors are propagated to the caller.

use crate::core::{Alphabet, Guess};
use thiserror::Error;

/// Errors raised by the guessing strategy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Narrowing left no dictionary word consistent with the game.
    ///
    /// Happens when the secret word is absent from the dictionary or contains
    /// characters outside the recognized alphabet.
    #[error("no candidate word matches pattern {pattern}")]
    NoCandidates { pattern: String },

    /// A guessed letter handed to the statistics is not part of the alphabet.
    #[error("expected a letter in {alphabet} but got {letter:?}")]
    InvalidLetter { letter: char, alphabet: Alphabet },

    /// Every letter of the alphabet has already been guessed.
    #[error("every letter in {0} has already been guessed")]
    NoLetterAvailable(Alphabet),
}

/// Errors raised while validating a [`StrategyConfig`](crate::solver::StrategyConfig)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("alphabet bound {0:?} is not an ASCII letter")]
    InvalidAlphabetBound(char),

    #[error("alphabet starts at {first} but ends at {last}")]
    ReversedAlphabet { first: char, last: char },

    #[error("reduction proportion must be in (0, 1], got {0}")]
    ReductionProportion(f64),

    #[error("word guess threshold must be at least 1")]
    ZeroWordGuessThreshold,
}

/// Errors raised when building a dictionary [`Word`](crate::core::Word)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,

    #[error("word {0:?} contains characters other than ASCII letters")]
    InvalidCharacters(String),
}

/// Errors raised when parsing a [`RevealedPattern`](crate::core::RevealedPattern)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern contains {0:?}; use letters, '-' or '_'")]
    InvalidCharacter(char),
}

/// Errors raised when creating a [`HangmanGame`](crate::core::HangmanGame)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("secret word is empty")]
    EmptySecret,

    #[error("a game needs at least one allowed wrong guess")]
    NoWrongGuessesAllowed,
}

/// Errors raised by the turn runner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("strategy failed")]
    Solver(#[from] SolverError),

    /// The loop ran longer than secret length plus allowed wrong guesses.
    #[error("game did not finish within {cap} turns")]
    IterationCapExceeded { cap: usize },

    /// The strategy repeated a guess the game had already seen.
    #[error("strategy repeated the guess {0}")]
    RepeatedGuess(Guess),
}

/// Errors raised by the `analyze` command
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    #[error("invalid pattern")]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}
