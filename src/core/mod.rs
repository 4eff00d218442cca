//! Core domain types for Hangman
//!
//! Letters, dictionary words, revealed patterns and the game itself. Nothing
//! here knows about guessing strategies.

mod game;
mod guess;
mod letter;
mod pattern;
mod word;

pub use game::{GameSnapshot, GameStatus, GameView, GuessOutcome, HangmanGame, LOSS_SCORE};
pub use guess::Guess;
pub use letter::{Alphabet, Letter, LetterSet};
pub use pattern::{MYSTERY_LETTER, RevealedPattern};
pub use word::Word;
