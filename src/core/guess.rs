//! A single move in a game

use super::game::{GuessOutcome, HangmanGame};
use super::letter::Letter;
use super::word::Word;
use std::fmt;

/// A guess a strategy makes: one letter or a whole word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    Letter(Letter),
    Word(Word),
}

impl Guess {
    /// Apply the guess to a game, returning what happened
    pub fn apply(&self, game: &mut HangmanGame) -> GuessOutcome {
        match self {
            Self::Letter(letter) => game.guess_letter(letter.as_char()),
            Self::Word(word) => game.guess_word(word.text()),
        }
    }

    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "letter {letter}"),
            Self::Word(word) => write!(f, "word {word}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_letter_and_word() {
        let mut game = HangmanGame::new("cat", 3).unwrap();

        let guess = Guess::Letter(Letter::new('a').unwrap());
        assert_eq!(guess.apply(&mut game), GuessOutcome::Revealed { count: 1 });
        assert!(!guess.is_word());

        let guess = Guess::Word(Word::new("bat").unwrap());
        assert_eq!(guess.apply(&mut game), GuessOutcome::Miss);
        assert!(guess.is_word());

        let guess = Guess::Word(Word::new("cat").unwrap());
        assert_eq!(guess.apply(&mut game), GuessOutcome::Solved);
    }

    #[test]
    fn display() {
        assert_eq!(Guess::Letter(Letter::new('e').unwrap()).to_string(), "letter E");
        assert_eq!(Guess::Word(Word::new("cat").unwrap()).to_string(), "word CAT");
    }
}
