//! Hangman game state
//!
//! [`HangmanGame`] tracks the secret word, guessed letters, rejected word
//! guesses and the wrong-guess budget. Strategies only read a game through
//! the [`GameView`] trait.

use super::pattern::RevealedPattern;
use crate::error::GameError;
use std::collections::BTreeSet;
use std::fmt;

/// Score of a lost game
pub const LOSS_SCORE: u32 = 25;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    KeepGuessing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeepGuessing => "KEEP_GUESSING",
            Self::Won => "GAME_WON",
            Self::Lost => "GAME_LOST",
        };
        f.write_str(name)
    }
}

/// What happened when a guess was applied to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The letter occurs `count` times in the secret
    Revealed { count: usize },
    /// The guessed word is the secret
    Solved,
    /// Wrong letter or wrong word; one wrong guess used
    Miss,
    /// The letter or word had been guessed before; nothing changed
    AlreadyGuessed,
    /// The game had already ended; nothing changed
    GameOver,
}

/// Read access to a game, as consumed by a guessing strategy
pub trait GameView {
    /// The secret with unrevealed positions hidden
    fn guessed_so_far(&self) -> &RevealedPattern;

    /// Upper-case letters guessed that occur in the secret
    fn correctly_guessed_letters(&self) -> &BTreeSet<char>;

    /// Upper-case letters guessed that do not occur in the secret
    fn incorrectly_guessed_letters(&self) -> &BTreeSet<char>;

    /// Upper-case word guesses that were not the secret
    fn incorrectly_guessed_words(&self) -> &BTreeSet<String>;

    /// Wrong guesses (letter or word) still allowed before the game is lost
    fn wrong_guesses_remaining(&self) -> u32;
}

/// A game of Hangman
///
/// Text given to the game (secret, letters, words) is normalized by
/// upper-casing ASCII letters; nothing else is normalized. Characters of the
/// secret that no letter guess can name stay hidden until the whole word is
/// guessed.
///
/// # Examples
/// ```
/// use hangman_solver::core::{GameStatus, HangmanGame};
///
/// let mut game = HangmanGame::new("factual", 4).unwrap();
/// game.guess_letter('a');
/// assert_eq!(game.to_string(), "-A---A-; score=1; status=KEEP_GUESSING");
///
/// game.guess_word("factual");
/// assert_eq!(game.status(), GameStatus::Won);
/// assert_eq!(game.current_score(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanGame {
    secret: Vec<char>,
    max_wrong_guesses: u32,
    guessed_so_far: RevealedPattern,
    correct_letters: BTreeSet<char>,
    incorrect_letters: BTreeSet<char>,
    incorrect_words: BTreeSet<String>,
}

impl HangmanGame {
    /// Start a game for `secret` allowing `max_wrong_guesses` wrong guesses
    ///
    /// # Errors
    /// Returns `GameError` if the secret is empty or no wrong guess is allowed.
    pub fn new(secret: &str, max_wrong_guesses: u32) -> Result<Self, GameError> {
        let secret: Vec<char> = secret
            .trim()
            .chars()
            .map(|ch| ch.to_ascii_uppercase())
            .collect();

        if secret.is_empty() {
            return Err(GameError::EmptySecret);
        }
        if max_wrong_guesses == 0 {
            return Err(GameError::NoWrongGuessesAllowed);
        }

        Ok(Self {
            guessed_so_far: RevealedPattern::hidden(secret.len()),
            secret,
            max_wrong_guesses,
            correct_letters: BTreeSet::new(),
            incorrect_letters: BTreeSet::new(),
            incorrect_words: BTreeSet::new(),
        })
    }

    /// The secret word, upper-cased
    #[must_use]
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    #[must_use]
    pub fn wrong_guesses_made(&self) -> u32 {
        (self.incorrect_letters.len() + self.incorrect_words.len()) as u32
    }

    /// Letter guesses made so far, right or wrong
    #[must_use]
    pub fn letter_guesses_made(&self) -> u32 {
        (self.correct_letters.len() + self.incorrect_letters.len()) as u32
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.guessed_so_far.is_complete() {
            GameStatus::Won
        } else if self.wrong_guesses_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::KeepGuessing
        }
    }

    /// Letter guesses plus wrong word guesses, or [`LOSS_SCORE`] once lost
    ///
    /// A correct word guess costs nothing.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        if self.status() == GameStatus::Lost {
            LOSS_SCORE
        } else {
            self.letter_guesses_made() + self.incorrect_words.len() as u32
        }
    }

    /// Guess a single letter
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.status() != GameStatus::KeepGuessing {
            return GuessOutcome::GameOver;
        }

        let letter = letter.to_ascii_uppercase();
        if self.correct_letters.contains(&letter) || self.incorrect_letters.contains(&letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        let positions: Vec<usize> = self
            .secret
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| ch == letter)
            .map(|(i, _)| i)
            .collect();

        if positions.is_empty() {
            self.incorrect_letters.insert(letter);
            return GuessOutcome::Miss;
        }

        self.correct_letters.insert(letter);
        for &position in &positions {
            self.guessed_so_far.reveal(position, letter);
        }
        GuessOutcome::Revealed {
            count: positions.len(),
        }
    }

    /// Guess the whole word
    pub fn guess_word(&mut self, word: &str) -> GuessOutcome {
        if self.status() != GameStatus::KeepGuessing {
            return GuessOutcome::GameOver;
        }

        let word = word.trim().to_ascii_uppercase();
        if self.incorrect_words.contains(&word) {
            return GuessOutcome::AlreadyGuessed;
        }

        if word.chars().eq(self.secret.iter().copied()) {
            for (position, &ch) in self.secret.iter().enumerate() {
                self.guessed_so_far.reveal(position, ch);
            }
            GuessOutcome::Solved
        } else {
            self.incorrect_words.insert(word);
            GuessOutcome::Miss
        }
    }

    /// Copy the strategy-visible state into an owned snapshot
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            guessed_so_far: self.guessed_so_far.clone(),
            correct_letters: self.correct_letters.clone(),
            incorrect_letters: self.incorrect_letters.clone(),
            incorrect_words: self.incorrect_words.clone(),
            wrong_guesses_remaining: self.wrong_guesses_remaining(),
        }
    }
}

impl GameView for HangmanGame {
    fn guessed_so_far(&self) -> &RevealedPattern {
        &self.guessed_so_far
    }

    fn correctly_guessed_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    fn incorrectly_guessed_letters(&self) -> &BTreeSet<char> {
        &self.incorrect_letters
    }

    fn incorrectly_guessed_words(&self) -> &BTreeSet<String> {
        &self.incorrect_words
    }

    fn wrong_guesses_remaining(&self) -> u32 {
        self.max_wrong_guesses
            .saturating_sub(self.wrong_guesses_made())
    }
}

impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; score={}; status={}",
            self.guessed_so_far,
            self.current_score(),
            self.status()
        )
    }
}

/// An owned, game-independent view of a position
///
/// Lets a strategy be asked about a position that was typed in rather than
/// played, e.g. by the `analyze` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    guessed_so_far: RevealedPattern,
    correct_letters: BTreeSet<char>,
    incorrect_letters: BTreeSet<char>,
    incorrect_words: BTreeSet<String>,
    wrong_guesses_remaining: u32,
}

impl GameSnapshot {
    /// Build a snapshot from a pattern and the wrong letters
    ///
    /// The correctly guessed letters are the ones revealed in the pattern.
    pub fn new(
        guessed_so_far: RevealedPattern,
        incorrect_letters: impl IntoIterator<Item = char>,
        wrong_guesses_remaining: u32,
    ) -> Self {
        let correct_letters = guessed_so_far.revealed().map(|(_, ch)| ch).collect();
        let incorrect_letters = incorrect_letters
            .into_iter()
            .map(|ch| ch.to_ascii_uppercase())
            .collect();

        Self {
            guessed_so_far,
            correct_letters,
            incorrect_letters,
            incorrect_words: BTreeSet::new(),
            wrong_guesses_remaining,
        }
    }

    /// Record word guesses that were already rejected
    #[must_use]
    pub fn with_incorrect_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.incorrect_words
            .extend(words.into_iter().map(|w| w.as_ref().to_ascii_uppercase()));
        self
    }
}

impl GameView for GameSnapshot {
    fn guessed_so_far(&self) -> &RevealedPattern {
        &self.guessed_so_far
    }

    fn correctly_guessed_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    fn incorrectly_guessed_letters(&self) -> &BTreeSet<char> {
        &self.incorrect_letters
    }

    fn incorrectly_guessed_words(&self) -> &BTreeSet<String> {
        &self.incorrect_words
    }

    fn wrong_guesses_remaining(&self) -> u32 {
        self.wrong_guesses_remaining
    }
}
