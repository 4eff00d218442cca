//! Dictionary word representation
//!
//! A Word stores an upper-case dictionary word along with the set of letters it contains.

use super::letter::{Letter, LetterSet};
use crate::error::WordError;
use std::fmt;

/// An upper-case dictionary word with letter membership tracking
///
/// The letter set makes "does this word contain X" a single mask test, which
/// is what both narrowing and the letter statistics ask of every candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("factual").unwrap();
    /// assert_eq!(word.text(), "FACTUAL");
    ///
    /// assert!(Word::new("can't").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters = text.bytes().filter_map(Letter::from_ascii).collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as upper-case ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.bytes()[position] as char
    }

    /// Check if the word contains a letter at least once
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("FACTUAL").unwrap();
        assert_eq!(word.text(), "FACTUAL");
        assert_eq!(word.bytes(), b"FACTUAL");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("natural").unwrap();
        assert_eq!(word.text(), "NATURAL");

        let word2 = Word::new("NaTuRaL").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert!(matches!(
            Word::new("don't"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("co-op").is_err());
        assert!(Word::new("abc1").is_err());
        assert!(Word::new("café").is_err());
        assert!(Word::new("two words").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.char_at(0), 'C');
        assert_eq!(word.char_at(1), 'A');
        assert_eq!(word.char_at(2), 'T');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("factual").unwrap();
        assert!(word.has_letter(letter('f')));
        assert!(word.has_letter(letter('A')));
        assert!(word.has_letter(letter('l')));
        assert!(!word.has_letter(letter('n')));
        assert!(!word.has_letter(letter('z')));
    }

    #[test]
    fn word_letters_counts_duplicates_once() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.letters().len(), 3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("natural").unwrap();
        assert_eq!(format!("{word}"), "NATURAL");
    }
}
