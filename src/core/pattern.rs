//! Revealed pattern of the secret word
//!
//! Each position of the secret is either revealed (the letter is known) or a
//! mystery. Patterns display mysteries as `-`:
//!
//! ```text
//! FACTUAL after guessing A  →  -A---A-
//! ```

use super::word::Word;
use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Placeholder shown for positions that have not been revealed
pub const MYSTERY_LETTER: char = '-';

/// The letters of the secret word revealed so far
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealedPattern {
    slots: Vec<Option<char>>,
}

impl RevealedPattern {
    /// Create a pattern with every position hidden
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Create a pattern from explicit slots; `None` marks a mystery
    #[must_use]
    pub fn from_slots(slots: Vec<Option<char>>) -> Self {
        Self { slots }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The revealed character at `position`, if any
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<char> {
        self.slots[position]
    }

    /// Reveal `ch` at `position`
    pub(crate) fn reveal(&mut self, position: usize, ch: char) {
        self.slots[position] = Some(ch);
    }

    /// Revealed positions and their characters
    pub fn revealed(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|ch| (i, ch)))
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn mystery_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Whether every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check whether a word agrees with every revealed position
    ///
    /// Words of a different length never match.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{RevealedPattern, Word};
    ///
    /// let pattern: RevealedPattern = "-A---A-".parse().unwrap();
    /// assert!(pattern.matches(&Word::new("factual").unwrap()));
    /// assert!(!pattern.matches(&Word::new("mammals").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .slots
                .iter()
                .zip(word.bytes())
                .all(|(&slot, &byte)| slot.is_none_or(|ch| ch == byte as char))
    }
}

impl FromStr for RevealedPattern {
    type Err = PatternError;

    /// Parse a pattern like `-A---A-` or `_a___a_`
    ///
    /// Letters are upper-cased; `-` and `_` are mysteries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        s.chars()
            .map(|ch| match ch {
                '-' | '_' => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase())),
                c => Err(PatternError::InvalidCharacter(c)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_slots)
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(MYSTERY_LETTER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hidden_pattern_matches_any_word_of_same_length() {
        let pattern = RevealedPattern::hidden(3);
        assert_eq!(pattern.to_string(), "---");
        assert_eq!(pattern.mystery_count(), 3);
        assert!(pattern.matches(&word("cat")));
        assert!(pattern.matches(&word("dog")));
        assert!(!pattern.matches(&word("door")));
    }

    #[test]
    fn revealed_positions_must_agree() {
        let pattern: RevealedPattern = "-A---A-".parse().unwrap();
        assert!(pattern.matches(&word("FACTUAL")));
        assert!(pattern.matches(&word("NATURAL")));
        assert!(!pattern.matches(&word("MAMMALS")));
        assert_eq!(pattern.revealed().collect::<Vec<_>>(), [(1, 'A'), (5, 'A')]);
    }

    #[test]
    fn hidden_positions_accept_revealed_letters_elsewhere() {
        // Narrowing by pattern alone does not forbid an A in a mystery slot;
        // that is left to the caller.
        let pattern: RevealedPattern = "-A-".parse().unwrap();
        assert!(pattern.matches(&word("AAA")));
    }

    #[test]
    fn parse_accepts_underscores_and_lowercase() {
        let a: RevealedPattern = "_a___a_".parse().unwrap();
        let b: RevealedPattern = "-A---A-".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!("".parse::<RevealedPattern>(), Err(PatternError::Empty));
        assert_eq!(
            "-A?".parse::<RevealedPattern>(),
            Err(PatternError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn reveal_and_complete() {
        let mut pattern = RevealedPattern::hidden(2);
        assert!(!pattern.is_complete());
        pattern.reveal(0, 'O');
        assert_eq!(pattern.to_string(), "O-");
        pattern.reveal(1, 'X');
        assert!(pattern.is_complete());
        assert_eq!(pattern.slot(1), Some('X'));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let pattern: RevealedPattern = "F-CT--L".parse().unwrap();
        assert_eq!(pattern.to_string(), "F-CT--L");
    }
}
