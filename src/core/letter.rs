//! Letters and alphabets
//!
//! A [`Letter`] is an upper-case ASCII letter. An [`Alphabet`] is the
//! contiguous range of letters a strategy recognizes, `A..=Z` by default.
//! A [`LetterSet`] is a bitmask over `A..=Z`, used to record which letters a
//! word contains.

use crate::error::ConfigError;
use std::fmt;

/// An upper-case ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Normalize a character to an upper-case letter
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('7').is_none());
    /// assert!(Letter::new('é').is_none());
    /// ```
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_ascii)
    }

    /// Normalize an ASCII byte to an upper-case letter
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        let upper = byte.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the Latin alphabet (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A contiguous range of letters recognized by a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    first: Letter,
    last: Letter,
}

impl Alphabet {
    /// The 26 letters `A..=Z`
    pub const LATIN: Self = Self {
        first: Letter(b'A'),
        last: Letter(b'Z'),
    };

    /// Create an alphabet spanning `first..=last`
    ///
    /// # Errors
    /// Returns `ConfigError` if either bound is not an ASCII letter or if the
    /// bounds are reversed.
    pub fn new(first: char, last: char) -> Result<Self, ConfigError> {
        let lo = Letter::new(first).ok_or(ConfigError::InvalidAlphabetBound(first))?;
        let hi = Letter::new(last).ok_or(ConfigError::InvalidAlphabetBound(last))?;
        if lo > hi {
            return Err(ConfigError::ReversedAlphabet {
                first: lo.as_char(),
                last: hi.as_char(),
            });
        }
        Ok(Self {
            first: lo,
            last: hi,
        })
    }

    #[must_use]
    pub const fn first(self) -> Letter {
        self.first
    }

    #[must_use]
    pub const fn last(self) -> Letter {
        self.last
    }

    #[must_use]
    pub const fn len(self) -> usize {
        (self.last.0 - self.first.0) as usize + 1
    }

    /// Always false: an alphabet holds at least one letter
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(self, letter: Letter) -> bool {
        (self.first..=self.last).contains(&letter)
    }

    /// Validate a character against the alphabet, normalizing its case
    #[must_use]
    pub fn letter(self, ch: char) -> Option<Letter> {
        Letter::new(ch).filter(|&letter| self.contains(letter))
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl DoubleEndedIterator<Item = Letter> + Clone {
        (self.first.0..=self.last.0).map(Letter)
    }

    /// Whether every letter of `set` is part of this alphabet
    #[must_use]
    pub fn covers(self, set: LetterSet) -> bool {
        set.iter().all(|letter| self.contains(letter))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LATIN
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.first, self.last)
    }
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1 << letter.index();
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Alphabet::LATIN
            .letters()
            .filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
        assert_eq!(Letter::from_ascii(b'm').unwrap().as_byte(), b'M');
    }

    #[test]
    fn letter_rejects_non_letters() {
        for ch in ['0', ' ', '\'', '-', 'ß', 'Ω'] {
            assert!(Letter::new(ch).is_none(), "{ch:?} should be rejected");
        }
    }

    #[test]
    fn letter_index() {
        assert_eq!(Letter::new('A').unwrap().index(), 0);
        assert_eq!(Letter::new('z').unwrap().index(), 25);
    }

    #[test]
    fn latin_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.letters().next().unwrap().as_char(), 'A');
        assert_eq!(alphabet.letters().next_back().unwrap().as_char(), 'Z');
        assert_eq!(alphabet.to_string(), "[A-Z]");
    }

    #[test]
    fn custom_alphabet_bounds() {
        let alphabet = Alphabet::new('c', 'f').unwrap();
        assert_eq!(alphabet.len(), 4);
        assert!(alphabet.letter('d').is_some());
        assert!(alphabet.letter('a').is_none());
        assert!(alphabet.letter('g').is_none());
    }

    #[test]
    fn alphabet_rejects_bad_bounds() {
        assert_eq!(
            Alphabet::new('1', 'Z'),
            Err(ConfigError::InvalidAlphabetBound('1'))
        );
        assert_eq!(
            Alphabet::new('Z', 'A'),
            Err(ConfigError::ReversedAlphabet {
                first: 'Z',
                last: 'A'
            })
        );
    }

    #[test]
    fn letter_set_membership() {
        let set: LetterSet = "FACTUAL".bytes().filter_map(Letter::from_ascii).collect();
        assert_eq!(set.len(), 6);
        assert!(set.contains(Letter::new('A').unwrap()));
        assert!(!set.contains(Letter::new('N').unwrap()));

        let letters: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(letters, "ACFLTU");
    }

    #[test]
    fn letter_set_disjoint() {
        let cat: LetterSet = "CAT".bytes().filter_map(Letter::from_ascii).collect();
        let dog: LetterSet = "DOG".bytes().filter_map(Letter::from_ascii).collect();
        let act: LetterSet = "ACT".bytes().filter_map(Letter::from_ascii).collect();
        assert!(cat.is_disjoint(dog));
        assert!(!cat.is_disjoint(act));
    }

    #[test]
    fn alphabet_covers() {
        let small = Alphabet::new('A', 'E').unwrap();
        let bead: LetterSet = "BEAD".bytes().filter_map(Letter::from_ascii).collect();
        let bear: LetterSet = "BEAR".bytes().filter_map(Letter::from_ascii).collect();
        assert!(small.covers(bead));
        assert!(!small.covers(bear));
    }
}
