//! Candidate word set
//!
//! The dictionary words still consistent with everything the game has
//! revealed. A set is never edited in place: every narrowing step produces a
//! new set from the previous one, so it can only shrink over a game.

use crate::core::{Alphabet, Letter, LetterSet, RevealedPattern, Word};
use std::collections::BTreeSet;

/// Words still consistent with the revealed pattern and the wrong letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Dictionary words of length `len` made only of `alphabet` letters
    ///
    /// Dictionary order is preserved.
    #[must_use]
    pub fn from_dictionary(dictionary: &[Word], len: usize, alphabet: Alphabet) -> Self {
        let words = dictionary
            .iter()
            .filter(|word| word.len() == len && alphabet.covers(word.letters()))
            .cloned()
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Keep the words matching `pattern` that contain none of `incorrect`
    ///
    /// Characters in `incorrect` that are not letters cannot occur in a
    /// dictionary word and are ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Alphabet, RevealedPattern, Word};
    /// use hangman_solver::solver::CandidateSet;
    /// use std::collections::BTreeSet;
    ///
    /// let dictionary: Vec<Word> = ["factual", "natural", "capital"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let set = CandidateSet::from_dictionary(&dictionary, 7, Alphabet::LATIN);
    ///
    /// let pattern: RevealedPattern = "-A---A-".parse().unwrap();
    /// let narrowed = set.narrow(&pattern, &BTreeSet::from(['N', 'P']));
    /// assert_eq!(narrowed.len(), 1);
    /// assert_eq!(narrowed.iter().next().unwrap().text(), "FACTUAL");
    /// ```
    #[must_use]
    pub fn narrow(&self, pattern: &RevealedPattern, incorrect: &BTreeSet<char>) -> Self {
        let excluded: LetterSet = incorrect.iter().copied().filter_map(Letter::new).collect();

        let words = self
            .words
            .iter()
            .filter(|word| excluded.is_disjoint(word.letters()) && pattern.matches(word))
            .cloned()
            .collect();
        Self { words }
    }

    /// Drop words that were already guessed and rejected
    #[must_use]
    pub fn without_words(&self, rejected: &BTreeSet<String>) -> Self {
        if rejected.is_empty() {
            return self.clone();
        }
        let words = self
            .words
            .iter()
            .filter(|word| !rejected.contains(word.text()))
            .cloned()
            .collect();
        Self { words }
    }

    /// Split off the first word, returning it and the rest of the set
    #[must_use]
    pub fn without_first(&self) -> Option<(Word, Self)> {
        let (first, rest) = self.words.split_first()?;
        Some((first.clone(), Self::from_words(rest.to_vec())))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let text = text.to_ascii_uppercase();
        self.words.iter().any(|word| word.text() == text)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    #[test]
    fn from_dictionary_filters_length_and_alphabet() {
        let words = dictionary(&["cat", "bat", "zoo", "door", "ox"]);
        let set = CandidateSet::from_dictionary(&words, 3, Alphabet::LATIN);
        assert_eq!(texts(&set), ["CAT", "BAT", "ZOO"]);

        let small = Alphabet::new('A', 'T').unwrap();
        let set = CandidateSet::from_dictionary(&words, 3, small);
        assert_eq!(texts(&set), ["CAT", "BAT"]);
    }

    #[test]
    fn narrow_by_pattern_and_wrong_letters() {
        let words = dictionary(&["factual", "natural", "capital", "mammals"]);
        let set = CandidateSet::from_dictionary(&words, 7, Alphabet::LATIN);

        let pattern: RevealedPattern = "-A---A-".parse().unwrap();
        let narrowed = set.narrow(&pattern, &BTreeSet::new());
        assert_eq!(texts(&narrowed), ["FACTUAL", "NATURAL", "CAPITAL"]);

        let narrowed = narrowed.narrow(&pattern, &BTreeSet::from(['P']));
        assert_eq!(texts(&narrowed), ["FACTUAL", "NATURAL"]);
    }

    #[test]
    fn narrow_ignores_case_and_non_letters() {
        let words = dictionary(&["cat", "cot"]);
        let set = CandidateSet::from_dictionary(&words, 3, Alphabet::LATIN);
        let pattern = RevealedPattern::hidden(3);

        let narrowed = set.narrow(&pattern, &BTreeSet::from(['o', '7']));
        assert_eq!(texts(&narrowed), ["CAT"]);
    }

    #[test]
    fn narrow_to_empty() {
        let words = dictionary(&["cat"]);
        let set = CandidateSet::from_dictionary(&words, 3, Alphabet::LATIN);
        let pattern: RevealedPattern = "D--".parse().unwrap();
        assert!(set.narrow(&pattern, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn without_words_drops_rejected() {
        let words = dictionary(&["factual", "natural"]);
        let set = CandidateSet::from_words(words);
        let rest = set.without_words(&BTreeSet::from(["NATURAL".to_string()]));
        assert_eq!(texts(&rest), ["FACTUAL"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn without_first_splits() {
        let set = CandidateSet::from_words(dictionary(&["cat", "bat"]));
        let (first, rest) = set.without_first().unwrap();
        assert_eq!(first.text(), "CAT");
        assert_eq!(texts(&rest), ["BAT"]);
        assert!(CandidateSet::default().without_first().is_none());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let set = CandidateSet::from_words(dictionary(&["cat"]));
        assert!(set.contains("cat"));
        assert!(set.contains("CAT"));
        assert!(!set.contains("bat"));
    }
}
