//! Per-letter statistics over the candidate set
//!
//! For each letter of the alphabet, the number of candidate words containing
//! it at least once. Letters already guessed are excluded and never counted.

use super::candidates::CandidateSet;
use crate::core::{Alphabet, Letter};
use crate::error::SolverError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Letter → number of candidate words containing it
///
/// Iteration is in alphabetical order. Excluded letters hold `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    alphabet: Alphabet,
    counts: BTreeMap<Letter, Option<usize>>,
}

impl LetterStats {
    /// Start every letter at zero and exclude the guessed ones
    ///
    /// # Errors
    /// Returns `SolverError::InvalidLetter` if a guessed letter is not part
    /// of the alphabet.
    pub fn new(
        alphabet: Alphabet,
        correct: &BTreeSet<char>,
        incorrect: &BTreeSet<char>,
    ) -> Result<Self, SolverError> {
        let mut counts: BTreeMap<Letter, Option<usize>> =
            alphabet.letters().map(|letter| (letter, Some(0))).collect();

        for &ch in correct.iter().chain(incorrect) {
            let letter = alphabet
                .letter(ch)
                .ok_or(SolverError::InvalidLetter { letter: ch, alphabet })?;
            counts.insert(letter, None);
        }

        Ok(Self { alphabet, counts })
    }

    /// Count, for every non-excluded letter, the candidates containing it
    ///
    /// Counts are overwritten, so calling this twice with the same set gives
    /// the same result.
    pub fn count_words(&mut self, candidates: &CandidateSet) {
        for count in self.counts.values_mut().flatten() {
            *count = 0;
        }

        for word in candidates {
            for letter in word.letters().iter() {
                if let Some(Some(count)) = self.counts.get_mut(&letter) {
                    *count += 1;
                }
            }
        }
    }

    /// Build and fill statistics in one step
    ///
    /// # Errors
    /// See [`LetterStats::new`].
    pub fn compute(
        alphabet: Alphabet,
        correct: &BTreeSet<char>,
        incorrect: &BTreeSet<char>,
        candidates: &CandidateSet,
    ) -> Result<Self, SolverError> {
        let mut stats = Self::new(alphabet, correct, incorrect)?;
        stats.count_words(candidates);
        Ok(stats)
    }

    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Count for `letter`, or `None` if it is excluded or outside the alphabet
    #[must_use]
    pub fn count(&self, letter: Letter) -> Option<usize> {
        self.counts.get(&letter).copied().flatten()
    }

    #[must_use]
    pub fn is_excluded(&self, letter: Letter) -> bool {
        matches!(self.counts.get(&letter), Some(None))
    }

    /// All letters with their counts, excluded ones as `None`
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Letter, Option<usize>)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Letters that may still be guessed, with their counts
    pub fn available(&self) -> impl DoubleEndedIterator<Item = (Letter, usize)> + '_ {
        self.counts
            .iter()
            .filter_map(|(&letter, &count)| count.map(|count| (letter, count)))
    }
}

impl fmt::Display for LetterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match count {
                Some(count) => write!(f, "{letter}:{count}")?,
                None => write!(f, "{letter}:-1")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn candidates(words: &[&str]) -> CandidateSet {
        CandidateSet::from_words(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn counts_words_not_occurrences() {
        let stats = LetterStats::compute(
            Alphabet::LATIN,
            &BTreeSet::new(),
            &BTreeSet::new(),
            &candidates(&["banana", "bandit"]),
        )
        .unwrap();

        assert_eq!(stats.count(letter('A')), Some(2));
        assert_eq!(stats.count(letter('N')), Some(2));
        assert_eq!(stats.count(letter('D')), Some(1));
        assert_eq!(stats.count(letter('Z')), Some(0));
    }

    #[test]
    fn guessed_letters_are_excluded() {
        let stats = LetterStats::compute(
            Alphabet::LATIN,
            &BTreeSet::from(['A']),
            &BTreeSet::from(['e']),
            &candidates(&["cat", "bat"]),
        )
        .unwrap();

        assert!(stats.is_excluded(letter('A')));
        assert!(stats.is_excluded(letter('E')));
        assert_eq!(stats.count(letter('A')), None);
        assert!(stats.available().all(|(l, _)| l != letter('A') && l != letter('E')));
        assert_eq!(stats.available().count(), 24);
    }

    #[test]
    fn letter_outside_alphabet_fails() {
        let alphabet = Alphabet::new('A', 'M').unwrap();
        let err = LetterStats::new(alphabet, &BTreeSet::from(['Q']), &BTreeSet::new()).unwrap_err();
        assert_eq!(err, SolverError::InvalidLetter { letter: 'Q', alphabet });

        let err = LetterStats::new(Alphabet::LATIN, &BTreeSet::new(), &BTreeSet::from(['3']));
        assert!(err.is_err());
    }

    #[test]
    fn count_words_is_idempotent() {
        let set = candidates(&["cat", "bat", "cot"]);
        let mut stats =
            LetterStats::new(Alphabet::LATIN, &BTreeSet::new(), &BTreeSet::new()).unwrap();
        stats.count_words(&set);
        let first = stats.clone();
        stats.count_words(&set);
        assert_eq!(stats, first);
    }

    #[test]
    fn counts_never_exceed_candidates() {
        let set = candidates(&["cat", "bat", "cot", "dog"]);
        let stats = LetterStats::compute(Alphabet::LATIN, &BTreeSet::new(), &BTreeSet::new(), &set)
            .unwrap();
        assert!(stats.available().all(|(_, count)| count <= set.len()));
    }

    #[test]
    fn display_marks_excluded() {
        let alphabet = Alphabet::new('A', 'D').unwrap();
        let stats = LetterStats::compute(
            alphabet,
            &BTreeSet::new(),
            &BTreeSet::from(['B']),
            &candidates(&["cad", "dad"]),
        )
        .unwrap();
        assert_eq!(stats.to_string(), "A:2 B:-1 C:1 D:2");
    }

    #[test]
    fn iteration_is_alphabetical() {
        let stats = LetterStats::new(Alphabet::LATIN, &BTreeSet::new(), &BTreeSet::new()).unwrap();
        let order: String = stats.iter().map(|(l, _)| l.as_char()).collect();
        assert_eq!(order, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
