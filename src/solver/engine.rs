//! Main Hangman solver interface

use super::candidates::CandidateSet;
use super::config::StrategyConfig;
use super::stats::LetterStats;
use super::strategy::{SelectionContext, Strategy};
use crate::core::{GameView, Guess, Word};
use crate::error::SolverError;
use log::{debug, trace};

/// Main Hangman solver
///
/// Owns the candidate set for one game and asks its strategy for a letter
/// each turn. Create a new solver for every game.
pub struct Solver<S: Strategy> {
    strategy: S,
    config: StrategyConfig,
    candidates: CandidateSet,
    considered: usize,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver for a secret of `word_len` characters
    ///
    /// # Parameters
    /// - `strategy`: The letter selection strategy to use
    /// - `config`: Alphabet and tuning constants
    /// - `dictionary`: All words the secret may be
    /// - `word_len`: Length of the secret
    pub fn new(strategy: S, config: StrategyConfig, dictionary: &[Word], word_len: usize) -> Self {
        let candidates = CandidateSet::from_dictionary(dictionary, word_len, config.alphabet());
        debug!(
            "{} dictionary words of length {word_len} in {}",
            candidates.len(),
            config.alphabet()
        );
        Self {
            strategy,
            config,
            considered: candidates.len(),
            candidates,
        }
    }

    /// Narrow the candidates to those consistent with `game`
    ///
    /// Returns the number of candidates left. Words the game already
    /// rejected are dropped as well.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if nothing is left.
    pub fn narrow(&mut self, game: &impl GameView) -> Result<usize, SolverError> {
        let pattern = game.guessed_so_far();
        self.candidates = self
            .candidates
            .narrow(pattern, game.incorrectly_guessed_letters())
            .without_words(game.incorrectly_guessed_words());

        if self.candidates.is_empty() {
            return Err(SolverError::NoCandidates {
                pattern: pattern.to_string(),
            });
        }
        Ok(self.candidates.len())
    }

    /// Choose the next guess for `game`
    ///
    /// With fewer than `word_guess_threshold` candidates left, guesses the
    /// first of them as a whole word and forgets it. Otherwise asks the
    /// strategy for a letter.
    ///
    /// # Errors
    /// - `SolverError::NoCandidates` if no dictionary word fits the game
    /// - `SolverError::InvalidLetter` if the game reports a guessed letter
    ///   outside the alphabet
    /// - `SolverError::NoLetterAvailable` if every letter has been guessed
    pub fn next_guess(&mut self, game: &impl GameView) -> Result<Guess, SolverError> {
        let remaining = self.narrow(game)?;
        self.considered = remaining;
        debug!("{remaining} candidates for {}", game.guessed_so_far());

        if remaining < self.config.word_guess_threshold()
            && let Some((word, rest)) = self.candidates.without_first()
        {
            self.candidates = rest;
            return Ok(Guess::Word(word));
        }

        let stats = LetterStats::compute(
            self.config.alphabet(),
            game.correctly_guessed_letters(),
            game.incorrectly_guessed_letters(),
            &self.candidates,
        )?;
        trace!("letter stats: {stats}");

        let ctx = SelectionContext {
            candidates: remaining,
            wrong_guesses_remaining: game.wrong_guesses_remaining(),
            reduction_proportion: self.config.reduction_proportion(),
        };

        self.strategy
            .select_letter(&stats, &ctx)
            .map(Guess::Letter)
            .ok_or(SolverError::NoLetterAvailable(self.config.alphabet()))
    }

    /// Current candidates (read-only)
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of candidates the last guess was chosen from
    ///
    /// Before the first guess, the size of the initial set.
    pub const fn considered(&self) -> usize {
        self.considered
    }

    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
