//! Strategy tuning constants

use crate::core::Alphabet;
use crate::error::ConfigError;

/// Target fraction of the candidate set a reduction letter's count aims for
pub const DEFAULT_REDUCTION_PROPORTION: f64 = 0.62;

/// Below this many candidates the solver guesses whole words
pub const DEFAULT_WORD_GUESS_THRESHOLD: usize = 3;

/// Tuning parameters shared by every strategy
///
/// Each solver owns its own copy.
///
/// # Examples
/// ```
/// use hangman_solver::solver::StrategyConfig;
///
/// let config = StrategyConfig::default()
///     .with_reduction_proportion(0.5)
///     .and_then(|c| c.with_word_guess_threshold(2))
///     .unwrap();
/// assert_eq!(config.word_guess_threshold(), 2);
///
/// assert!(StrategyConfig::default().with_reduction_proportion(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyConfig {
    alphabet: Alphabet,
    reduction_proportion: f64,
    word_guess_threshold: usize,
}

impl StrategyConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the proportion is outside `(0, 1]` or the
    /// threshold is zero.
    pub fn new(
        alphabet: Alphabet,
        reduction_proportion: f64,
        word_guess_threshold: usize,
    ) -> Result<Self, ConfigError> {
        Self {
            alphabet,
            ..Self::default()
        }
        .with_reduction_proportion(reduction_proportion)?
        .with_word_guess_threshold(word_guess_threshold)
    }

    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// # Errors
    /// Returns `ConfigError::ReductionProportion` unless `0 < proportion <= 1`.
    pub fn with_reduction_proportion(mut self, proportion: f64) -> Result<Self, ConfigError> {
        if !(proportion > 0.0 && proportion <= 1.0) {
            return Err(ConfigError::ReductionProportion(proportion));
        }
        self.reduction_proportion = proportion;
        Ok(self)
    }

    /// # Errors
    /// Returns `ConfigError::ZeroWordGuessThreshold` for a threshold of zero.
    pub const fn with_word_guess_threshold(
        mut self,
        threshold: usize,
    ) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroWordGuessThreshold);
        }
        self.word_guess_threshold = threshold;
        Ok(self)
    }

    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[must_use]
    pub const fn reduction_proportion(&self) -> f64 {
        self.reduction_proportion
    }

    #[must_use]
    pub const fn word_guess_threshold(&self) -> usize {
        self.word_guess_threshold
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::LATIN,
            reduction_proportion: DEFAULT_REDUCTION_PROPORTION,
            word_guess_threshold: DEFAULT_WORD_GUESS_THRESHOLD,
        }
    }
}
