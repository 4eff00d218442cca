//! Turn runner
//!
//! Plays a game to the end by repeatedly asking a solver for a guess and
//! applying it.

use crate::core::{
    GameStatus, GameView, Guess, GuessOutcome, HangmanGame, RevealedPattern, Word,
};
use crate::error::PlayError;
use crate::solver::{Solver, Strategy, StrategyConfig};
use log::debug;

/// Wrong guesses allowed when none is given
pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 5;

/// One turn of a played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Guess,
    pub outcome: GuessOutcome,
    /// Pattern after the guess was applied
    pub pattern: RevealedPattern,
    /// Candidates the guess was chosen from
    pub candidates_before: usize,
    /// Candidates left once the guess was applied and narrowed in
    pub candidates_after: usize,
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub turns: Vec<TurnRecord>,
    pub status: GameStatus,
    pub score: u32,
}

impl GameRecord {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.outcome == GuessOutcome::Miss)
            .count()
    }
}

/// Most turns a game can take: one per position plus one per wrong guess
#[must_use]
pub fn iteration_cap(game: &HangmanGame) -> usize {
    game.secret_len() + game.max_wrong_guesses() as usize
}

/// Play `game` to the end with `solver`
///
/// # Errors
///
/// Returns an error if:
/// - The solver cannot produce a guess (see [`SolverError`](crate::error::SolverError))
/// - The solver repeats a guess the game has already seen
/// - The game is still going after [`iteration_cap`] turns
pub fn play_game<S: Strategy>(
    game: &mut HangmanGame,
    solver: &mut Solver<S>,
) -> Result<GameRecord, PlayError> {
    let cap = iteration_cap(game);
    let mut turns: Vec<TurnRecord> = Vec::new();

    while game.status() == GameStatus::KeepGuessing {
        if turns.len() >= cap {
            return Err(PlayError::IterationCapExceeded { cap });
        }

        let guess = solver.next_guess(game)?;
        let candidates_before = solver.considered();

        let outcome = guess.apply(game);
        if outcome == GuessOutcome::AlreadyGuessed {
            return Err(PlayError::RepeatedGuess(guess));
        }
        debug!("turn {}: {guess} -> {outcome:?}; {game}", turns.len() + 1);

        let candidates_after = match outcome {
            GuessOutcome::Solved => 1,
            _ => solver
                .candidates()
                .narrow(game.guessed_so_far(), game.incorrectly_guessed_letters())
                .len(),
        };

        turns.push(TurnRecord {
            guess,
            outcome,
            pattern: game.guessed_so_far().clone(),
            candidates_before,
            candidates_after,
        });
    }

    Ok(GameRecord {
        secret: game.secret(),
        turns,
        status: game.status(),
        score: game.current_score(),
    })
}

/// Plays whole games for any secret from a shared dictionary
///
/// Builds a fresh solver per game, so one player can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct Player<'a, S> {
    strategy: S,
    config: StrategyConfig,
    dictionary: &'a [Word],
}

impl<'a, S: Strategy + Clone> Player<'a, S> {
    pub const fn new(strategy: S, config: StrategyConfig, dictionary: &'a [Word]) -> Self {
        Self {
            strategy,
            config,
            dictionary,
        }
    }

    /// A solver for a secret of `word_len` characters
    #[must_use]
    pub fn solver_for(&self, word_len: usize) -> Solver<S> {
        Solver::new(self.strategy.clone(), self.config, self.dictionary, word_len)
    }

    /// Play a full game against `secret`
    ///
    /// # Errors
    ///
    /// Returns `PlayError::Game` for an invalid secret or budget, otherwise
    /// see [`play_game`].
    pub fn play(&self, secret: &str, max_wrong_guesses: u32) -> Result<GameRecord, PlayError> {
        let mut game = HangmanGame::new(secret, max_wrong_guesses)?;
        let mut solver = self.solver_for(game.secret_len());
        play_game(&mut game, &mut solver)
    }

    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
