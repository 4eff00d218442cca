//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_position, remaining_after};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_targets};
pub use play::{DEFAULT_MAX_WRONG_GUESSES, GameRecord, Player, TurnRecord, play_game};
pub use solve::{SolveConfig, SolveResult, solve_word};
