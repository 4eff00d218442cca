//! Benchmark command
//!
//! Plays the strategy against many dictionary words and reports score
//! statistics. Games are independent and run in parallel.

use super::play::{DEFAULT_MAX_WRONG_GUESSES, GameRecord, Player};
use crate::core::{GameStatus, Word};
use crate::error::PlayError;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which dictionary words to play and how
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Play every `step`-th word
    pub step: usize,
    /// Play this many randomly chosen words instead of stepping
    pub sample: Option<usize>,
    /// Stop after this many words
    pub limit: Option<usize>,
    pub max_wrong_guesses: u32,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            step: 1,
            sample: None,
            limit: None,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// Games the strategy could not finish (e.g. no candidate left)
    pub failed: usize,
    pub total_score: u64,
    /// Mean score over finished games
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub distribution: FxHashMap<u32, usize>,
    /// Secret and error message of every failed game
    pub failures: Vec<(String, String)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn finished_games(&self) -> usize {
        self.won + self.lost
    }
}

/// Pick the secrets a benchmark plays, in dictionary order
#[must_use]
pub fn select_targets<'w>(dictionary: &'w [Word], config: &BenchmarkConfig) -> Vec<&'w Word> {
    let limit = config.limit.unwrap_or(usize::MAX);

    if let Some(amount) = config.sample {
        let amount = amount.min(dictionary.len());
        let mut indices =
            rand::seq::index::sample(&mut rand::rng(), dictionary.len(), amount).into_vec();
        indices.sort_unstable();
        return indices
            .into_iter()
            .take(limit)
            .map(|i| &dictionary[i])
            .collect();
    }

    dictionary
        .iter()
        .step_by(config.step.max(1))
        .take(limit)
        .collect()
}

/// Run a benchmark on a set of target words
pub fn run_benchmark<S: Strategy + Clone + Sync>(
    player: &Player<'_, S>,
    targets: &[&Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("Playing");

    let outcomes: Vec<(&str, Result<GameRecord, PlayError>)> = targets
        .par_iter()
        .map(|target| {
            let outcome = player.play(target.text(), config.max_wrong_guesses);
            pb.inc(1);
            (target.text(), outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut result = aggregate(outcomes);
    result.duration = start.elapsed();
    result.games_per_second = result.total_games as f64 / result.duration.as_secs_f64();

    info!(
        "benchmark: {} games, average score {:.3}, {} failed",
        result.total_games, result.average_score, result.failed
    );
    result
}

fn aggregate(outcomes: Vec<(&str, Result<GameRecord, PlayError>)>) -> BenchmarkResult {
    let mut result = BenchmarkResult {
        total_games: outcomes.len(),
        won: 0,
        lost: 0,
        failed: 0,
        total_score: 0,
        average_score: 0.0,
        min_score: u32::MAX,
        max_score: 0,
        distribution: FxHashMap::default(),
        failures: Vec::new(),
        duration: Duration::ZERO,
        games_per_second: 0.0,
    };

    for (secret, outcome) in outcomes {
        match outcome {
            Ok(record) => {
                match record.status {
                    GameStatus::Won => result.won += 1,
                    _ => result.lost += 1,
                }
                result.total_score += u64::from(record.score);
                result.min_score = result.min_score.min(record.score);
                result.max_score = result.max_score.max(record.score);
                *result.distribution.entry(record.score).or_insert(0) += 1;
            }
            Err(err) => {
                warn!("could not finish game for {secret}: {err}");
                result.failed += 1;
                result.failures.push((secret.to_string(), err.to_string()));
            }
        }
    }

    let finished = result.finished_games();
    if finished == 0 {
        result.min_score = 0;
    } else {
        result.average_score = result.total_score as f64 / finished as f64;
    }
    result
}
