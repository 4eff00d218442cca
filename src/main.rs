//! Hangman Solver - CLI
//!
//! Plays Hangman by narrowing a dictionary of candidate words and guessing
//! letters chosen from per-letter word counts.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use hangman_solver::{
    commands::{
        BenchmarkConfig, DEFAULT_MAX_WRONG_GUESSES, Player, SolveConfig, analyze_position,
        remaining_after, run_benchmark, select_targets, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{
        DEFAULT_REDUCTION_PROPORTION, DEFAULT_WORD_GUESS_THRESHOLD, StrategyConfig, StrategyType,
    },
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use log::{LevelFilter, info};
use rand::seq::IndexedRandom;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman player that minimizes wrong guesses using candidate-word letter statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: adaptive (default), likely, reduction
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
    max_wrong: u32,

    /// Fraction of the candidates a reduction letter's count aims for
    #[arg(long, global = true, default_value_t = DEFAULT_REDUCTION_PROPORTION)]
    reduction_proportion: f64,

    /// Guess whole words once fewer than this many candidates remain
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_GUESS_THRESHOLD)]
    word_guess_threshold: usize,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a given secret word
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        details: bool,
    },

    /// Play one game against a random dictionary word
    Play {
        /// Show candidate counts for every turn
        #[arg(short, long)]
        details: bool,
    },

    /// Show what the strategy sees for a position
    Analyze {
        /// Revealed pattern, '-' or '_' for hidden positions (e.g. -A---A-)
        pattern: String,

        /// Letters already guessed wrong (e.g. "xqe")
        #[arg(short = 'x', long, default_value = "")]
        wrong: String,

        /// Wrong guesses remaining (default: --max-wrong minus wrong letters)
        #[arg(short, long)]
        remaining: Option<u32>,
    },

    /// Play many dictionary words and report score statistics
    Benchmark {
        /// Play every N-th dictionary word
        #[arg(long, default_value = "1")]
        step: usize,

        /// Play N random dictionary words instead of stepping
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Stop after N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the compiled-in word list
/// - "<path>": one word per line from a file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
    };

    if words.is_empty() {
        bail!("word list '{wordlist_mode}' contains no usable words");
    }
    info!("loaded {} words from {wordlist_mode}", words.len());
    Ok(words)
}

fn strategy_config(cli: &Cli) -> Result<StrategyConfig> {
    let config = StrategyConfig::default()
        .with_reduction_proportion(cli.reduction_proportion)?
        .with_word_guess_threshold(cli.word_guess_threshold)?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    let config = strategy_config(&cli)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let player = Player::new(strategy, config, &words);

    match &cli.command {
        Commands::Solve { word, details } => {
            run_solve_command(&player, word, cli.max_wrong, *details)
        }
        Commands::Play { details } => {
            let secret = words
                .choose(&mut rand::rng())
                .context("word list is empty")?;
            run_solve_command(&player, secret.text(), cli.max_wrong, *details)
        }
        Commands::Analyze {
            pattern,
            wrong,
            remaining,
        } => run_analyze_command(&cli, &player, pattern, wrong, *remaining),
        Commands::Benchmark {
            step,
            sample,
            limit,
            no_progress,
        } => {
            let bench = BenchmarkConfig {
                step: *step,
                sample: *sample,
                limit: *limit,
                max_wrong_guesses: cli.max_wrong,
                show_progress: !no_progress,
            };
            run_benchmark_command(&player, &bench);
            Ok(())
        }
    }
}

fn run_solve_command(
    player: &Player<'_, StrategyType>,
    word: &str,
    max_wrong: u32,
    details: bool,
) -> Result<()> {
    let config = SolveConfig {
        target: word.to_string(),
        max_wrong_guesses: max_wrong,
    };
    let result = solve_word(config, player).with_context(|| format!("could not play '{word}'"))?;

    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(
    cli: &Cli,
    player: &Player<'_, StrategyType>,
    pattern: &str,
    wrong: &str,
    remaining: Option<u32>,
) -> Result<()> {
    let remaining = remaining.unwrap_or_else(|| remaining_after(cli.max_wrong, wrong));

    let result = analyze_position(
        pattern,
        wrong,
        remaining,
        *player.strategy(),
        *player.config(),
        player.dictionary(),
    )
    .with_context(|| format!("could not analyze '{pattern}'"))?;

    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(player: &Player<'_, StrategyType>, config: &BenchmarkConfig) {
    let targets = select_targets(player.dictionary(), config);
    println!(
        "Playing {} words with the {} strategy...",
        targets.len(),
        player.strategy().name()
    );

    let result = run_benchmark(player, &targets, config);
    print_benchmark_result(&result);
}
