//! Sequence Puzzle - CLI
//!
//! Word puzzle with TUI and CLI modes: find words that contain three letters
//! in order.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sequence_puzzle::{
    commands::{
        check_word, find_answers, load_stats, progress_bar, run_benchmark, run_generate,
        run_simple,
    },
    dictionary::{CandidatePool, DictionaryApiLookup, LocalLookup, lookup::DEFAULT_LOOKUP_URL},
    game::{Session, StatsStore, ValidityGate},
    generator::{RngSource, SequenceGenerator},
    interactive::{App, run_tui},
    logging,
    output::{
        print_answers, print_benchmark_result, print_check_result, print_generated, print_stats,
    },
    wordlists::{
        WORDS,
        loader::{load_from_file, raw_from_slice},
    },
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(
    name = "sequence_puzzle",
    about = "Find words that contain three letters in order",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    words: String,

    /// Check guesses against the word list instead of the online dictionary
    #[arg(long, global = true)]
    offline: bool,

    /// Seed for reproducible sequences
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Stats file (default: <data dir>/sequence-puzzle/stats.json)
    #[arg(long, global = true)]
    stats: Option<PathBuf>,

    /// Dictionary lookup endpoint; the word is appended as a path segment
    #[arg(long, global = true, env = "SEQUENCE_LOOKUP_URL", default_value = DEFAULT_LOOKUP_URL)]
    lookup_url: String,

    /// Dictionary lookup timeout in seconds
    #[arg(long, global = true, env = "SEQUENCE_LOOKUP_TIMEOUT", default_value = "5")]
    lookup_timeout: u64,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Generate sequences without playing
    Generate {
        /// Number of sequences
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Example answers to show per sequence
        #[arg(short, long, default_value = "3")]
        examples: usize,
    },

    /// Check one word against a sequence
    Check {
        /// The word to check
        word: String,

        /// Three-letter sequence, e.g. LIN
        sequence: String,
    },

    /// List the shortest words that solve a sequence
    Answers {
        /// Three-letter sequence, e.g. LIN
        sequence: String,

        /// Maximum number of answers
        #[arg(short, long, default_value = "10")]
        max: usize,
    },

    /// Show saved statistics
    Stats {
        /// Delete all saved statistics first
        #[arg(long)]
        clear: bool,
    },

    /// Benchmark sequence generation
    Benchmark {
        /// Number of sequences to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

/// Load raw words based on the -w flag
fn load_words(words: &str) -> Result<Vec<String>> {
    match words {
        "all" => Ok(raw_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

/// Load raw words and build the candidate pool from them
fn load_pool(words: &str) -> Result<(Vec<String>, CandidatePool)> {
    let raw = load_words(words)?;
    let pool = CandidatePool::build(&raw);
    anyhow::ensure!(!pool.is_empty(), "word list has no usable words");
    Ok((raw, pool))
}

fn runtime() -> Result<Runtime> {
    Runtime::new().context("failed to start async runtime")
}

fn build_gate(cli: &Cli, raw: &[String]) -> Result<ValidityGate> {
    if cli.offline {
        return Ok(ValidityGate::new(LocalLookup::new(raw)));
    }
    let lookup =
        DictionaryApiLookup::new(&cli.lookup_url, Duration::from_secs(cli.lookup_timeout))?;
    Ok(ValidityGate::new(lookup))
}

fn stats_store(cli: &Cli) -> StatsStore {
    StatsStore::new(cli.stats.clone().unwrap_or_else(StatsStore::default_path))
}

fn rng(cli: &Cli) -> RngSource<rand::rngs::StdRng> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "random source seeded");
    RngSource::seeded(seed)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    let _guard = if matches!(command, Commands::Play) {
        logging::init_file(cli.verbose)
    } else {
        logging::init_stderr(cli.verbose);
        None
    };

    match command {
        Commands::Play => {
            let (raw, pool) = load_pool(&cli.words)?;
            let session = new_session(&cli, &raw, &pool)?;
            run_tui(App::new(session), &runtime()?)
        }
        Commands::Simple => {
            let (raw, pool) = load_pool(&cli.words)?;
            let mut session = new_session(&cli, &raw, &pool)?;
            run_simple(&mut session, &runtime()?)
        }
        Commands::Generate { count, examples } => {
            let (_, pool) = load_pool(&cli.words)?;
            let mut generator = SequenceGenerator::new(&pool);
            let results = run_generate(&mut generator, &mut rng(&cli), count, examples);
            print_generated(&results);
            Ok(())
        }
        Commands::Check { word, sequence } => {
            let raw = load_words(&cli.words)?;
            let gate = build_gate(&cli, &raw)?;
            let result = runtime()?.block_on(check_word(&gate, &word, &sequence))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Answers { sequence, max } => {
            let (_, pool) = load_pool(&cli.words)?;
            print_answers(&find_answers(&pool, &sequence, max));
            Ok(())
        }
        Commands::Stats { clear } => {
            let state = load_stats(&stats_store(&cli), clear)?;
            print_stats(&state);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let (_, pool) = load_pool(&cli.words)?;
            println!("Generating {count} sequences from {} words...", pool.len());
            let mut generator = SequenceGenerator::new(&pool);
            let pb = progress_bar(count);
            let result = run_benchmark(&mut generator, &mut rng(&cli), count, Some(&pb));
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn new_session<'a>(
    cli: &Cli,
    raw: &[String],
    pool: &'a CandidatePool,
) -> Result<Session<'a, RngSource<rand::rngs::StdRng>>> {
    let gate = build_gate(cli, raw)?;
    tracing::info!(lookup = gate.lookup_name(), pool = pool.len(), "session starting");
    Ok(Session::new(
        SequenceGenerator::new(pool),
        rng(cli),
        gate,
        Some(stats_store(cli)),
    ))
}
