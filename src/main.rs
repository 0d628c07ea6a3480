//! Wordle Optimal - CLI
//!
//! Exact expected-value search for the best Wordle guess, sequential or
//! spread over a worker pool.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordle_optimal::{
    commands::{
        MatrixResult, OptimalConfig, SearchMode, Selection, feedback, find_optimal,
        partition_subset, prepare_matrix,
    },
    config::Settings,
    output::{
        print_feedback_result, print_matrix_result, print_optimal_result, print_partition_result,
        print_store_warning, search_progress,
    },
    vocabulary::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_optimal",
    about = "Exact expected-value search for the optimal Wordle guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Worker pool size for --parallel [env: WORDLE_WORKERS] [default: available cores]
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Pattern matrix cache file [env: WORDLE_PATTERN_CACHE] [default: patterns.bin]
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Keep the pattern matrix in memory only
    #[arg(long, global = true, conflicts_with = "cache")]
    no_cache: bool,

    /// Solution word list file (default: embedded list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Guess-only word list file (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every guess minimizing the expected number of guesses
    Optimal {
        #[command(flatten)]
        subset: SubsetArgs,

        /// Spread the opening guesses over a worker pool
        #[arg(short, long)]
        parallel: bool,

        /// Show the subset and memo statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the feedback code of GUESS against SOLUTION
    Feedback { guess: String, solution: String },

    /// Group a subset by the feedback GUESS produces
    Partition {
        guess: String,

        #[command(flatten)]
        subset: SubsetArgs,
    },

    /// Build or load the pattern matrix and report on it
    Matrix {
        /// Ignore any cached matrix and recompute it
        #[arg(long)]
        rebuild: bool,
    },
}

/// Which solutions to search over (default: all of them)
#[derive(Args)]
struct SubsetArgs {
    /// Comma-separated solution words
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["first", "sample"])]
    words: Option<Vec<String>>,

    /// The first N solution words
    #[arg(long, conflicts_with = "sample")]
    first: Option<usize>,

    /// N solution words drawn at random
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,
}

impl SubsetArgs {
    fn selection(self) -> Selection {
        match (self.words, self.first, self.sample) {
            (Some(words), _, _) => Selection::Words(words),
            (None, Some(size), _) => Selection::First(size),
            (None, None, Some(size)) => Selection::Sample {
                size,
                seed: self.seed,
            },
            (None, None, None) => Selection::All,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        workers: cli.workers,
        cache: cli.cache,
        no_cache: cli.no_cache,
        solutions: cli.solutions,
        guesses: cli.guesses,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Optimal {
            subset,
            parallel,
            verbose,
        } => run_optimal_command(&settings, subset.selection(), parallel, verbose),
        Commands::Feedback { guess, solution } => {
            let result = feedback(&guess, &solution).context("Invalid word")?;
            print_feedback_result(&result);
            Ok(())
        }
        Commands::Partition { guess, subset } => {
            run_partition_command(&settings, &guess, &subset.selection())
        }
        Commands::Matrix { rebuild } => {
            let vocabulary = settings.vocabulary()?;
            let result = load_matrix(&settings, &vocabulary, rebuild);
            print_matrix_result(&result);
            Ok(())
        }
    }
}

fn load_matrix(settings: &Settings, vocabulary: &Vocabulary, rebuild: bool) -> MatrixResult {
    let store = settings.store();
    prepare_matrix(vocabulary, store.as_ref(), rebuild)
}

fn run_optimal_command(
    settings: &Settings,
    selection: Selection,
    parallel: bool,
    verbose: bool,
) -> Result<()> {
    let vocabulary = settings.vocabulary()?;
    let matrix = load_matrix(settings, &vocabulary, false);
    print_store_warning(&matrix);

    let mode = if parallel {
        SearchMode::Parallel {
            workers: settings.worker_count(),
        }
    } else {
        SearchMode::Sequential
    };
    let mut config = OptimalConfig::new(selection, mode);
    if parallel {
        config.progress = Some(search_progress(settings.quiet));
    }

    let result =
        find_optimal(&vocabulary, &matrix.matrix, config).context("Failed to select subset")?;
    print_optimal_result(&result, verbose);
    Ok(())
}

fn run_partition_command(settings: &Settings, guess: &str, selection: &Selection) -> Result<()> {
    let vocabulary = settings.vocabulary()?;
    let matrix = load_matrix(settings, &vocabulary, false);
    print_store_warning(&matrix);

    let result = partition_subset(&vocabulary, &matrix.matrix, guess, selection)
        .with_context(|| format!("Cannot partition by '{guess}'"))?;
    print_partition_result(&result);
    Ok(())
}
