//! Runtime settings
//!
//! Each setting resolves from an explicit flag, then its environment
//! variable, then a built-in default.

use crate::matrix::{FileStore, MemoryStore, PatternStore};
use crate::vocabulary::{Vocabulary, loader};
use anyhow::{Context, Result};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub const WORKERS_ENV: &str = "WORDLE_WORKERS";
pub const CACHE_ENV: &str = "WORDLE_PATTERN_CACHE";
pub const DEFAULT_CACHE: &str = "patterns.bin";

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Worker pool size from `--workers`
    pub workers: Option<usize>,
    /// Pattern cache path from `--cache`
    pub cache: Option<PathBuf>,
    /// Keep the pattern matrix in memory only
    pub no_cache: bool,
    /// Solution list file; the embedded list if unset
    pub solutions: Option<PathBuf>,
    /// Guess-only list file; the embedded list if unset
    pub guesses: Option<PathBuf>,
    /// Suppress progress bars
    pub quiet: bool,
}

impl Settings {
    /// Worker pool size, never zero
    #[must_use]
    pub fn worker_count(&self) -> usize {
        resolve_workers(
            self.workers,
            std::env::var(WORKERS_ENV).ok().as_deref(),
            default_workers(),
        )
    }

    /// Where the pattern matrix is persisted
    #[must_use]
    pub fn cache_path(&self) -> PathBuf {
        resolve_cache(self.cache.as_deref(), std::env::var_os(CACHE_ENV).map(PathBuf::from))
    }

    /// The store the pattern matrix is loaded from and saved to
    #[must_use]
    pub fn store(&self) -> Box<dyn PatternStore> {
        if self.no_cache {
            Box::new(MemoryStore::default())
        } else {
            Box::new(FileStore::new(self.cache_path()))
        }
    }

    /// Build the vocabulary from the configured lists
    ///
    /// # Errors
    /// Returns an error if a list file cannot be read or the lists do not
    /// form a valid vocabulary.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let solutions = match &self.solutions {
            Some(path) => load_list(path)?,
            None => loader::words_from_slice(crate::vocabulary::SOLUTIONS),
        };
        let guesses = match &self.guesses {
            Some(path) => load_list(path)?,
            None => loader::words_from_slice(crate::vocabulary::GUESSES),
        };
        Vocabulary::new(solutions, guesses).context("Invalid word lists")
    }
}

fn load_list(path: &Path) -> Result<Vec<crate::core::Word>> {
    loader::load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Flag, then a parseable environment value, then `default`; clamped to 1
#[must_use]
pub fn resolve_workers(flag: Option<usize>, env: Option<&str>, default: usize) -> usize {
    flag.or_else(|| env.and_then(|s| s.trim().parse().ok()))
        .unwrap_or(default)
        .max(1)
}

/// Flag, then environment, then `patterns.bin`
#[must_use]
pub fn resolve_cache(flag: Option<&Path>, env: Option<PathBuf>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or(env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE))
}
