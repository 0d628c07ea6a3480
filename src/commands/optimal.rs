//! Optimal guess command
//!
//! Searches the selected subset for every guess minimizing the expected
//! number of guesses, either in one thread or across a worker pool.

use super::select::{Selection, SelectionError};
use crate::matrix::PatternMatrix;
use crate::solver::{SearchEngine, SearchStats, WorkDistributor};
use crate::vocabulary::Vocabulary;
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// How to run the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Sequential,
    Parallel { workers: usize },
}

pub struct OptimalConfig {
    pub selection: Selection,
    pub mode: SearchMode,
    /// Ticked once per top-level guess in parallel mode
    pub progress: Option<ProgressBar>,
}

impl OptimalConfig {
    #[must_use]
    pub fn new(selection: Selection, mode: SearchMode) -> Self {
        Self {
            selection,
            mode,
            progress: None,
        }
    }
}

/// Counters specific to the mode the search ran in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchReport {
    Sequential {
        stats: SearchStats,
        cache_entries: usize,
    },
    Parallel {
        stats: SearchStats,
        workers: usize,
        evaluated: usize,
    },
}

/// Result of an optimal search
#[derive(Debug, Clone)]
pub struct OptimalResult {
    pub subset: Vec<String>,
    /// Best guesses sorted by vocabulary index
    pub guesses: Vec<String>,
    pub value: f64,
    /// Total guesses summed over every target
    pub total: u32,
    pub report: SearchReport,
    pub duration: Duration,
}

/// Run the search over the configured subset
///
/// # Errors
/// Returns `SelectionError` if the subset cannot be resolved.
pub fn find_optimal(
    vocabulary: &Vocabulary,
    matrix: &PatternMatrix,
    config: OptimalConfig,
) -> Result<OptimalResult, SelectionError> {
    let subset = config.selection.resolve(vocabulary)?;
    let start = Instant::now();

    let (mut optimal, report) = match config.mode {
        SearchMode::Sequential => {
            let mut engine = SearchEngine::new(matrix);
            let optimal = engine.optimal(&subset);
            let report = SearchReport::Sequential {
                stats: engine.stats(),
                cache_entries: engine.cache_len(),
            };
            (optimal, report)
        }
        SearchMode::Parallel { workers } => {
            let mut distributor = WorkDistributor::new(matrix, workers);
            if let Some(pb) = config.progress {
                pb.set_length(matrix.vocabulary_size() as u64);
                distributor = distributor.with_progress(pb);
            }
            let distributed = distributor.run(&subset);
            let report = SearchReport::Parallel {
                stats: distributed.stats,
                workers: distributed.workers,
                evaluated: distributed.evaluated,
            };
            (distributed.optimal, report)
        }
    };
    optimal.sort_guesses();

    Ok(OptimalResult {
        subset: vocabulary.texts(&subset).into_iter().map(str::to_string).collect(),
        guesses: vocabulary
            .texts(optimal.guesses())
            .into_iter()
            .map(str::to_string)
            .collect(),
        value: optimal.value(),
        total: optimal.total(),
        report,
        duration: start.elapsed(),
    })
}
