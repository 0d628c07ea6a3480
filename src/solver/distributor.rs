//! Fan-out of top-level guesses across a fixed worker pool
//!
//! Each worker owns a private [`SearchEngine`] over the shared matrix and
//! evaluates one top-level guess per assignment. The coordinator hands out
//! guesses in vocabulary order, one outstanding assignment per worker, and
//! folds replies into the running best with [`Optimal::merge`].

use super::optimal::Optimal;
use super::search::{EMPTY_INPUT, SearchEngine, SearchStats};
use crate::matrix::PatternMatrix;
use crate::vocabulary::WordIndex;
use crossbeam_channel::{Receiver, Sender};
use indicatif::ProgressBar;
use std::thread;

enum Assignment {
    Guess(WordIndex),
    Stop,
}

struct Reply {
    worker: usize,
    local: Option<Optimal>,
}

/// Result of a distributed search
#[derive(Debug, Clone, PartialEq)]
pub struct Distributed {
    /// Guesses sorted by vocabulary index
    pub optimal: Optimal,
    /// Top-level guesses evaluated by workers
    pub evaluated: usize,
    /// Workers started
    pub workers: usize,
    /// Memo counters summed over every worker
    pub stats: SearchStats,
}

pub struct WorkDistributor<'m> {
    matrix: &'m PatternMatrix,
    workers: usize,
    progress: Option<ProgressBar>,
}

impl<'m> WorkDistributor<'m> {
    /// `workers` is clamped to at least one
    #[must_use]
    pub fn new(matrix: &'m PatternMatrix, workers: usize) -> Self {
        Self {
            matrix,
            workers: workers.max(1),
            progress: None,
        }
    }

    /// Tick `progress` once per reply, with the running best as its message
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Evaluate every vocabulary word as the opening guess for `subset`
    ///
    /// Produces the same value as [`SearchEngine::optimal`]. Every word is
    /// scored, so when the optimum is exactly 2 the guess list may also hold
    /// outside guesses that the sequential search never needs to look at.
    /// Subsets of one or two targets are answered without starting workers.
    /// A panicking worker brings the whole run down.
    ///
    /// # Panics
    /// Panics if `subset` is empty, or if a worker panics.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::matrix::PatternMatrix;
    /// use wordle_optimal::solver::{SearchEngine, WorkDistributor};
    /// use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
    ///
    /// let vocab = Vocabulary::new(
    ///     words_from_slice(&["BATCH", "CATCH", "HATCH", "LATCH"]),
    ///     words_from_slice(&["CLIMB"]),
    /// )
    /// .unwrap();
    /// let matrix = PatternMatrix::compute(&vocab);
    ///
    /// let parallel = WorkDistributor::new(&matrix, 2).run(&[0, 1, 2, 3]);
    /// let sequential = SearchEngine::new(&matrix).optimal(&[0, 1, 2, 3]);
    /// assert_eq!(parallel.optimal, sequential);
    /// ```
    pub fn run(&self, subset: &[WordIndex]) -> Distributed {
        assert!(!subset.is_empty(), "{EMPTY_INPUT}");

        if subset.len() <= 2 {
            let mut optimal = SearchEngine::new(self.matrix).optimal(subset);
            optimal.sort_guesses();
            return Distributed {
                optimal,
                evaluated: 0,
                workers: 0,
                stats: SearchStats::default(),
            };
        }

        let workers = self.workers.min(self.matrix.vocabulary_size()).max(1);
        let mut guesses = (0..self.matrix.vocabulary_size()).map(|g| g as WordIndex);
        let mut best: Option<Optimal> = None;
        let mut evaluated = 0;
        let mut stats = SearchStats::default();

        thread::scope(|scope| {
            let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<Reply>();
            let mut assignments = Vec::with_capacity(workers);
            let mut handles = Vec::with_capacity(workers);

            for worker in 0..workers {
                let (tx, rx) = crossbeam_channel::bounded::<Assignment>(1);
                let reply_tx = reply_tx.clone();
                let matrix = self.matrix;
                handles.push(
                    scope.spawn(move || run_worker(matrix, subset, worker, &rx, &reply_tx)),
                );
                assignments.push(tx);
            }
            drop(reply_tx);

            let mut active = 0;
            for tx in &assignments {
                if dispatch(tx, guesses.next()) {
                    active += 1;
                }
            }

            while active > 0 {
                // All workers gone means one of them panicked; join below reports it
                let Ok(reply) = reply_rx.recv() else { break };
                evaluated += 1;

                if let Some(local) = reply.local {
                    best = Some(match best.take() {
                        Some(current) => current.merge(local),
                        None => local,
                    });
                }
                if let Some(pb) = &self.progress {
                    pb.inc(1);
                    if let Some(current) = &best {
                        pb.set_message(format!("best {:.4}", current.value()));
                    }
                }

                if !dispatch(&assignments[reply.worker], guesses.next()) {
                    active -= 1;
                }
            }

            drop(assignments);
            for handle in handles {
                match handle.join() {
                    Ok(worker_stats) => stats = stats.combine(worker_stats),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
        });

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }

        // In-subset guesses always split off their own perfect group
        let mut optimal = best.unwrap_or_else(|| unreachable!("no informative guess for subset"));
        optimal.sort_guesses();

        Distributed {
            optimal,
            evaluated,
            workers,
            stats,
        }
    }
}

/// Send the next guess, or `Stop` once the cursor is exhausted
///
/// Returns whether a guess went out.
fn dispatch(tx: &Sender<Assignment>, next: Option<WordIndex>) -> bool {
    match next {
        Some(guess) => tx.send(Assignment::Guess(guess)).is_ok(),
        None => {
            let _ = tx.send(Assignment::Stop);
            false
        }
    }
}

fn run_worker(
    matrix: &PatternMatrix,
    subset: &[WordIndex],
    worker: usize,
    assignments: &Receiver<Assignment>,
    replies: &Sender<Reply>,
) -> SearchStats {
    let mut engine = SearchEngine::new(matrix);

    while let Ok(Assignment::Guess(guess)) = assignments.recv() {
        let local = engine.optimal_for_guess(subset, guess);
        if replies.send(Reply { worker, local }).is_err() {
            break;
        }
    }

    engine.stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{Vocabulary, loader::words_from_slice};

    fn setup() -> (Vocabulary, PatternMatrix) {
        let vocab = Vocabulary::new(
            words_from_slice(&["BATCH", "CATCH", "HATCH", "LATCH", "MATCH", "PATCH", "WATCH"]),
            words_from_slice(&["CLIMB", "JUMPY"]),
        )
        .unwrap();
        let matrix = PatternMatrix::compute(&vocab);
        (vocab, matrix)
    }

    #[test]
    fn agrees_with_sequential_search() {
        let (vocab, matrix) = setup();
        let all: Vec<WordIndex> = vocab.solution_indices().collect();

        for subset in [&all[..4], &all[..5], &all[..]] {
            let mut sequential = SearchEngine::new(&matrix).optimal(subset);
            sequential.sort_guesses();

            for workers in [1, 2, 4] {
                let distributed = WorkDistributor::new(&matrix, workers).run(subset);
                assert_eq!(distributed.optimal, sequential, "{workers} workers");
            }
        }
    }

    #[test]
    fn finds_outside_guess_for_whole_set() {
        let (vocab, matrix) = setup();
        let all: Vec<WordIndex> = vocab.solution_indices().collect();

        let distributed = WorkDistributor::new(&matrix, 3).run(&all);
        assert_eq!(distributed.optimal.total(), 17);
        assert_eq!(vocab.texts(distributed.optimal.guesses()), ["CLIMB"]);
        assert_eq!(distributed.evaluated, vocab.len());
        assert_eq!(distributed.workers, 3);
    }

    #[test]
    fn outside_guesses_tying_at_two_are_reported_sorted() {
        let (vocab, matrix) = setup();
        let climb = vocab.index_of("CLIMB").unwrap();

        let distributed = WorkDistributor::new(&matrix, 4).run(&[2, 0, 1]);
        let sequential = SearchEngine::new(&matrix).optimal(&[2, 0, 1]);

        assert_eq!(distributed.optimal.value(), 2.0);
        assert_eq!(distributed.optimal.value(), sequential.value());
        assert_eq!(distributed.optimal.guesses(), &[0, 1, 2, climb]);
        assert_eq!(sequential.guesses(), &[2, 0, 1]);
    }

    #[test]
    fn small_subsets_skip_the_pool() {
        let (_, matrix) = setup();
        let distributor = WorkDistributor::new(&matrix, 4);

        let single = distributor.run(&[5]);
        assert_eq!(single.optimal, Optimal::single(5));
        assert_eq!(single.workers, 0);

        let pair = distributor.run(&[6, 2]);
        assert_eq!(pair.optimal.guesses(), &[2, 6]);
        assert_eq!(pair.optimal.value(), 1.5);
        assert_eq!(pair.evaluated, 0);
    }

    #[test]
    fn zero_workers_is_clamped_to_one() {
        let (vocab, matrix) = setup();
        let all: Vec<WordIndex> = vocab.solution_indices().collect();

        let distributed = WorkDistributor::new(&matrix, 0).run(&all[..4]);
        assert_eq!(distributed.workers, 1);
        assert_eq!(vocab.texts(distributed.optimal.guesses()), ["CLIMB"]);
    }

    #[test]
    fn more_workers_than_words_is_capped() {
        let (vocab, matrix) = setup();
        let distributed = WorkDistributor::new(&matrix, 64).run(&[0, 1, 2, 3]);

        assert_eq!(distributed.workers, vocab.len());
        assert_eq!(distributed.evaluated, vocab.len());
    }

    #[test]
    fn progress_bar_counts_every_reply() {
        let (vocab, matrix) = setup();
        let pb = ProgressBar::hidden();
        pb.set_length(vocab.len() as u64);

        let _ = WorkDistributor::new(&matrix, 2)
            .with_progress(pb.clone())
            .run(&[0, 1, 2, 3]);
        assert_eq!(pb.position(), vocab.len() as u64);
    }

    #[test]
    #[should_panic(expected = "called with empty input")]
    fn empty_subset_is_fatal() {
        let (_, matrix) = setup();
        let _ = WorkDistributor::new(&matrix, 2).run(&[]);
    }
}
