//! Precomputed feedback table
//!
//! One row per vocabulary word (the guess), one column per solution word.
//! Entry `(g, s)` is the feedback code of guessing `g` when `s` is hidden.
//! Built once, then read-only and shared by every search context.

mod store;

pub use store::{FileStore, MemoryStore, PatternStore};

use crate::core::Pattern;
use crate::vocabulary::{Vocabulary, WordIndex};
use rayon::prelude::*;
use std::io;

/// Flattened `vocabulary_size × solution_count` table of feedback codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatrix {
    codes: Vec<u8>,
    vocabulary_size: usize,
    solution_count: usize,
}

/// Where a built matrix came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOrigin {
    /// A stored blob of the expected length and valid codes was reused
    Loaded,
    /// Computed from the vocabulary; `stale` if an unusable blob was discarded
    Rebuilt { stale: bool },
}

/// Outcome of [`PatternMatrix::build`]
#[derive(Debug)]
pub struct BuildReport {
    pub origin: MatrixOrigin,
    /// Failure to read or write the store; the matrix itself is still valid
    pub store_error: Option<io::Error>,
}

impl PatternMatrix {
    /// Load the matrix from `store`, or compute and persist it
    ///
    /// A stored blob is trusted only if its length equals
    /// `vocabulary.len() * vocabulary.solution_count()` and every byte is a
    /// valid code. Anything else is discarded and the matrix is recomputed. Store failures never fail the
    /// build; they are returned in the report.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::matrix::{MatrixOrigin, MemoryStore, PatternMatrix};
    /// use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
    ///
    /// let vocab = Vocabulary::new(words_from_slice(&["CRANE", "SLATE"]), Vec::new()).unwrap();
    /// let store = MemoryStore::default();
    ///
    /// let (_, first) = PatternMatrix::build(&vocab, &store);
    /// let (matrix, second) = PatternMatrix::build(&vocab, &store);
    ///
    /// assert_eq!(first.origin, MatrixOrigin::Rebuilt { stale: false });
    /// assert_eq!(second.origin, MatrixOrigin::Loaded);
    /// assert!(matrix.lookup(0, 0).is_perfect());
    /// ```
    pub fn build(vocabulary: &Vocabulary, store: &dyn PatternStore) -> (Self, BuildReport) {
        let vocabulary_size = vocabulary.len();
        let solution_count = vocabulary.solution_count();
        let expected_len = vocabulary_size * solution_count;

        let (stale, load_error) = match store.load() {
            Ok(Some(codes)) if codes.len() == expected_len && all_valid(&codes) => {
                let matrix = Self {
                    codes,
                    vocabulary_size,
                    solution_count,
                };
                let report = BuildReport {
                    origin: MatrixOrigin::Loaded,
                    store_error: None,
                };
                return (matrix, report);
            }
            Ok(Some(_)) => (true, None),
            Ok(None) => (false, None),
            Err(e) => (false, Some(e)),
        };

        let matrix = Self::compute(vocabulary);
        let store_error = load_error.or_else(|| store.save(&matrix.codes).err());

        let report = BuildReport {
            origin: MatrixOrigin::Rebuilt { stale },
            store_error,
        };
        (matrix, report)
    }

    /// Compute every entry from the vocabulary, ignoring any store
    ///
    /// Pairs whose char-set masks are disjoint keep the zero default, which is
    /// exactly the code such a pair would produce.
    #[must_use]
    pub fn compute(vocabulary: &Vocabulary) -> Self {
        let words = vocabulary.words();
        let solution_count = vocabulary.solution_count();
        let solutions = &words[..solution_count];
        let mut codes = vec![0u8; words.len() * solution_count];

        if solution_count > 0 {
            codes
                .par_chunks_mut(solution_count)
                .zip(words.par_iter())
                .for_each(|(row, guess)| {
                    for (code, solution) in row.iter_mut().zip(solutions) {
                        if guess.shares_letters(solution) {
                            *code = Pattern::calculate(guess, solution).value();
                        }
                    }
                });
        }

        Self {
            codes,
            vocabulary_size: words.len(),
            solution_count,
        }
    }

    /// Feedback code for guessing `guess` when `solution` is hidden
    ///
    /// # Panics
    /// Panics if `solution` is not a solution index or `guess` is out of range.
    #[inline]
    #[must_use]
    pub fn lookup(&self, guess: WordIndex, solution: WordIndex) -> Pattern {
        let solution = usize::from(solution);
        debug_assert!(solution < self.solution_count, "column out of range");
        Pattern::new(self.codes[usize::from(guess) * self.solution_count + solution])
    }

    /// Number of rows (every vocabulary word can be guessed)
    #[must_use]
    pub const fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Number of columns (solution words only)
    #[must_use]
    pub const fn solution_count(&self) -> usize {
        self.solution_count
    }

    /// Raw blob, as persisted
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.codes
    }
}

fn all_valid(codes: &[u8]) -> bool {
    codes.iter().all(|&c| c <= Pattern::PERFECT.value())
}
