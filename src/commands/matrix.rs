//! Pattern matrix command
//!
//! Loads or builds the matrix every other search command depends on.

use crate::core::Pattern;
use crate::matrix::{MatrixOrigin, PatternMatrix, PatternStore};
use crate::vocabulary::Vocabulary;
use std::io;
use std::time::{Duration, Instant};

/// A ready matrix plus how it was obtained
#[derive(Debug)]
pub struct MatrixResult {
    pub matrix: PatternMatrix,
    pub origin: MatrixOrigin,
    /// Persisting failed; the matrix is still usable
    pub store_error: Option<io::Error>,
    pub duration: Duration,
}

impl MatrixResult {
    /// Entry `(0, 0)`: the first word guessed against itself
    #[must_use]
    pub fn sample_entry(&self) -> Pattern {
        self.matrix.lookup(0, 0)
    }
}

/// Load the matrix from `store`, or compute it
///
/// With `rebuild` set, any stored blob is ignored and overwritten.
pub fn prepare_matrix(
    vocabulary: &Vocabulary,
    store: &dyn PatternStore,
    rebuild: bool,
) -> MatrixResult {
    let start = Instant::now();

    let (matrix, origin, store_error) = if rebuild {
        let matrix = PatternMatrix::compute(vocabulary);
        let store_error = store.save(matrix.as_bytes()).err();
        (matrix, MatrixOrigin::Rebuilt { stale: false }, store_error)
    } else {
        let (matrix, report) = PatternMatrix::build(vocabulary, store);
        (matrix, report.origin, report.store_error)
    };

    MatrixResult {
        matrix,
        origin,
        store_error,
        duration: start.elapsed(),
    }
}
