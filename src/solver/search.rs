//! Memoized expected-value search
//!
//! For a subset of equally likely targets, finds every guess minimizing the
//! expected total number of guesses, recursing into each feedback group.

use super::optimal::{Best, Optimal};
use super::partition::Partition;
use super::subset_key::subset_key;
use crate::matrix::PatternMatrix;
use crate::vocabulary::WordIndex;
use rustc_hash::FxHashMap;

pub(crate) const EMPTY_INPUT: &str = "optimal search called with empty input";

/// Memo counters for one search context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl SearchStats {
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self {
            cache_hits: self.cache_hits + other.cache_hits,
            cache_misses: self.cache_misses + other.cache_misses,
        }
    }
}

/// One search context: a shared read-only matrix plus a private memo
///
/// The memo only grows. It lives as long as the engine, so reuse one engine
/// for related queries and drop it to release the memory.
pub struct SearchEngine<'m> {
    matrix: &'m PatternMatrix,
    memo: FxHashMap<u64, Optimal>,
    stats: SearchStats,
}

impl<'m> SearchEngine<'m> {
    #[must_use]
    pub fn new(matrix: &'m PatternMatrix) -> Self {
        Self {
            matrix,
            memo: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Best guesses for `subset` over the whole vocabulary
    ///
    /// `subset` holds distinct solution indices.
    ///
    /// # Panics
    /// Panics if `subset` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::matrix::PatternMatrix;
    /// use wordle_optimal::solver::SearchEngine;
    /// use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
    ///
    /// let vocab = Vocabulary::new(words_from_slice(&["CRANE", "SLATE"]), Vec::new()).unwrap();
    /// let matrix = PatternMatrix::compute(&vocab);
    ///
    /// let optimal = SearchEngine::new(&matrix).optimal(&[0, 1]);
    /// assert_eq!(optimal.value(), 1.5);
    /// assert_eq!(optimal.guesses(), &[0, 1]);
    /// ```
    pub fn optimal(&mut self, subset: &[WordIndex]) -> Optimal {
        match *subset {
            [] => panic!("{EMPTY_INPUT}"),
            [only] => Optimal::single(only),
            [first, second] => Optimal::pair(first, second),
            _ => self.memoized(subset).clone(),
        }
    }

    /// Result of opening with `guess` on `subset`
    ///
    /// Only `guess` is evaluated, with no in-subset pass, and the result is
    /// not memoized since it is not the subset's optimum. Subsets of one or
    /// two targets return their closed-form result regardless of `guess`.
    /// Returns `None` when `guess` produces a single feedback group.
    ///
    /// # Panics
    /// Panics if `subset` is empty.
    pub fn optimal_for_guess(&mut self, subset: &[WordIndex], guess: WordIndex) -> Option<Optimal> {
        match *subset {
            [] => panic!("{EMPTY_INPUT}"),
            [_] | [_, _] => Some(self.optimal(subset)),
            _ => self.search(subset, Some(guess)),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of subsets currently memoized
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.memo.len()
    }

    fn memoized(&mut self, subset: &[WordIndex]) -> &Optimal {
        let key = subset_key(subset);
        if self.memo.contains_key(&key) {
            self.stats.cache_hits += 1;
        } else {
            self.stats.cache_misses += 1;
            // Unrestricted search always scores at least the in-subset guesses
            if let Some(optimal) = self.search(subset, None) {
                self.memo.insert(key, optimal);
            }
        }
        &self.memo[&key]
    }

    /// Total guesses over all targets of `group` under optimal play
    fn group_total(&mut self, group: &[WordIndex]) -> u32 {
        match group.len() {
            1 => 1,
            2 => 3,
            _ => self.memoized(group).total(),
        }
    }

    fn guess_total(&mut self, partition: &Partition) -> u32 {
        let mut total = 0;
        for (pattern, group) in partition.iter() {
            let members = group.len() as u32;
            total += if pattern.is_perfect() {
                members
            } else {
                members + self.group_total(group)
            };
        }
        total
    }

    fn search(&mut self, subset: &[WordIndex], restrict: Option<WordIndex>) -> Option<Optimal> {
        let size = subset.len() as u32;
        let mut best = Best::new();

        if restrict.is_none() {
            for &guess in subset {
                let partition = Partition::new(self.matrix, guess, subset);
                let total = self.guess_total(&partition);
                best.consider(guess, total);
            }
        }

        // A guess outside the subset can never beat 2
        if best.total() > 2 * size {
            let (low, high) = match restrict {
                Some(guess) => (usize::from(guess), usize::from(guess) + 1),
                None => (0, self.matrix.vocabulary_size()),
            };

            // Members were already scored above
            let mut members = Vec::new();
            if restrict.is_none() {
                members.extend_from_slice(subset);
                members.sort_unstable();
            }

            for guess in (low..high).map(|g| g as WordIndex) {
                if members.binary_search(&guess).is_ok() {
                    continue;
                }
                let partition = Partition::new(self.matrix, guess, subset);
                if partition.is_uninformative() {
                    continue;
                }
                let total = self.guess_total(&partition);
                best.consider(guess, total);
            }
        }

        best.finish(size)
    }
}
