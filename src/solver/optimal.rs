//! Optimal result of a search and the tie-aware merge rule

use crate::vocabulary::WordIndex;

/// Every guess achieving the minimal expected guess count for a subset
///
/// The expected value over a subset of `n` equally likely targets is always
/// `T / n`, where `T` is the total number of guesses summed over all targets.
/// Storing `T` keeps comparisons exact: two guesses tie only when their totals
/// are equal, never because of floating-point rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimal {
    guesses: Vec<WordIndex>,
    total: u32,
    size: u32,
}

impl Optimal {
    /// One target left: guessing it always solves, value 1
    #[must_use]
    pub fn single(solution: WordIndex) -> Self {
        Self {
            guesses: vec![solution],
            total: 1,
            size: 1,
        }
    }

    /// Two targets left: either one first, value 1.5
    #[must_use]
    pub fn pair(first: WordIndex, second: WordIndex) -> Self {
        Self {
            guesses: vec![first, second],
            total: 3,
            size: 2,
        }
    }

    /// All tied best guesses, in the order they were found
    #[must_use]
    pub fn guesses(&self) -> &[WordIndex] {
        &self.guesses
    }

    /// Total guesses summed over every target of the subset
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Number of targets in the subset
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Expected number of guesses, `total / size`
    #[must_use]
    pub fn value(&self) -> f64 {
        f64::from(self.total) / f64::from(self.size)
    }

    /// Combine two results for the same subset
    ///
    /// A strictly lower total wins outright; equal totals keep the guesses
    /// of both. The rule is commutative and associative up to guess order.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::solver::Optimal;
    ///
    /// let a = Optimal::pair(0, 1);
    /// let b = Optimal::pair(4, 5);
    /// let merged = a.merge(b);
    /// assert_eq!(merged.guesses(), &[0, 1, 4, 5]);
    /// assert_eq!(merged.value(), 1.5);
    /// ```
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.size, other.size, "merging results of different subsets");
        match other.total.cmp(&self.total) {
            std::cmp::Ordering::Less => other,
            std::cmp::Ordering::Equal => {
                self.guesses.extend(other.guesses);
                self
            }
            std::cmp::Ordering::Greater => self,
        }
    }

    /// Sort the tied guesses by vocabulary index
    pub fn sort_guesses(&mut self) {
        self.guesses.sort_unstable();
    }
}

/// Running minimum while scanning candidate guesses
#[derive(Debug)]
pub(crate) struct Best {
    guesses: Vec<WordIndex>,
    total: u32,
}

impl Best {
    pub(crate) const fn new() -> Self {
        Self {
            guesses: Vec::new(),
            total: u32::MAX,
        }
    }

    pub(crate) const fn total(&self) -> u32 {
        self.total
    }

    pub(crate) fn consider(&mut self, guess: WordIndex, total: u32) {
        if total < self.total {
            self.guesses.clear();
            self.guesses.push(guess);
            self.total = total;
        } else if total == self.total {
            self.guesses.push(guess);
        }
    }

    /// `None` if no guess was considered
    pub(crate) fn finish(self, size: u32) -> Option<Optimal> {
        (!self.guesses.is_empty()).then_some(Optimal {
            guesses: self.guesses,
            total: self.total,
            size,
        })
    }
}
