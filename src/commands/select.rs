//! Choosing the solution subset a command runs over

use crate::vocabulary::{Vocabulary, VocabularyError, WordIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// How the subset is picked from the solution vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every solution word
    #[default]
    All,
    /// Named solution words, in the given order
    Words(Vec<String>),
    /// The first `n` solution words
    First(usize),
    /// `n` distinct solution words drawn uniformly, sorted by index
    Sample { size: usize, seed: Option<u64> },
}

/// Error type for subset selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    Vocabulary(VocabularyError),
    RepeatedWord(String),
    Empty,
    TooLarge { requested: usize, available: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vocabulary(e) => write!(f, "{e}"),
            Self::RepeatedWord(word) => write!(f, "Word '{word}' selected more than once"),
            Self::Empty => write!(f, "Selection is empty"),
            Self::TooLarge {
                requested,
                available,
            } => write!(
                f,
                "Requested {requested} words but only {available} solutions exist"
            ),
        }
    }
}

impl std::error::Error for SelectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vocabulary(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VocabularyError> for SelectionError {
    fn from(e: VocabularyError) -> Self {
        Self::Vocabulary(e)
    }
}

impl Selection {
    /// Resolve to distinct solution indices
    ///
    /// # Errors
    /// Returns `SelectionError` if a named word is not a solution or repeats,
    /// or if the selection is empty or larger than the solution list.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::commands::Selection;
    /// use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
    ///
    /// let vocab = Vocabulary::new(words_from_slice(&["CRANE", "SLATE", "IRATE"]), Vec::new()).unwrap();
    ///
    /// assert_eq!(Selection::First(2).resolve(&vocab).unwrap(), [0, 1]);
    /// let named = Selection::Words(vec!["irate".into(), "crane".into()]);
    /// assert_eq!(named.resolve(&vocab).unwrap(), [2, 0]);
    /// ```
    pub fn resolve(&self, vocabulary: &Vocabulary) -> Result<Vec<WordIndex>, SelectionError> {
        let available = vocabulary.solution_count();
        let subset = match self {
            Self::All => vocabulary.solution_indices().collect(),
            Self::Words(words) => named(vocabulary, words)?,
            Self::First(size) => {
                check_size(*size, available)?;
                vocabulary.solution_indices().take(*size).collect()
            }
            Self::Sample { size, seed } => {
                check_size(*size, available)?;
                match seed {
                    Some(seed) => sample(&mut StdRng::seed_from_u64(*seed), available, *size),
                    None => sample(&mut rand::rng(), available, *size),
                }
            }
        };

        if subset.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(subset)
    }
}

fn check_size(requested: usize, available: usize) -> Result<(), SelectionError> {
    if requested > available {
        return Err(SelectionError::TooLarge {
            requested,
            available,
        });
    }
    Ok(())
}

fn named(vocabulary: &Vocabulary, words: &[String]) -> Result<Vec<WordIndex>, SelectionError> {
    let mut subset = Vec::with_capacity(words.len());
    for word in words {
        let index = vocabulary.solution_index(word)?;
        if subset.contains(&index) {
            return Err(SelectionError::RepeatedWord(word.to_ascii_uppercase()));
        }
        subset.push(index);
    }
    Ok(subset)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, available: usize, size: usize) -> Vec<WordIndex> {
    let mut picked: Vec<WordIndex> = rand::seq::index::sample(rng, available, size)
        .into_iter()
        .map(|i| i as WordIndex)
        .collect();
    picked.sort_unstable();
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::loader::words_from_slice;

    fn vocab() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["BATCH", "CATCH", "HATCH", "LATCH", "MATCH", "PATCH", "WATCH"]),
            words_from_slice(&["CLIMB"]),
        )
        .unwrap()
    }

    #[test]
    fn all_is_every_solution() {
        let subset = Selection::All.resolve(&vocab()).unwrap();
        assert_eq!(subset, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn named_words_keep_their_order() {
        let selection = Selection::Words(vec!["watch".into(), "BATCH".into(), "Hatch".into()]);
        assert_eq!(selection.resolve(&vocab()).unwrap(), [6, 0, 2]);
    }

    #[test]
    fn named_words_must_be_distinct_solutions() {
        let vocab = vocab();

        let guess_only = Selection::Words(vec!["CLIMB".into()]);
        assert_eq!(
            guess_only.resolve(&vocab),
            Err(SelectionError::Vocabulary(VocabularyError::NotASolution(
                "CLIMB".into()
            )))
        );

        let repeated = Selection::Words(vec!["BATCH".into(), "batch".into()]);
        assert_eq!(
            repeated.resolve(&vocab),
            Err(SelectionError::RepeatedWord("BATCH".into()))
        );

        assert_eq!(
            Selection::Words(Vec::new()).resolve(&vocab),
            Err(SelectionError::Empty)
        );
    }

    #[test]
    fn first_takes_a_prefix() {
        let vocab = vocab();
        assert_eq!(Selection::First(3).resolve(&vocab).unwrap(), [0, 1, 2]);
        assert_eq!(Selection::First(0).resolve(&vocab), Err(SelectionError::Empty));
        assert_eq!(
            Selection::First(8).resolve(&vocab),
            Err(SelectionError::TooLarge {
                requested: 8,
                available: 7
            })
        );
    }

    #[test]
    fn seeded_sample_is_reproducible_sorted_and_distinct() {
        let vocab = vocab();
        let selection = Selection::Sample {
            size: 4,
            seed: Some(42),
        };

        let first = selection.resolve(&vocab).unwrap();
        let second = selection.resolve(&vocab).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert!(first.iter().all(|&i| vocab.is_solution(i)));
    }

    #[test]
    fn full_sample_is_every_solution() {
        let selection = Selection::Sample {
            size: 7,
            seed: None,
        };
        assert_eq!(selection.resolve(&vocab()).unwrap(), [0, 1, 2, 3, 4, 5, 6]);
    }
}
