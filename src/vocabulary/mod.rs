//! Working vocabulary
//!
//! The solution list and the guess-only list concatenated, solutions first.
//! A word's position in this concatenation is its [`WordIndex`], stable for
//! the lifetime of the run. Solution indices are therefore `0..solution_count`
//! and double as pattern matrix columns.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Position of a word in the concatenated vocabulary
pub type WordIndex = u16;

/// Error type for vocabulary construction and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The solution list is empty
    NoSolutions,
    /// A word appears more than once across both lists
    Duplicate(String),
    /// More words than a `WordIndex` can address
    TooLarge(usize),
    /// The word is not in the vocabulary at all
    UnknownWord(String),
    /// The word is a valid guess but never a solution
    NotASolution(String),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolutions => write!(f, "Solution list is empty"),
            Self::Duplicate(word) => write!(f, "Word '{word}' appears more than once"),
            Self::TooLarge(len) => write!(
                f,
                "Vocabulary has {len} words, at most {} are supported",
                usize::from(WordIndex::MAX) + 1
            ),
            Self::UnknownWord(word) => write!(f, "Word '{word}' not in word list"),
            Self::NotASolution(word) => write!(f, "Word '{word}' is not a possible solution"),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Solutions followed by guess-only words
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    solution_count: usize,
    index: FxHashMap<String, WordIndex>,
}

impl Vocabulary {
    /// Concatenate the two lists, solutions first
    ///
    /// # Errors
    /// Returns `VocabularyError` if the solution list is empty, a word appears
    /// twice, or the combined list does not fit in a `WordIndex`.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
    ///
    /// let vocab = Vocabulary::new(
    ///     words_from_slice(&["CRANE", "SLATE"]),
    ///     words_from_slice(&["SALET"]),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(vocab.len(), 3);
    /// assert_eq!(vocab.solution_count(), 2);
    /// assert_eq!(vocab.index_of("salet"), Some(2));
    /// ```
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Result<Self, VocabularyError> {
        if solutions.is_empty() {
            return Err(VocabularyError::NoSolutions);
        }

        let solution_count = solutions.len();
        let mut words = solutions;
        words.extend(guesses);

        if words.len() > usize::from(WordIndex::MAX) + 1 {
            return Err(VocabularyError::TooLarge(words.len()));
        }

        let mut index = FxHashMap::default();
        index.reserve(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.text().to_string(), i as WordIndex).is_some() {
                return Err(VocabularyError::Duplicate(word.text().to_string()));
            }
        }

        Ok(Self {
            words,
            solution_count,
            index,
        })
    }

    /// The vocabulary compiled into the binary
    ///
    /// # Errors
    /// Returns `VocabularyError` if the embedded lists are inconsistent.
    pub fn embedded() -> Result<Self, VocabularyError> {
        Self::new(
            loader::words_from_slice(SOLUTIONS),
            loader::words_from_slice(GUESSES),
        )
    }

    /// Total number of words (guess rows of the pattern matrix)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of solution words (columns of the pattern matrix)
    #[must_use]
    pub const fn solution_count(&self) -> usize {
        self.solution_count
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn word(&self, index: WordIndex) -> &Word {
        &self.words[usize::from(index)]
    }

    /// Case-insensitive lookup of a word's index
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<WordIndex> {
        self.index.get(&text.trim().to_ascii_uppercase()).copied()
    }

    /// Index of a word that must be a solution
    ///
    /// # Errors
    /// Returns `UnknownWord` or `NotASolution`.
    pub fn solution_index(&self, text: &str) -> Result<WordIndex, VocabularyError> {
        let index = self
            .index_of(text)
            .ok_or_else(|| VocabularyError::UnknownWord(text.to_string()))?;
        if self.is_solution(index) {
            Ok(index)
        } else {
            Err(VocabularyError::NotASolution(text.to_string()))
        }
    }

    #[must_use]
    pub fn is_solution(&self, index: WordIndex) -> bool {
        usize::from(index) < self.solution_count
    }

    /// Every solution index in vocabulary order
    pub fn solution_indices(&self) -> impl Iterator<Item = WordIndex> {
        (0..self.solution_count).map(|i| i as WordIndex)
    }

    /// Render indices as their words
    #[must_use]
    pub fn texts(&self, indices: &[WordIndex]) -> Vec<&str> {
        indices.iter().map(|&i| self.word(i).text()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    fn small() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["CRANE", "SLATE", "IRATE"]),
            words_from_slice(&["SALET", "ROATE"]),
        )
        .unwrap()
    }

    #[test]
    fn solutions_come_first() {
        let vocab = small();
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.solution_count(), 3);
        assert_eq!(
            vocab.texts(&[0, 1, 2, 3, 4]),
            ["CRANE", "SLATE", "IRATE", "SALET", "ROATE"]
        );
        assert_eq!(vocab.solution_indices().collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn index_of_is_case_insensitive() {
        let vocab = small();
        assert_eq!(vocab.index_of("irate"), Some(2));
        assert_eq!(vocab.index_of("Roate"), Some(4));
        assert_eq!(vocab.index_of("ZZZZZ"), None);
    }

    #[test]
    fn solution_index_rejects_guess_only_words() {
        let vocab = small();
        assert_eq!(vocab.solution_index("slate"), Ok(1));
        assert_eq!(
            vocab.solution_index("SALET"),
            Err(VocabularyError::NotASolution("SALET".to_string()))
        );
        assert_eq!(
            vocab.solution_index("QUERY"),
            Err(VocabularyError::UnknownWord("QUERY".to_string()))
        );
    }

    #[test]
    fn duplicates_across_lists_are_rejected() {
        let result = Vocabulary::new(
            words_from_slice(&["CRANE", "SLATE"]),
            words_from_slice(&["crane"]),
        );
        assert_eq!(result.unwrap_err(), VocabularyError::Duplicate("CRANE".to_string()));
    }

    #[test]
    fn empty_solution_list_is_rejected() {
        let result = Vocabulary::new(Vec::new(), words_from_slice(&["CRANE"]));
        assert_eq!(result.unwrap_err(), VocabularyError::NoSolutions);
    }

    #[test]
    fn embedded_counts_match_consts() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
        assert_eq!(GUESSES.len(), GUESSES_COUNT);

        let vocab = Vocabulary::embedded().unwrap();
        assert_eq!(vocab.solution_count(), SOLUTIONS_COUNT);
        assert_eq!(vocab.len(), SOLUTIONS_COUNT + GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid_uppercase() {
        for &word in SOLUTIONS.iter().chain(GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }
}
