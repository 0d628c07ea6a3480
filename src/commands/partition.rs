//! Partition command
//!
//! Shows how one guess splits the selected subset by feedback.

use super::select::{Selection, SelectionError};
use crate::core::Pattern;
use crate::matrix::PatternMatrix;
use crate::solver::Partition;
use crate::vocabulary::{Vocabulary, VocabularyError};

/// One feedback group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionGroup {
    pub pattern: Pattern,
    pub members: Vec<String>,
}

/// Result of partitioning a subset by a guess
#[derive(Debug, Clone)]
pub struct PartitionResult {
    pub guess: String,
    pub subset_size: usize,
    /// Groups in first-encounter order
    pub groups: Vec<PartitionGroup>,
}

impl PartitionResult {
    /// The guess splits nothing off
    #[must_use]
    pub fn is_uninformative(&self) -> bool {
        self.groups.len() <= 1
    }
}

/// Group the selected subset by the feedback `guess` gives
///
/// # Errors
/// Returns `SelectionError` if `guess` is not in the vocabulary or the
/// subset cannot be resolved.
pub fn partition_subset(
    vocabulary: &Vocabulary,
    matrix: &PatternMatrix,
    guess: &str,
    selection: &Selection,
) -> Result<PartitionResult, SelectionError> {
    let guess_index = vocabulary
        .index_of(guess)
        .ok_or_else(|| VocabularyError::UnknownWord(guess.to_ascii_uppercase()))?;
    let subset = selection.resolve(vocabulary)?;

    let partition = Partition::new(matrix, guess_index, &subset);
    let groups = partition
        .iter()
        .map(|(pattern, members)| PartitionGroup {
            pattern,
            members: vocabulary
                .texts(members)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();

    Ok(PartitionResult {
        guess: vocabulary.word(guess_index).text().to_string(),
        subset_size: subset.len(),
        groups,
    })
}
