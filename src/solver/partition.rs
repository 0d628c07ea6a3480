//! Grouping a solution subset by the feedback a guess would produce

use crate::core::Pattern;
use crate::matrix::PatternMatrix;
use crate::vocabulary::WordIndex;

const NO_GROUP: u8 = u8::MAX;

/// Solutions grouped by feedback code
///
/// Groups appear in the order their code was first seen, and members keep
/// the order of the input subset.
#[derive(Debug, Clone)]
pub struct Partition {
    slots: [u8; Pattern::COUNT],
    groups: Vec<(Pattern, Vec<WordIndex>)>,
}

impl Partition {
    /// Split `subset` by the feedback each member gives against `guess`
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::matrix::PatternMatrix;
    /// use wordle_optimal::solver::Partition;
    /// use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
    ///
    /// let vocab = Vocabulary::new(words_from_slice(&["CRANE", "SLATE", "IRATE"]), Vec::new()).unwrap();
    /// let matrix = PatternMatrix::compute(&vocab);
    ///
    /// let partition = Partition::new(&matrix, 0, &[0, 1, 2]);
    /// assert_eq!(partition.iter().count(), 3);
    /// ```
    #[must_use]
    pub fn new(matrix: &PatternMatrix, guess: WordIndex, subset: &[WordIndex]) -> Self {
        let mut partition = Self {
            slots: [NO_GROUP; Pattern::COUNT],
            groups: Vec::new(),
        };

        for &solution in subset {
            let pattern = matrix.lookup(guess, solution);
            let slot = &mut partition.slots[usize::from(pattern.value())];
            if *slot == NO_GROUP {
                *slot = partition.groups.len() as u8;
                partition.groups.push((pattern, vec![solution]));
            } else {
                partition.groups[usize::from(*slot)].1.push(solution);
            }
        }

        partition
    }

    /// A single group means the guess tells nothing about this subset
    #[must_use]
    pub fn is_uninformative(&self) -> bool {
        self.groups.len() <= 1
    }

    /// Members that produce `pattern`, if any
    #[must_use]
    pub fn group(&self, pattern: Pattern) -> Option<&[WordIndex]> {
        match self.slots[usize::from(pattern.value())] {
            NO_GROUP => None,
            slot => Some(&self.groups[usize::from(slot)].1),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &[WordIndex])> {
        self.groups
            .iter()
            .map(|(pattern, members)| (*pattern, members.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{Vocabulary, loader::words_from_slice};

    fn setup() -> (Vocabulary, PatternMatrix) {
        let vocab = Vocabulary::new(
            words_from_slice(&["CRANE", "CRATE", "GRATE", "IRATE", "SLATE", "HUMOR"]),
            words_from_slice(&["BLIMP", "JUMBO"]),
        )
        .unwrap();
        let matrix = PatternMatrix::compute(&vocab);
        (vocab, matrix)
    }

    #[test]
    fn groups_cover_subset_exactly() {
        let (vocab, matrix) = setup();
        let subset: Vec<WordIndex> = vocab.solution_indices().collect();

        for guess in 0..vocab.len() as WordIndex {
            let partition = Partition::new(&matrix, guess, &subset);
            let mut members: Vec<WordIndex> =
                partition.iter().flat_map(|(_, g)| g.iter().copied()).collect();
            members.sort_unstable();
            assert_eq!(members, subset);
        }
    }

    #[test]
    fn perfect_group_holds_only_the_guess() {
        let (vocab, matrix) = setup();
        let subset: Vec<WordIndex> = vocab.solution_indices().collect();
        let crate_idx = vocab.index_of("CRATE").unwrap();

        let partition = Partition::new(&matrix, crate_idx, &subset);
        assert_eq!(partition.group(Pattern::PERFECT), Some(&[crate_idx][..]));
    }

    #[test]
    fn members_keep_input_order_within_group() {
        let (vocab, matrix) = setup();
        let jumbo = vocab.index_of("JUMBO").unwrap();
        let grate = vocab.index_of("GRATE").unwrap();
        let irate = vocab.index_of("IRATE").unwrap();
        let crane = vocab.index_of("CRANE").unwrap();

        // JUMBO shares no letter with any of these three
        let partition = Partition::new(&matrix, jumbo, &[irate, crane, grate]);
        assert!(partition.is_uninformative());
        assert_eq!(partition.group(Pattern::NONE), Some(&[irate, crane, grate][..]));
    }

    #[test]
    fn groups_follow_first_encounter_order() {
        let (vocab, matrix) = setup();
        let slate = vocab.index_of("SLATE").unwrap();
        let humor = vocab.index_of("HUMOR").unwrap();
        let crate_idx = vocab.index_of("CRATE").unwrap();

        let partition = Partition::new(&matrix, slate, &[humor, slate, crate_idx]);
        let codes: Vec<Pattern> = partition.iter().map(|(p, _)| p).collect();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes[0], matrix.lookup(slate, humor));
        assert_eq!(codes[1], Pattern::PERFECT);
    }
}
