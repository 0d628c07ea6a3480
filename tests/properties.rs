//! Property-based tests for the codec, partitioning and search.

use std::sync::OnceLock;

use proptest::prelude::*;

use wordle_optimal::core::{Pattern, Word};
use wordle_optimal::matrix::PatternMatrix;
use wordle_optimal::solver::{Optimal, Partition, SearchEngine};
use wordle_optimal::vocabulary::{Vocabulary, WordIndex};

fn fixture() -> &'static (Vocabulary, PatternMatrix) {
    static FIXTURE: OnceLock<(Vocabulary, PatternMatrix)> = OnceLock::new();
    FIXTURE.get_or_init(|| {
        let vocab = Vocabulary::embedded().unwrap();
        let matrix = PatternMatrix::compute(&vocab);
        (vocab, matrix)
    })
}

/// Strategy: any five uppercase letters.
fn word_strategy() -> impl Strategy<Value = Word> {
    "[A-Z]{5}".prop_map(|s| Word::new(s).unwrap())
}

/// Strategy: distinct solution indices of the embedded vocabulary, shuffled.
fn subset_strategy(
    sizes: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = Vec<WordIndex>> {
    let solutions: Vec<WordIndex> = fixture().0.solution_indices().collect();
    prop::sample::subsequence(solutions, sizes).prop_shuffle()
}

proptest! {
    // 1. Decoding a code into digits and re-encoding gives the same code
    #[test]
    fn digits_round_trip(guess in word_strategy(), solution in word_strategy()) {
        let pattern = Pattern::calculate(&guess, &solution);
        prop_assert!(usize::from(pattern.value()) < Pattern::COUNT);
        prop_assert_eq!(Pattern::from_digits(pattern.digits()), Some(pattern));
    }

    // 2. 242 occurs exactly when guess equals solution
    #[test]
    fn perfect_iff_equal(guess in word_strategy(), solution in word_strategy()) {
        let pattern = Pattern::calculate(&guess, &solution);
        prop_assert_eq!(pattern.is_perfect(), guess == solution);
        prop_assert!(Pattern::calculate(&guess, &guess).is_perfect());
    }

    // 3. Letter-disjoint pairs always score all absent
    #[test]
    fn disjoint_pairs_are_none(guess in word_strategy(), solution in word_strategy()) {
        if !guess.shares_letters(&solution) {
            prop_assert_eq!(Pattern::calculate(&guess, &solution), Pattern::NONE);
        }
    }

    // 4. Groups cover the subset exactly; the 242 group holds only the guess
    #[test]
    fn partition_is_complete(
        subset in subset_strategy(1..=20),
        guess in 0..fixture().0.len() as WordIndex,
    ) {
        let (_, matrix) = fixture();
        let partition = Partition::new(matrix, guess, &subset);

        let mut members: Vec<WordIndex> =
            partition.iter().flat_map(|(_, group)| group.iter().copied()).collect();
        let mut expected = subset.clone();
        members.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(members, expected);

        if let Some(group) = partition.group(Pattern::PERFECT) {
            prop_assert_eq!(group, &[guess][..]);
        }
    }

    // 5. Singletons are worth 1, pairs 1.5 with both words
    #[test]
    fn base_cases(subset in subset_strategy(1..=2)) {
        let (_, matrix) = fixture();
        let optimal = SearchEngine::new(matrix).optimal(&subset);

        if let [only] = subset[..] {
            prop_assert_eq!(optimal.value(), 1.0);
            prop_assert_eq!(optimal.guesses(), &[only][..]);
        } else {
            prop_assert_eq!(optimal.value(), 1.5);
            prop_assert_eq!(optimal.guesses(), &subset[..]);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // 6. 1 <= value < size for every subset of three or more
    #[test]
    fn value_is_bounded(subset in subset_strategy(3..=6)) {
        let (_, matrix) = fixture();
        let optimal = SearchEngine::new(matrix).optimal(&subset);

        prop_assert!(optimal.value() >= 1.0);
        prop_assert!(optimal.value() < subset.len() as f64);
        prop_assert!(!optimal.guesses().is_empty());
    }

    // 7. Merging the bests of two halves of the guess space matches the whole
    #[test]
    fn merge_over_split_guess_space(subset in subset_strategy(3..=5), split in 1..100usize) {
        let (vocab, matrix) = fixture();
        let split = split.min(vocab.len() - 1);
        let mut engine = SearchEngine::new(matrix);

        let mut best_of = |range: std::ops::Range<usize>| -> Option<Optimal> {
            range
                .filter_map(|g| engine.optimal_for_guess(&subset, g as WordIndex))
                .reduce(Optimal::merge)
        };

        let mut whole = best_of(0..vocab.len()).unwrap();
        let left = best_of(0..split);
        let right = best_of(split..vocab.len());
        let mut merged = match (left, right) {
            (Some(l), Some(r)) => l.merge(r),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => unreachable!("in-subset guesses are always informative"),
        };

        whole.sort_guesses();
        merged.sort_guesses();
        prop_assert_eq!(&merged, &whole);

        let sequential = SearchEngine::new(matrix).optimal(&subset);
        prop_assert_eq!(merged.total(), sequential.total());
    }
}
