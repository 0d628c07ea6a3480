//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = absent (letter not in word)
//! - 1 = present (letter in word, wrong position)
//! - 2 = correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;

/// Feedback pattern for a guess against a hidden solution
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pattern(u8);

impl Pattern {
    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// All absent, also the code of any letter-disjoint pair
    pub const NONE: Self = Self(0);

    /// All correct (immediate solve)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `solution` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the solution's letter pool
    /// 2. Second pass: mark present-but-misplaced letters while the pool still has them
    /// 3. Encode as base-3 number, position 0 least significant
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::core::{Word, Pattern};
    ///
    /// let guess = Word::new("ABBEY").unwrap();
    /// let solution = Word::new("ABYSS").unwrap();
    ///
    /// // A, B correct; B, E absent; Y misplaced
    /// // 2 + 2×3 + 0×9 + 0×27 + 1×81 = 89
    /// assert_eq!(Pattern::calculate(&guess, &solution).value(), 89);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let mut remaining = solution.char_counts();
        let mut digits = [0u8; 5];

        for (i, (&g, &s)) in guess.iter().zip(solution.chars()).enumerate() {
            if g == s {
                digits[i] = 2;
                remaining[usize::from(g - b'A')] -= 1;
            }
        }

        for (digit, &g) in digits.iter_mut().zip(guess) {
            if *digit == 0 {
                let count = &mut remaining[usize::from(g - b'A')];
                if *count > 0 {
                    *digit = 1;
                    *count -= 1;
                }
            }
        }

        Self::encode(digits)
    }

    /// Per-position digits, position 0 first
    #[must_use]
    pub const fn digits(self) -> [u8; 5] {
        let mut digits = [0u8; 5];
        let mut val = self.0;
        let mut i = 0;
        while i < 5 {
            digits[i] = val % 3;
            val /= 3;
            i += 1;
        }
        digits
    }

    /// Build a pattern from per-position digits
    ///
    /// Returns `None` if any digit is not 0, 1 or 2.
    #[must_use]
    pub fn from_digits(digits: [u8; 5]) -> Option<Self> {
        digits
            .iter()
            .all(|&d| d < 3)
            .then(|| Self::encode(digits))
    }

    fn encode(digits: [u8; 5]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            pattern += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}
