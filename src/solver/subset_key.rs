//! Memoization key for a solution subset
//!
//! cyrb53: two 32-bit multiply-xor lanes folded into a 53-bit value. The key
//! depends on element order, so the same set built along a different path
//! may get a different key. That only costs a cache miss. Distinct subsets
//! sharing a key are an accepted risk.

use crate::vocabulary::WordIndex;

/// Order-sensitive 53-bit hash of the subset's index sequence
///
/// # Examples
/// ```
/// use wordle_optimal::solver::subset_key;
///
/// assert_eq!(subset_key(&[1, 2, 3]), subset_key(&[1, 2, 3]));
/// assert_ne!(subset_key(&[1, 2, 3]), subset_key(&[3, 2, 1]));
/// assert!(subset_key(&[1, 2, 3]) < 1 << 53);
/// ```
#[must_use]
pub fn subset_key(subset: &[WordIndex]) -> u64 {
    let mut h1: u32 = 0xdead_beef;
    let mut h2: u32 = 0x41c6_ce57;

    for &index in subset {
        let n = u32::from(index);
        h1 = (h1 ^ n).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ n).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x1f_ffff) << 32) | u64::from(h1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_fits_in_53_bits() {
        let subsets: [&[WordIndex]; 4] = [&[], &[0], &[0, 1, 2], &[65_535, 12, 9_000]];
        for subset in subsets {
            assert!(subset_key(subset) < 1 << 53);
        }
    }

    #[test]
    fn key_is_deterministic() {
        let subset: Vec<WordIndex> = (100..140).collect();
        assert_eq!(subset_key(&subset), subset_key(&subset.clone()));
    }

    #[test]
    fn key_depends_on_order_and_content() {
        assert_ne!(subset_key(&[4, 5, 6]), subset_key(&[4, 6, 5]));
        assert_ne!(subset_key(&[4, 5, 6]), subset_key(&[4, 5, 7]));
        assert_ne!(subset_key(&[4, 5]), subset_key(&[4, 5, 0]));
    }

    #[test]
    fn small_subsets_do_not_collide() {
        let mut keys = std::collections::HashSet::new();
        for a in 0..40u16 {
            for b in (a + 1)..40 {
                for c in (b + 1)..40 {
                    assert!(keys.insert(subset_key(&[a, b, c])));
                }
            }
        }
    }
}
