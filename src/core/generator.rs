//! Palindrome generation by mirroring a half-length seed.
//!
//! Every palindrome of a given length is fully determined by its leading
//! `ceil(digits / 2)` digits, so walking the seeds in ascending order yields
//! the palindromes of that length in ascending order with no duplicates.

use crate::core::palindrome::digit_count;

/// Lazily yields every `digits`-long palindrome without leading zeros, ascending.
///
/// Stops early if a palindrome would not fit in `u64` (lengths above 19).
#[derive(Debug, Clone)]
pub struct PalindromesOfLength {
    digits: u32,
    next_seed: u64,
    last_seed: u64,
    shift: u64,
}

impl PalindromesOfLength {
    pub fn new(digits: u32) -> Self {
        if digits == 0 || digits > 20 {
            return Self::empty(digits);
        }

        let half = digits.div_ceil(2);
        let first = 10u64.pow(half - 1);
        let last = 10u64.pow(half) - 1;

        match 10u64.checked_pow(digits - half) {
            Some(shift) => Self {
                digits,
                next_seed: first,
                last_seed: last,
                shift,
            },
            None => Self::empty(digits),
        }
    }

    /// Like `new`, but starts from the seed whose palindromes reach `min`,
    /// skipping every seed that could only produce smaller values.
    pub fn starting_at(digits: u32, min: u64) -> Self {
        let mut iter = Self::new(digits);
        if iter.next_seed <= iter.last_seed {
            iter.next_seed = (min / iter.shift).clamp(iter.next_seed, iter.last_seed);
        }
        iter
    }

    fn empty(digits: u32) -> Self {
        Self {
            digits,
            next_seed: 1,
            last_seed: 0,
            shift: 1,
        }
    }

    /// Mirrors `seed` into a full palindrome. Odd lengths share the seed's
    /// last digit as the centre.
    fn mirror(&self, seed: u64) -> Option<u64> {
        let mut tail = if self.digits % 2 == 1 { seed / 10 } else { seed };
        let mut mirrored = 0u64;
        while tail > 0 {
            mirrored = mirrored * 10 + tail % 10;
            tail /= 10;
        }
        seed.checked_mul(self.shift)?.checked_add(mirrored)
    }
}

impl Iterator for PalindromesOfLength {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next_seed > self.last_seed {
            return None;
        }
        let seed = self.next_seed;
        self.next_seed += 1;

        match self.mirror(seed) {
            Some(value) => Some(value),
            None => {
                self.next_seed = self.last_seed + 1;
                None
            }
        }
    }
}

/// All palindromes with exactly `digits` digits, ascending.
///
/// `digits == 1` gives 1..=9 and `digits == 2` gives 11, 22, ..., 99; in
/// general there are `9 * 10^(ceil(digits/2) - 1)` of them.
pub fn generate_for_length(digits: u32) -> Vec<u64> {
    PalindromesOfLength::new(digits).collect()
}

/// All palindromes in `[min, max]`, ascending. Empty when `min > max`.
pub fn collect_in_range(min: u64, max: u64) -> Vec<u64> {
    if min > max {
        return Vec::new();
    }

    let mut results = Vec::new();
    for digits in digit_count(min)..=digit_count(max) {
        results.extend(
            PalindromesOfLength::starting_at(digits, min)
                .skip_while(|&p| p < min)
                .take_while(|&p| p <= max),
        );
    }

    tracing::trace!(min, max, found = results.len(), "collected palindromes");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palindrome::is_integer_palindrome;
    use proptest::prelude::*;

    #[test]
    fn test_generate_single_and_double_digits() {
        assert_eq!(generate_for_length(1), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(
            generate_for_length(2),
            vec![11, 22, 33, 44, 55, 66, 77, 88, 99]
        );
    }

    #[test]
    fn test_generate_three_and_four_digits() {
        let three = generate_for_length(3);
        assert_eq!(three.len(), 90);
        assert_eq!(
            &three[..10],
            &[101, 111, 121, 131, 141, 151, 161, 171, 181, 191]
        );
        assert_eq!(*three.last().unwrap(), 999);

        let four = generate_for_length(4);
        assert_eq!(four.len(), 90);
        assert_eq!(
            &four[..10],
            &[1001, 1111, 1221, 1331, 1441, 1551, 1661, 1771, 1881, 1991]
        );
    }

    #[test]
    fn test_generate_counts_and_order() {
        for digits in 1..=7u32 {
            let values = generate_for_length(digits);
            let expected = 9 * 10usize.pow(digits.div_ceil(2) - 1);
            assert_eq!(values.len(), expected, "digits {}", digits);
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values
                .iter()
                .all(|&v| digit_count(v) == digits && is_integer_palindrome(v as i64)));
        }
    }

    #[test]
    fn test_generate_degenerate_lengths() {
        assert!(generate_for_length(0).is_empty());
        let mut longest = PalindromesOfLength::new(19);
        assert_eq!(longest.next(), Some(1_000_000_000_000_000_001));
    }

    #[test]
    fn test_collect_in_range() {
        assert_eq!(collect_in_range(10, 50), vec![11, 22, 33, 44]);
        assert!(collect_in_range(50, 10).is_empty());
        assert_eq!(collect_in_range(0, 9), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(collect_in_range(3223, 3223), vec![3223]);
        assert!(collect_in_range(3224, 3232).is_empty());

        let wide = collect_in_range(1, 999);
        assert_eq!(wide.len(), 9 + 9 + 90);
    }

    #[test]
    fn test_collect_in_range_starts_near_min() {
        assert_eq!(
            collect_in_range(9_223_372_036_000_000_000, i64::MAX as u64),
            vec![9_223_372_036_302_733_229]
        );
        assert_eq!(collect_in_range(12_345, 12_421), vec![12_421]);
    }

    #[test]
    fn test_starting_at_skips_low_seeds() {
        let mut from = PalindromesOfLength::starting_at(4, 3300);
        assert_eq!(from.next(), Some(3333));
        assert_eq!(from.next(), Some(3443));

        let below: Vec<u64> = PalindromesOfLength::starting_at(3, 5).collect();
        assert_eq!(below, generate_for_length(3));
    }

    proptest! {
        #[test]
        fn collect_matches_brute_force(min in 0u64..20_000, span in 0u64..5_000) {
            let max = min + span;
            let brute: Vec<u64> = (min.max(1)..=max)
                .filter(|&n| is_integer_palindrome(n as i64))
                .collect();
            prop_assert_eq!(collect_in_range(min, max), brute);
        }
    }
}
