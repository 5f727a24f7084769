/// Whether the decimal digits of `n` read the same in both directions.
///
/// Negative numbers are never palindromes.
pub fn is_integer_palindrome(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    if n < 10 {
        return true;
    }

    let original = n as u64;
    let mut rest = original;
    let mut reversed: u64 = 0;

    while rest > 0 {
        // i64::MAX reversed can exceed u64; such a number is not a palindrome anyway
        reversed = match reversed.checked_mul(10).and_then(|r| r.checked_add(rest % 10)) {
            Some(r) => r,
            None => return false,
        };
        rest /= 10;
    }

    original == reversed
}

/// Byte-wise mirror comparison. No normalisation of case or whitespace.
pub fn is_string_palindrome(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (mut i, mut j) = (0, bytes.len());
    while i + 1 < j {
        j -= 1;
        if bytes[i] != bytes[j] {
            return false;
        }
        i += 1;
    }
    true
}

/// Number of decimal digits in `n`; zero has one digit.
pub fn digit_count(mut n: u64) -> u32 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_integer_palindrome() {
        let cases = [
            (0, true),
            (5, true),
            (-121, false),
            (121, true),
            (1221, true),
            (12321, true),
            (123, false),
            (1234, false),
            (123454321, true),
            (123456789, false),
            (i64::MAX, false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_integer_palindrome(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_is_string_palindrome() {
        let cases = [
            ("", true),
            ("a", true),
            ("aba", true),
            ("abba", true),
            ("12321", true),
            ("a b a", true),
            ("abc", false),
            ("abcd", false),
            ("50.05", true),
            ("32.14", false),
            ("Aba", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_string_palindrome(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    proptest! {
        #[test]
        fn integer_and_string_checks_agree(n in 0i64..10_000_000_000) {
            prop_assert_eq!(is_integer_palindrome(n), is_string_palindrome(&n.to_string()));
        }

        #[test]
        fn digit_count_matches_decimal_length(n in any::<u64>()) {
            prop_assert_eq!(digit_count(n) as usize, n.to_string().len());
        }
    }
}
