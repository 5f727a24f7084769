use crate::core::palindrome::{is_integer_palindrome, is_string_palindrome};
use crate::domain::model::{PalindromeMatch, VolumeKind};

pub const DEFAULT_EPSILON: f64 = 0.01;

/// Formats a minor-unit amount as major units with exactly two decimals.
pub fn format_major_units(minor_units: u64) -> String {
    format!("{:.2}", minor_units as f64 / 100.0)
}

pub fn is_effectively_whole(value: f64, epsilon: f64) -> bool {
    (value - value.round()).abs() < epsilon
}

/// A palindromic minor-unit cost whose major-unit string is also palindromic,
/// together with the volume it implies at the classifier's price.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub minor_units: u64,
    pub cost_major_units: String,
    pub volume: f64,
}

/// Turns palindromic minor-unit costs into matches for one price.
#[derive(Debug, Clone, Copy)]
pub struct CostClassifier {
    reciprocal_price: f64,
    epsilon: f64,
}

impl CostClassifier {
    /// `None` for prices that are zero, negative or not finite; such prices
    /// have no matches.
    pub fn new(price: f64, epsilon: f64) -> Option<Self> {
        if !price.is_finite() || price <= 0.0 {
            return None;
        }
        let reciprocal_price = 1.0 / price;
        if !reciprocal_price.is_finite() {
            return None;
        }
        Some(Self {
            reciprocal_price,
            epsilon,
        })
    }

    /// First filter: the major-unit string must read the same both ways.
    pub fn candidate(&self, minor_units: u64) -> Option<Candidate> {
        let cost_major_units = format_major_units(minor_units);
        if !is_string_palindrome(&cost_major_units) {
            return None;
        }
        Some(Candidate {
            minor_units,
            cost_major_units,
            volume: minor_units as f64 * self.reciprocal_price,
        })
    }

    /// Classifies the candidate's volume as whole or palindromic decimal.
    /// Fractional volumes whose 2-decimal form is not palindromic are dropped.
    pub fn classify(&self, candidate: Candidate) -> Option<PalindromeMatch> {
        let Candidate {
            cost_major_units,
            volume,
            ..
        } = candidate;

        if is_effectively_whole(volume, self.epsilon) {
            let whole = volume.round();
            return Some(PalindromeMatch {
                volume: whole,
                cost_major_units,
                volume_is_palindromic: is_integer_palindrome(whole as i64),
                kind: VolumeKind::Whole,
            });
        }

        let rounded = (volume * 100.0).round() / 100.0;
        if !is_string_palindrome(&format!("{:.2}", rounded)) {
            return None;
        }
        Some(PalindromeMatch {
            volume: rounded,
            cost_major_units,
            volume_is_palindromic: true,
            kind: VolumeKind::PalindromicDecimal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_major_units() {
        let cases = [
            (0, "0.00"),
            (1, "0.01"),
            (10, "0.10"),
            (100, "1.00"),
            (101, "1.01"),
            (12345, "123.45"),
            (3223, "32.23"),
        ];
        for (minor, expected) in cases {
            assert_eq!(format_major_units(minor), expected);
        }
    }

    #[test]
    fn test_is_effectively_whole() {
        assert!(is_effectively_whole(5.0, 0.01));
        assert!(is_effectively_whole(5.001, 0.01));
        assert!(!is_effectively_whole(5.02, 0.01));
        assert!(is_effectively_whole(-3.001, 0.01));
        assert!(!is_effectively_whole(3.14, 0.01));
        assert!(is_effectively_whole(5.1, 0.2));
        assert!(is_effectively_whole(0.0, 0.01));
    }

    #[test]
    fn test_degenerate_prices_have_no_classifier() {
        assert!(CostClassifier::new(0.0, DEFAULT_EPSILON).is_none());
        assert!(CostClassifier::new(-12.5, DEFAULT_EPSILON).is_none());
        assert!(CostClassifier::new(f64::NAN, DEFAULT_EPSILON).is_none());
        assert!(CostClassifier::new(f64::INFINITY, DEFAULT_EPSILON).is_none());
        assert!(CostClassifier::new(f64::MIN_POSITIVE / 4.0, DEFAULT_EPSILON).is_none());
    }

    #[test]
    fn test_candidate_requires_palindromic_major_string() {
        let classifier = CostClassifier::new(128.9, DEFAULT_EPSILON).unwrap();
        // 121 is palindromic in minor units but "1.21" is not
        assert!(classifier.candidate(121).is_none());

        let candidate = classifier.candidate(3223).unwrap();
        assert_eq!(candidate.cost_major_units, "32.23");
        assert!((candidate.volume - 25.0039).abs() < 1e-3);
    }

    #[test]
    fn test_classify_whole_volume() {
        let classifier = CostClassifier::new(128.9, DEFAULT_EPSILON).unwrap();
        let candidate = classifier.candidate(3223).unwrap();
        let found = classifier.classify(candidate).unwrap();

        assert_eq!(found.volume, 25.0);
        assert_eq!(found.cost_major_units, "32.23");
        assert!(!found.volume_is_palindromic);
        assert_eq!(found.kind, VolumeKind::Whole);
    }

    #[test]
    fn test_classify_palindromic_whole_volume() {
        let classifier = CostClassifier::new(131.0, DEFAULT_EPSILON).unwrap();
        let found = classifier
            .classify(classifier.candidate(1441).unwrap())
            .unwrap();
        assert_eq!(found.volume, 11.0);
        assert!(found.volume_is_palindromic);
    }

    #[test]
    fn test_classify_palindromic_decimal_volume() {
        let classifier = CostClassifier::new(128.9, DEFAULT_EPSILON).unwrap();
        let found = classifier
            .classify(classifier.candidate(5005).unwrap())
            .unwrap();
        assert_eq!(found.volume, 38.83);
        assert_eq!(found.cost_major_units, "50.05");
        assert!(found.volume_is_palindromic);
        assert_eq!(found.kind, VolumeKind::PalindromicDecimal);
    }

    #[test]
    fn test_classify_drops_plain_decimal_volume() {
        let classifier = CostClassifier::new(128.9, DEFAULT_EPSILON).unwrap();
        // 10.01 / 1.289 = 7.7657...
        let candidate = classifier.candidate(1001).unwrap();
        assert!(classifier.classify(candidate).is_none());
    }

    #[test]
    fn test_wider_epsilon_accepts_more_whole_volumes() {
        let strict = CostClassifier::new(128.9, DEFAULT_EPSILON).unwrap();
        let loose = CostClassifier::new(128.9, 0.3).unwrap();
        // 10.01 / 1.289 = 7.7657..., within 0.3 of 8
        assert!(strict.classify(strict.candidate(1001).unwrap()).is_none());
        let found = loose.classify(loose.candidate(1001).unwrap()).unwrap();
        assert_eq!(found.volume, 8.0);
        assert_eq!(found.kind, VolumeKind::Whole);
    }
}
