use crate::core::classifier::{CostClassifier, DEFAULT_EPSILON};
use crate::core::generator::collect_in_range;
use crate::domain::model::{PalindromeMatch, PriceResults};

/// Entry point for all palindromic cost searches.
///
/// Stateless apart from the whole-volume tolerance; every call is
/// independent and returns the same sequence for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalindromeSearch {
    epsilon: f64,
}

impl Default for PalindromeSearch {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PalindromeSearch {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// All matches with volume in `[1, max_volume]`, in ascending cost order.
    pub fn forward_search(&self, price: f64, max_volume: u32) -> Vec<PalindromeMatch> {
        let Some(classifier) = CostClassifier::new(price, self.epsilon) else {
            tracing::debug!(price, "non-positive price, nothing to search");
            return Vec::new();
        };

        let min_minor = price.floor() as u64;
        let max_minor = (f64::from(max_volume) * price).ceil() as u64;
        let costs = collect_in_range(min_minor, max_minor);
        tracing::debug!(
            price,
            max_volume,
            min_minor,
            max_minor,
            candidates = costs.len(),
            "forward search window"
        );

        let mut results = Vec::new();
        for minor in costs {
            let Some(candidate) = classifier.candidate(minor) else {
                continue;
            };
            // volume grows with cost, so nothing after this fits either
            if candidate.volume > f64::from(max_volume) {
                break;
            }
            if candidate.volume < 1.0 {
                continue;
            }
            results.extend(classifier.classify(candidate));
        }
        results
    }

    /// The match closest to `target_volume` within `radius` volume units.
    /// Ties keep the earlier (cheaper) match.
    pub fn nearest_to_target(
        &self,
        price: f64,
        target_volume: f64,
        radius: u32,
    ) -> Option<PalindromeMatch> {
        let upper = (target_volume + f64::from(radius)).max(0.0);
        let max_volume = upper.min(f64::from(u32::MAX)) as u32;
        let lower = (target_volume - f64::from(radius)).max(1.0);

        let mut nearest: Option<PalindromeMatch> = None;
        let mut best_diff = f64::MAX;
        for found in self.forward_search(price, max_volume) {
            if found.volume < lower {
                continue;
            }
            let diff = (found.volume - target_volume).abs();
            if diff < best_diff {
                best_diff = diff;
                nearest = Some(found);
            }
        }
        nearest
    }

    /// All matches whose cost lies within `radius_minor_units` of
    /// `target_major_units`. Volumes only need to be at least 1.
    pub fn near_target_cost(
        &self,
        price: f64,
        target_major_units: f64,
        radius_minor_units: u32,
    ) -> Vec<PalindromeMatch> {
        let Some(classifier) = CostClassifier::new(price, self.epsilon) else {
            return Vec::new();
        };

        // Out-of-range targets saturate at the i64 bounds.
        let target_minor = (target_major_units * 100.0).round() as i64;
        let radius = i64::from(radius_minor_units);
        let min_minor = target_minor.saturating_sub(radius).max(1);
        let max_minor = target_minor.saturating_add(radius);
        if max_minor < min_minor {
            return Vec::new();
        }

        let costs = collect_in_range(min_minor as u64, max_minor as u64);
        tracing::debug!(
            price,
            target_minor,
            min_minor,
            max_minor,
            candidates = costs.len(),
            "near cost window"
        );

        costs
            .into_iter()
            .filter_map(|minor| classifier.candidate(minor))
            .filter(|candidate| candidate.volume >= 1.0)
            .filter_map(|candidate| classifier.classify(candidate))
            .collect()
    }

    /// Forward search for each price, in input order. Duplicate prices get
    /// their own entry.
    pub fn batch(&self, prices: &[f64], max_volume: u32) -> Vec<PriceResults> {
        prices
            .iter()
            .map(|&price| PriceResults {
                price,
                results: self.forward_search(price, max_volume),
            })
            .collect()
    }
}

pub fn forward_search(price: f64, max_volume: u32) -> Vec<PalindromeMatch> {
    PalindromeSearch::default().forward_search(price, max_volume)
}

pub fn nearest_to_target(price: f64, target_volume: f64, radius: u32) -> Option<PalindromeMatch> {
    PalindromeSearch::default().nearest_to_target(price, target_volume, radius)
}

pub fn near_target_cost(
    price: f64,
    target_major_units: f64,
    radius_minor_units: u32,
) -> Vec<PalindromeMatch> {
    PalindromeSearch::default().near_target_cost(price, target_major_units, radius_minor_units)
}

pub fn batch(prices: &[f64], max_volume: u32) -> Vec<PriceResults> {
    PalindromeSearch::default().batch(prices, max_volume)
}
