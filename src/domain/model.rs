use serde::{Deserialize, Serialize};
use std::fmt;

/// How the volume of a match was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeKind {
    /// Volume is effectively a whole number.
    Whole,
    /// Volume is fractional but its 2-decimal form reads the same both ways.
    PalindromicDecimal,
}

impl VolumeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeKind::Whole => "whole",
            VolumeKind::PalindromicDecimal => "palindromic_decimal",
        }
    }
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A volume whose cost is palindromic in both minor units and the 2-decimal
/// major-unit string.
///
/// Produced fresh by every search and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeMatch {
    pub volume: f64,
    /// Always formatted with exactly two decimals, e.g. `"32.23"`.
    pub cost_major_units: String,
    pub volume_is_palindromic: bool,
    pub kind: VolumeKind,
}

impl PalindromeMatch {
    pub fn is_whole_volume(&self) -> bool {
        self.volume == self.volume.floor()
    }

    /// Volume with no decimals when whole, otherwise two.
    pub fn formatted_volume(&self) -> String {
        if self.is_whole_volume() {
            format!("{:.0}", self.volume)
        } else {
            format!("{:.2}", self.volume)
        }
    }

    /// The cost parsed back to a number; only used for display arithmetic.
    pub fn cost_value(&self) -> f64 {
        self.cost_major_units.parse().unwrap_or(0.0)
    }
}

/// One entry of a batch run: the price and its forward-search matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResults {
    pub price: f64,
    pub results: Vec<PalindromeMatch>,
}

impl PriceResults {
    /// First entry for `price`, if the batch contains one.
    pub fn find(batch: &[PriceResults], price: f64) -> Option<&PriceResults> {
        batch.iter().find(|entry| entry.price == price)
    }
}
