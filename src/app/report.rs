use crate::core::{ConfigProvider, PalindromeMatch, VolumeKind};
use std::fmt::Write;

/// Human-readable console rendering of search results.
pub struct ReportFormatter<'a, C: ConfigProvider> {
    config: &'a C,
}

impl<'a, C: ConfigProvider> ReportFormatter<'a, C> {
    pub fn new(config: &'a C) -> Self {
        Self { config }
    }

    pub fn volume_status(&self, found: &PalindromeMatch) -> String {
        let unit = self.config.volume_unit();
        match (found.volume_is_palindromic, found.kind) {
            (false, _) => format!("(whole number {})", unit),
            (true, VolumeKind::Whole) => format!("(palindromic whole {})", unit),
            (true, VolumeKind::PalindromicDecimal) => format!("(palindromic decimal {})", unit),
        }
    }

    /// e.g. `25 litres = £32.23 (whole number litres)`
    pub fn format_match(&self, found: &PalindromeMatch) -> String {
        format!(
            "{} {} = {}{} {}",
            found.formatted_volume(),
            self.config.volume_unit(),
            self.config.currency_symbol(),
            found.cost_major_units,
            self.volume_status(found)
        )
    }

    /// Header, count, the first `display_limit` matches and a truncation note.
    pub fn format_results(&self, price: f64, results: &[PalindromeMatch]) -> String {
        let mut out = String::new();
        let limit = self.config.display_limit();

        let _ = writeln!(out, "\nFuel Price: {:.1}p/{}", price, self.singular_unit());
        let _ = writeln!(out, "Found {} palindromic costs:\n", results.len());

        for found in results.iter().take(limit) {
            let _ = writeln!(out, "{}", self.format_match(found));
        }

        if results.len() > limit {
            let _ = writeln!(out, "\n... and {} more results", results.len() - limit);
        }
        out
    }

    pub fn format_nearest(&self, target_volume: f64, found: Option<&PalindromeMatch>) -> String {
        match found {
            Some(found) => format!(
                "\nNearest palindromic cost:\n{}\nDifference: {:.2} {}\n",
                self.format_match(found),
                (found.volume - target_volume).abs(),
                self.config.volume_unit()
            ),
            None => "\nNo palindromic costs found in search radius\n".to_string(),
        }
    }

    pub fn format_near_cost(&self, target_major_units: f64, results: &[PalindromeMatch]) -> String {
        if results.is_empty() {
            return "\nNo palindromic costs found in search radius\n".to_string();
        }

        let mut out = format!("\nFound {} palindromic cost(s):\n\n", results.len());
        for found in results {
            let _ = writeln!(out, "{}", self.format_match(found));
            let _ = writeln!(
                out,
                "  Price difference: {}{:.2}",
                self.config.currency_symbol(),
                (found.cost_value() - target_major_units).abs()
            );
        }
        out
    }

    /// `litres` -> `litre`, used in per-unit labels.
    fn singular_unit(&self) -> &str {
        let unit = self.config.volume_unit();
        unit.strip_suffix('s').unwrap_or(unit)
    }
}

pub fn format_millis(elapsed: std::time::Duration) -> String {
    format!("{:.3}ms", elapsed.as_secs_f64() * 1000.0)
}
