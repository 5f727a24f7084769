use crate::app::export::CsvExporter;
use crate::app::report::{format_millis, ReportFormatter};
use crate::config::Settings;
use crate::core::{ConfigProvider, PalindromeSearch, Storage};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

#[cfg(feature = "cli")]
use crate::config::CliConfig;
#[cfg(feature = "cli")]
use crate::utils::error::FuelError;
#[cfg(feature = "cli")]
use crate::utils::validation::{parse_price, validate_finite, validate_path};

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Usage,
    Web,
    Batch { prices: Vec<f64> },
    NearestVolume { price: f64, target_volume: f64 },
    NearCost { price: f64, target_major_units: f64 },
    Forward { price: f64 },
}

#[cfg(feature = "cli")]
impl Mode {
    /// Precedence: web, batch, reverse volume, reverse cost, forward.
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        if cli.web {
            return Ok(Mode::Web);
        }

        if let Some(csv) = &cli.csv {
            validate_path("csv", csv)?;
        }

        if !cli.batch.is_empty() {
            let prices = cli
                .batch
                .iter()
                .map(|raw| parse_price("batch", raw))
                .collect::<Result<Vec<f64>>>()?;
            return Ok(Mode::Batch { prices });
        }

        let Some(price) = cli.price else {
            if cli.reverse_volume.is_some() || cli.reverse_cost.is_some() {
                return Err(FuelError::MissingConfigError {
                    field: "price".to_string(),
                });
            }
            return Ok(Mode::Usage);
        };
        validate_finite("price", price)?;

        if let Some(target_volume) = cli.reverse_volume.filter(|v| *v > 0.0) {
            validate_finite("reverse-volume", target_volume)?;
            return Ok(Mode::NearestVolume {
                price,
                target_volume,
            });
        }

        if let Some(target_major_units) = cli.reverse_cost.filter(|v| *v > 0.0) {
            validate_finite("reverse-cost", target_major_units)?;
            return Ok(Mode::NearCost {
                price,
                target_major_units,
            });
        }

        Ok(Mode::Forward { price })
    }
}

pub const USAGE: &str = "Palindromic Fuel Cost Calculator
================================

Usage:
  Normal mode:
    palindromic-fuel --price 128.9 --max 100

  With CSV export:
    palindromic-fuel --price 128.9 --max 100 --csv results.csv

  Reverse lookup (find nearest to target volume):
    palindromic-fuel --price 128.9 --reverse-volume 50 --radius 100

  Reverse lookup (find palindromes near target cost):
    palindromic-fuel --price 128.9 --reverse-cost 50.00 --radius 500

  Batch mode:
    palindromic-fuel --batch 128.9,135.7,142.3 --max 1000

  Batch mode with CSV export:
    palindromic-fuel --batch 128.9,135.7,142.3 --max 1000 --csv batch.csv

  Web server mode:
    palindromic-fuel --web
    palindromic-fuel --web --port 3000
";

/// Runs one console mode: search, print, optionally export.
pub struct Runner<S: Storage> {
    settings: Settings,
    search: PalindromeSearch,
    exporter: CsvExporter<S>,
}

impl<S: Storage> Runner<S> {
    pub fn new(storage: S, settings: Settings) -> Self {
        Self {
            search: PalindromeSearch::new(settings.epsilon()),
            exporter: CsvExporter::new(storage),
            settings,
        }
    }

    /// Writes the report to `out`. Web mode is not handled here.
    pub async fn run<W: Write>(&self, mode: &Mode, csv: Option<&str>, out: &mut W) -> Result<()> {
        let report = ReportFormatter::new(&self.settings);
        let max_volume = self.settings.max_volume;
        let radius = self.settings.radius;

        match mode {
            Mode::Usage | Mode::Web => {
                write!(out, "{}", USAGE)?;
            }
            Mode::Forward { price } => {
                let start = Instant::now();
                let results = self.search.forward_search(*price, max_volume);
                let elapsed = start.elapsed();
                tracing::info!(price, max_volume, found = results.len(), "forward search done");

                writeln!(
                    out,
                    "\nPerformance: Found {} results in {}",
                    results.len(),
                    format_millis(elapsed)
                )?;
                writeln!(out, "Effective range checked: 1-{} {}", max_volume, self.settings.volume_unit())?;
                write!(out, "{}", report.format_results(*price, &results))?;

                if let Some(path) = csv {
                    self.exporter.export(path, *price, &results).await?;
                    writeln!(out, "\nResults exported to {}", path)?;
                }
            }
            Mode::Batch { prices } => {
                writeln!(out, "\n=== Batch Processing {} Fuel Prices ===", prices.len())?;
                let start = Instant::now();
                let batch = self.search.batch(prices, max_volume);
                let elapsed = start.elapsed();
                tracing::info!(prices = prices.len(), max_volume, "batch search done");

                writeln!(out, "\nTotal batch time: {}", format_millis(elapsed))?;
                if !prices.is_empty() {
                    writeln!(
                        out,
                        "Average per price: {}",
                        format_millis(elapsed / prices.len() as u32)
                    )?;
                }

                for entry in &batch {
                    write!(out, "{}", report.format_results(entry.price, &entry.results))?;
                }

                if let Some(path) = csv {
                    self.exporter.export_batch(path, &batch).await?;
                    writeln!(out, "\nResults exported to {}", path)?;
                }
            }
            Mode::NearestVolume {
                price,
                target_volume,
            } => {
                writeln!(
                    out,
                    "\nFinding nearest palindromic cost to {:.2} {} at {:.1}p",
                    target_volume,
                    self.settings.volume_unit(),
                    price
                )?;
                writeln!(out, "Search radius: ±{} {}", radius, self.settings.volume_unit())?;

                let start = Instant::now();
                let nearest = self.search.nearest_to_target(*price, *target_volume, radius);
                let elapsed = start.elapsed();

                write!(out, "{}", report.format_nearest(*target_volume, nearest.as_ref()))?;
                writeln!(out, "\nSearch completed in {}", format_millis(elapsed))?;

                if let (Some(path), Some(found)) = (csv, nearest.as_ref()) {
                    self.exporter
                        .export(path, *price, std::slice::from_ref(found))
                        .await?;
                    writeln!(out, "\nResults exported to {}", path)?;
                }
            }
            Mode::NearCost {
                price,
                target_major_units,
            } => {
                writeln!(
                    out,
                    "\nFinding palindromic costs near {}{:.2} at {:.1}p",
                    self.settings.currency_symbol(),
                    target_major_units,
                    price
                )?;
                writeln!(out, "Search radius: ±{}p", radius)?;

                let start = Instant::now();
                let results = self
                    .search
                    .near_target_cost(*price, *target_major_units, radius);
                let elapsed = start.elapsed();

                write!(out, "{}", report.format_near_cost(*target_major_units, &results))?;
                writeln!(out, "\nSearch completed in {}", format_millis(elapsed))?;

                if let Some(path) = csv {
                    self.exporter.export(path, *price, &results).await?;
                    writeln!(out, "\nResults exported to {}", path)?;
                }
            }
        }
        Ok(())
    }
}
