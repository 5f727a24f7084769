pub mod cli;
pub mod toml_config;

use crate::core::classifier::DEFAULT_EPSILON;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::FileConfig;

pub const DEFAULT_MAX_VOLUME: u32 = 10_000;
pub const DEFAULT_RADIUS: u32 = 100;
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_WINDOW: u64 = 10_000_000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "palindromic-fuel")]
#[command(about = "Find fuel volumes whose cost reads the same forwards and backwards")]
pub struct CliConfig {
    /// Price per unit volume in minor units (e.g. pence per litre)
    #[arg(long)]
    pub price: Option<f64>,

    /// Maximum volume to check
    #[arg(long = "max")]
    pub max_volume: Option<u32>,

    /// Find the nearest palindromic cost to this volume
    #[arg(long)]
    pub reverse_volume: Option<f64>,

    /// Find palindromic costs near this target cost in major units
    #[arg(long)]
    pub reverse_cost: Option<f64>,

    /// Search radius: volume units for --reverse-volume, minor units for --reverse-cost
    #[arg(long)]
    pub radius: Option<u32>,

    /// Comma-separated list of prices for batch processing
    #[arg(long, value_delimiter = ',')]
    pub batch: Vec<String>,

    /// Export results to this CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// Start the web server
    #[arg(long)]
    pub web: bool,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub host: Option<String>,

    /// Tolerance for treating a volume as whole
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layers CLI flags over the file config over built-in defaults.
    pub fn settings(&self, file: Option<&FileConfig>) -> Settings {
        let mut settings = file.map(Settings::from_file_config).unwrap_or_default();

        if let Some(epsilon) = self.epsilon {
            settings.epsilon = epsilon;
        }
        if let Some(max_volume) = self.max_volume {
            settings.max_volume = max_volume;
        }
        if let Some(radius) = self.radius {
            settings.radius = radius;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        settings
    }
}

/// Fully resolved settings shared by the report, export and server layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub epsilon: f64,
    pub max_volume: u32,
    pub radius: u32,
    pub display_limit: usize,
    pub currency_symbol: String,
    pub volume_unit: String,
    pub host: String,
    pub port: u16,
    pub max_window: u64,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_volume: DEFAULT_MAX_VOLUME,
            radius: DEFAULT_RADIUS,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            currency_symbol: "£".to_string(),
            volume_unit: "litres".to_string(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_window: DEFAULT_MAX_WINDOW,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_file_config(file: &FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            epsilon: file.epsilon().unwrap_or(defaults.epsilon),
            max_volume: file.max_volume().unwrap_or(defaults.max_volume),
            radius: file.radius().unwrap_or(defaults.radius),
            display_limit: file.display_limit().unwrap_or(defaults.display_limit),
            currency_symbol: file
                .currency_symbol()
                .map(str::to_string)
                .unwrap_or(defaults.currency_symbol),
            volume_unit: file
                .volume_unit()
                .map(str::to_string)
                .unwrap_or(defaults.volume_unit),
            host: file.host().map(str::to_string).unwrap_or(defaults.host),
            port: file.port().unwrap_or(defaults.port),
            max_window: file.max_window().unwrap_or(defaults.max_window),
            json_logs: file.json_logs(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for Settings {
    fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn display_limit(&self) -> usize {
        self.display_limit
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn volume_unit(&self) -> &str {
        &self.volume_unit
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_finite("epsilon", self.epsilon)?;
        validate_range("epsilon", self.epsilon, f64::MIN_POSITIVE, 0.5)?;
        validate_positive_number("display_limit", self.display_limit, 1)?;
        validate_non_empty_string("currency_symbol", &self.currency_symbol)?;
        validate_non_empty_string("volume_unit", &self.volume_unit)?;
        validate_non_empty_string("host", &self.host)?;
        Ok(())
    }
}
