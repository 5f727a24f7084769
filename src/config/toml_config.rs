use crate::utils::error::{FuelError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub search: Option<SearchSection>,
    pub report: Option<ReportSection>,
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub epsilon: Option<f64>,
    pub max_volume: Option<u32>,
    pub radius: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub display_limit: Option<usize>,
    pub currency_symbol: Option<String>,
    pub volume_unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Largest minor-unit window (max volume × price) a web request may scan.
    pub max_window: Option<u64>,
    pub json_logs: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FuelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FuelError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FuelError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn epsilon(&self) -> Option<f64> {
        self.search.as_ref().and_then(|s| s.epsilon)
    }

    pub fn max_volume(&self) -> Option<u32> {
        self.search.as_ref().and_then(|s| s.max_volume)
    }

    pub fn radius(&self) -> Option<u32> {
        self.search.as_ref().and_then(|s| s.radius)
    }

    pub fn display_limit(&self) -> Option<usize> {
        self.report.as_ref().and_then(|r| r.display_limit)
    }

    pub fn currency_symbol(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.currency_symbol.as_deref())
    }

    pub fn volume_unit(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.volume_unit.as_deref())
    }

    pub fn host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.host.as_deref())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    pub fn max_window(&self) -> Option<u64> {
        self.server.as_ref().and_then(|s| s.max_window)
    }

    pub fn json_logs(&self) -> bool {
        self.server
            .as_ref()
            .and_then(|s| s.json_logs)
            .unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(epsilon) = self.epsilon() {
            validate_finite("search.epsilon", epsilon)?;
            validate_range("search.epsilon", epsilon, f64::MIN_POSITIVE, 0.5)?;
        }
        if let Some(limit) = self.display_limit() {
            validate_positive_number("report.display_limit", limit, 1)?;
        }
        if let Some(symbol) = self.currency_symbol() {
            validate_non_empty_string("report.currency_symbol", symbol)?;
        }
        if let Some(unit) = self.volume_unit() {
            validate_non_empty_string("report.volume_unit", unit)?;
        }
        if let Some(host) = self.host() {
            validate_non_empty_string("server.host", host)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[search]
epsilon = 0.005
max_volume = 500
radius = 20

[report]
display_limit = 10
currency_symbol = "$"
volume_unit = "gallons"

[server]
host = "0.0.0.0"
port = 3000
max_window = 5000000
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.epsilon(), Some(0.005));
        assert_eq!(config.max_volume(), Some(500));
        assert_eq!(config.radius(), Some(20));
        assert_eq!(config.display_limit(), Some(10));
        assert_eq!(config.currency_symbol(), Some("$"));
        assert_eq!(config.volume_unit(), Some("gallons"));
        assert_eq!(config.host(), Some("0.0.0.0"));
        assert_eq!(config.port(), Some(3000));
        assert_eq!(config.max_window(), Some(5_000_000));
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.epsilon().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PALINDROMIC_FUEL_TEST_PORT", "9090");

        let toml_content = r#"
[server]
port = ${PALINDROMIC_FUEL_TEST_PORT}
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.port(), Some(9090));

        std::env::remove_var("PALINDROMIC_FUEL_TEST_PORT");
    }

    #[test]
    fn test_config_validation() {
        let config = FileConfig::from_toml_str("[search]\nepsilon = 0.75\n").unwrap();
        assert!(config.validate().is_err());

        let config = FileConfig::from_toml_str("[report]\ndisplay_limit = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FileConfig::from_toml_str("[search\nepsilon = ").unwrap_err();
        assert!(matches!(err, FuelError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\ncurrency_symbol = \"EUR \"\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.currency_symbol(), Some("EUR "));
    }
}
