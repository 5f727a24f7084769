use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required value: {field}")]
    MissingConfigError { field: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Export,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FuelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FuelError::ConfigError { .. } => ErrorCategory::Configuration,
            FuelError::InvalidConfigValueError { .. } | FuelError::MissingConfigError { .. } => {
                ErrorCategory::Input
            }
            FuelError::CsvError(_) | FuelError::IoError(_) | FuelError::SerializationError(_) => {
                ErrorCategory::Export
            }
            FuelError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Export => ErrorSeverity::Medium,
            ErrorCategory::Server => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FuelError::CsvError(_) => "Check that the CSV path is writable".to_string(),
            FuelError::IoError(_) => {
                "Check that the file or directory exists and permissions are correct".to_string()
            }
            FuelError::SerializationError(_) => "Check the request body is valid JSON".to_string(),
            FuelError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            FuelError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            FuelError::MissingConfigError { field } => format!("Set '{}' and retry", field),
            FuelError::ServerError { .. } => {
                "Check that the port is free and the host address is valid".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FuelError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            FuelError::MissingConfigError { field } => format!("Missing {}", field),
            FuelError::CsvError(e) => format!("Could not write CSV: {}", e),
            FuelError::IoError(e) => format!("File error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelError>;
