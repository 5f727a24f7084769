use crate::utils::error::{FuelError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Rejects NaN and infinities, which `str::parse::<f64>` happily accepts.
pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parses a single price from user input, e.g. one entry of `--batch`.
pub fn parse_price(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let price: f64 = trimmed
        .parse()
        .map_err(|_| FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: trimmed.to_string(),
            reason: "Not a valid number".to_string(),
        })?;
    validate_finite(field_name, price)?;
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("display_limit", 5, 1).is_ok());
        assert!(validate_positive_number("display_limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("epsilon", 0.01, 0.0, 0.5).is_ok());
        assert!(validate_range("epsilon", 0.6, 0.0, 0.5).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("csv", "out/results.csv").is_ok());
        assert!(validate_path("csv", "").is_err());
        assert!(validate_path("csv", "bad\0name").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("batch", " 128.9 ").unwrap(), 128.9);
        assert!(parse_price("batch", "abc").is_err());
        assert!(parse_price("batch", "NaN").is_err());
        assert!(parse_price("batch", "inf").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("currency_symbol", "£").is_ok());
        assert!(validate_non_empty_string("currency_symbol", "  ").is_err());
    }
}
