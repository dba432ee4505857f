use crate::utils::error::{ScanError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::InvalidConfigValueError {
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
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.unit", "Kgs").is_ok());
        assert!(validate_non_empty_string("display.unit", "").is_err());
        assert!(validate_non_empty_string("display.unit", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.decimals", 3u32, 0, 6).is_ok());
        assert!(validate_range("display.decimals", 0u32, 0, 6).is_ok());
        assert!(validate_range("display.decimals", 7u32, 0, 6).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("batch.on_invalid", "skip", &["skip", "abort"]).is_ok());
        let err = validate_one_of("batch.on_invalid", "retry", &["skip", "abort"]).unwrap_err();
        assert!(err.to_string().contains("skip, abort"));
    }
}
