use crate::utils::error::{AnalyticsError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry of `values` must be one of `allowed` (case-insensitive), and at least one given.
pub fn validate_choices(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    if values.is_empty() {
        return Err(AnalyticsError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed_set: HashSet<String> = allowed.iter().map(|a| a.to_ascii_lowercase()).collect();
    for value in values {
        if !allowed_set.contains(&value.trim().to_ascii_lowercase()) {
            return Err(AnalyticsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./output").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("youngest_count", 2, 1).is_ok());
        assert!(validate_positive_number("youngest_count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("report.title", "Report").is_ok());
        assert!(validate_non_empty_string("report.title", "   ").is_err());
    }

    #[test]
    fn test_validate_choices() {
        let formats = vec!["text".to_string(), "JSON".to_string()];
        assert!(validate_choices("output.formats", &formats, &["text", "json"]).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_choices("output.formats", &invalid, &["text", "json"]).is_err());

        assert!(matches!(
            validate_choices("output.formats", &[], &["text"]),
            Err(AnalyticsError::MissingConfigError { .. })
        ));
    }
}
