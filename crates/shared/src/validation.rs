//! Common validation utilities for `validator` custom rules.

use validator::ValidationError;

use crate::wall_clock::parse_wall_clock;

/// Validates a strict `HH:MM` wall-clock time.
pub fn validate_wall_clock(value: &str) -> Result<(), ValidationError> {
    parse_wall_clock(value).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("wall_clock_format");
        err.message = Some("Time must be in HH:MM format".into());
        err
    })
}

/// Validates that a string has at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_wall_clock() {
        assert!(validate_wall_clock("08:30").is_ok());
        let err = validate_wall_clock("8:30").unwrap_err();
        assert_eq!(err.code, "wall_clock_format");
        assert!(validate_wall_clock("").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Lab defence").is_ok());
        assert!(validate_not_blank("").is_err());
        assert_eq!(validate_not_blank("   \t").unwrap_err().code, "blank");
    }
}
