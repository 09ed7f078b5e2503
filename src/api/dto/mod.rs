//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON (camelCase on the wire) and validator for input
//! validation.

pub mod account;
pub mod message;

use validator::ValidationError;

/// Rejects strings that are empty or consist only of Unicode whitespace.
///
/// Control characters such as `U+0001` are not whitespace and count as content.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("hello").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_validate_not_blank_unicode() {
        assert!(validate_not_blank("\u{00A0}").is_err());
        assert!(validate_not_blank("\u{2003}\u{3000}").is_err());
        assert!(validate_not_blank("\u{0001}").is_ok());
    }
}
