//! Shared validation utilities
//!
//! Input validation for command handlers. The content store itself is
//! deliberately lenient (it accepts any rating value and any video id), so
//! these checks are the only gate between a request body and the store.
//!
//! # Examples
//!
//! ```rust,ignore
//! use mtv_server::features::shared::validation::{validate_rating, validate_email};
//!
//! validate_rating(4)?;
//! validate_email("fan@morons.tv")?;
//! ```

use thiserror::Error;

/// Lowest accepted rating value
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating value
pub const MAX_RATING: i32 = 5;

/// Errors that can occur during rating validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingValidationError {
    #[error("Rating must be between {MIN_RATING} and {MAX_RATING}")]
    OutOfRange { value: i32 },
}

/// Errors that can occur during email validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    #[error("Email is required and cannot be empty")]
    Required,

    #[error("Email address is not well-formed")]
    InvalidFormat,
}

/// Validate a rating value
///
/// # Rules
/// - Must be an integer between 1 and 5 inclusive
pub fn validate_rating(value: i32) -> Result<(), RatingValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(RatingValidationError::OutOfRange { value });
    }
    Ok(())
}

/// Validate an email address shape
///
/// # Rules
/// - Must not be empty (after trimming whitespace)
/// - Must contain exactly one `@` with a non-empty local part
/// - The domain must contain a dot that is neither its first nor last
///   character
///
/// This is shape validation only; deliverability is out of scope.
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EmailValidationError::Required);
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(EmailValidationError::InvalidFormat),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(EmailValidationError::InvalidFormat);
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(EmailValidationError::InvalidFormat);
    }

    if email.contains(char::is_whitespace) {
        return Err(EmailValidationError::InvalidFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rating validation tests
    #[test]
    fn test_validate_rating_accepts_full_range() {
        for value in MIN_RATING..=MAX_RATING {
            assert!(validate_rating(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_validate_rating_rejects_out_of_range() {
        for value in [0, 6, -1, 100] {
            assert_eq!(
                validate_rating(value),
                Err(RatingValidationError::OutOfRange { value })
            );
        }
    }

    // Email validation tests
    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("fan@morons.tv").is_ok());
        assert!(validate_email("first.last@example.co.uk").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_validate_email_empty() {
        assert_eq!(validate_email(""), Err(EmailValidationError::Required));
        assert_eq!(validate_email("   "), Err(EmailValidationError::Required));
    }

    #[test]
    fn test_validate_email_invalid_shapes() {
        let invalid = [
            "no-at-sign",
            "@no-local.com",
            "no-domain@",
            "two@@ats.com",
            "a@b@c.com",
            "dot@.starts",
            "dot@ends.",
            "no-dot@domain",
            "has space@example.com",
        ];
        for email in invalid {
            assert_eq!(
                validate_email(email),
                Err(EmailValidationError::InvalidFormat),
                "'{email}' should be invalid"
            );
        }
    }
}
