//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no whitespace or '@' in any part.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use address_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("savita@example.com").unwrap();
/// assert_eq!(email.into_inner(), "savita@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@' symbol
    /// - Non-empty local part without whitespace
    /// - Domain part containing at least one '.' with text on both sides of it
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check an email without allocating a value object.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
