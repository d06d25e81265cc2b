//! PhoneNumber value object.

use super::errors::ValidationError;

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// A ten-digit phone number with no formatting characters.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// assert!(PhoneNumber::new("9876543210").is_ok());
/// assert!(PhoneNumber::new("987-654-3210").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check a phone number without allocating a value object.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
