//! ZipCode value object.

use super::errors::ValidationError;

/// Number of digits in a zip code.
pub const ZIP_DIGITS: usize = 5;

/// A five-digit postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` unless the input is exactly five
    /// ASCII digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();
        if !Self::is_valid(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }
        Ok(Self(zip))
    }

    pub fn is_valid(zip: &str) -> bool {
        zip.len() == ZIP_DIGITS && zip.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_validates_format() {
        assert!(ZipCode::new("12345").is_ok());
        assert!(ZipCode::new("00000").is_ok());
        assert!(ZipCode::new("1234").is_err());
        assert!(ZipCode::new("123456").is_err());
        assert!(ZipCode::new("12a45").is_err());
        assert!(ZipCode::new("").is_err());
    }
}
