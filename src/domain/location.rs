//! LocationText value object for address, city and state fields.

use super::errors::ValidationError;

/// Minimum number of characters in an address, city or state.
pub const MIN_LOCATION_LENGTH: usize = 4;

/// Free-text location component with a minimum length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationText(String);

impl LocationText {
    /// # Errors
    ///
    /// Returns `ValidationError::TooShort` if `text` has fewer than
    /// [`MIN_LOCATION_LENGTH`] characters.
    pub fn new(field: &'static str, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if !Self::is_valid(&text) {
            return Err(ValidationError::TooShort {
                field,
                min: MIN_LOCATION_LENGTH,
                value: text,
            });
        }
        Ok(Self(text))
    }

    /// Length is counted in chars, not bytes.
    pub fn is_valid(text: &str) -> bool {
        text.chars().count() >= MIN_LOCATION_LENGTH
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_min_length() {
        assert!(LocationText::new("city", "Pune").is_ok());
        assert!(LocationText::new("city", "Goa").is_err());
        assert!(LocationText::new("state", "").is_err());
    }

    #[test]
    fn test_location_counts_chars() {
        // Three chars, six bytes.
        assert!(LocationText::new("city", "ÅÄÖ").is_err());
        assert!(LocationText::new("city", "Köln").is_ok());
    }
}
