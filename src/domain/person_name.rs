//! PersonName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// One uppercase ASCII letter followed by at least two lowercase ASCII letters.
static PROPER_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]{2,}$").expect("Failed to compile name regex"));

/// A proper-case first or last name such as `"Savita"`.
///
/// Names like `"sam"`, `"Al"` or `"McDonald"` are rejected.
///
/// # Example
///
/// ```
/// use address_book::domain::PersonName;
///
/// assert!(PersonName::new("first_name", "Savita").is_ok());
/// assert!(PersonName::new("first_name", "sam").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName. `field` names the contact field being
    /// validated and is reported back in the error.
    pub fn new(field: &'static str, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName { field, value: name });
        }
        Ok(Self(name))
    }

    pub fn is_valid(name: &str) -> bool {
        PROPER_NAME_REGEX.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_proper_case() {
        assert!(PersonName::new("first_name", "Savita").is_ok());
        assert!(PersonName::new("last_name", "Gunde").is_ok());
        assert!(PersonName::new("first_name", "Sam").is_ok());
    }

    #[test]
    fn test_name_rejects_malformed() {
        for bad in ["sam", "Al", "SAM", "McDonald", "Sam1", "", "Élise", "Sam "] {
            assert!(PersonName::new("first_name", bad).is_err(), "{:?} should fail", bad);
        }
    }

    #[test]
    fn test_name_error_reports_field() {
        let err = PersonName::new("last_name", "doe").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                field: "last_name",
                value: "doe".to_string()
            }
        );
    }
}
