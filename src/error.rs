//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book operations.
///
/// Every error aborts the operation that raised it before any mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A contact field does not meet the formatting rules
    #[error("Invalid contact details: {0}")]
    Validation(#[from] ValidationError),

    /// Another contact already uses this first and last name
    #[error("Duplicate entry: {first_name} {last_name} already exists in the address book")]
    Duplicate {
        first_name: String,
        last_name: String,
    },

    /// No contact with this first and last name
    #[error("Contact not found: {first_name} {last_name}")]
    NotFound {
        first_name: String,
        last_name: String,
    },

    /// Argument outside the accepted set (e.g. an unknown sort criterion)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A shared address book lock was poisoned by a panicking writer
    #[error("Address book lock poisoned")]
    LockPoisoned,
}

impl AddressBookError {
    pub(crate) fn duplicate(first_name: &str, last_name: &str) -> Self {
        Self::Duplicate {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub(crate) fn not_found(first_name: &str, last_name: &str) -> Self {
        Self::NotFound {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type BookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::duplicate("Savita", "Tekale");
        assert_eq!(
            err.to_string(),
            "Duplicate entry: Savita Tekale already exists in the address book"
        );

        let err = AddressBookError::not_found("Yogesh", "Gunde");
        assert_eq!(err.to_string(), "Contact not found: Yogesh Gunde");

        let err = AddressBookError::InvalidArgument("unknown sort criterion: age".to_string());
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AddressBookError = ValidationError::InvalidZip("1".to_string()).into();
        assert!(matches!(err, AddressBookError::Validation(_)));
        assert!(err.to_string().starts_with("Invalid contact details"));
    }
}
