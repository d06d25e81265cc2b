//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the name of the contact field that failed and the
/// rejected value, so callers can report exactly what needs fixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A first or last name is not proper-case (one capital, two or more lowercase letters).
    InvalidName { field: &'static str, value: String },

    /// A free-text location field is shorter than the minimum length.
    TooShort {
        field: &'static str,
        min: usize,
        value: String,
    },

    /// The zip code is not exactly five digits.
    InvalidZip(String),

    /// The phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The email address is not of the form `local@domain.tld`.
    InvalidEmail(String),
}

impl ValidationError {
    /// Name of the contact field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName { field, .. } | Self::TooShort { field, .. } => field,
            Self::InvalidZip(_) => "zip",
            Self::InvalidPhone(_) => "phone",
            Self::InvalidEmail(_) => "email",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { field, value } => write!(
                f,
                "Invalid {}: {:?} must be capitalized with at least 3 letters",
                field, value
            ),
            Self::TooShort { field, min, value } => {
                write!(f, "Invalid {}: {:?} must be at least {} characters", field, value, min)
            }
            Self::InvalidZip(zip) => write!(f, "Invalid zip code: {:?}", zip),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {:?}", phone),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {:?}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
