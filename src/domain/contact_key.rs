//! ContactKey value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The (first name, last name) pair that uniquely identifies a contact in an
/// address book.
///
/// Comparison is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactKey;
///
/// let key = ContactKey::new("Savita", "Tekale");
/// assert_eq!(key.to_string(), "Savita Tekale");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactKey {
    pub first_name: String,
    pub last_name: String,
}

impl ContactKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
