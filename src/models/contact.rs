//! Contact model representing a person in the address book.

use crate::domain::ContactKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record.
///
/// Contacts are plain data: they can be constructed with any field values and
/// are only checked against the formatting rules when handed to an
/// [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// First name, proper-case (e.g. "Savita")
    pub first_name: String,

    /// Last name, proper-case (e.g. "Tekale")
    pub last_name: String,

    /// Street address
    pub address: String,

    pub city: String,

    pub state: String,

    /// Five-digit zip code
    pub zip: String,

    /// Ten-digit phone number
    pub phone: String,

    pub email: String,
}

impl Contact {
    /// Create a new contact from its eight fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// The (first name, last name) pair identifying this contact.
    pub fn key(&self) -> ContactKey {
        ContactKey::new(self.first_name.clone(), self.last_name.clone())
    }

    /// True if `value` equals the city or the state exactly.
    pub fn is_in_city_or_state(&self, value: &str) -> bool {
        self.city == value || self.state == value
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}, {}, {} {} - {}, {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn savita() -> Contact {
        Contact::new(
            "Savita",
            "Tekale",
            "Pune",
            "City1",
            "State1",
            "12345",
            "1234567890",
            "savita@example.com",
        )
    }

    #[test]
    fn test_contact_display() {
        assert_eq!(
            savita().to_string(),
            "Savita Tekale - Pune, City1, State1 12345 - 1234567890, savita@example.com"
        );
    }

    #[test]
    fn test_contact_key() {
        let contact = savita();
        assert_eq!(contact.key(), ContactKey::new("Savita", "Tekale"));
    }

    #[test]
    fn test_city_or_state_is_exact() {
        let contact = savita();
        assert!(contact.is_in_city_or_state("City1"));
        assert!(contact.is_in_city_or_state("State1"));
        assert!(!contact.is_in_city_or_state("city1"));
        assert!(!contact.is_in_city_or_state("City"));
    }

    #[test]
    fn test_contact_serialization() {
        let json = serde_json::to_string(&savita()).unwrap();
        assert!(json.contains("\"firstName\":\"Savita\""));
        assert!(json.contains("\"zip\":\"12345\""));
    }

    #[test]
    fn test_contact_deserialization_skips_validation() {
        let json = r#"{"firstName":"sam","lastName":"x","address":"","city":"","state":"","zip":"","phone":"","email":""}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.first_name, "sam");
    }
}
