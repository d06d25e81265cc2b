//! Contact validation against the address book's formatting rules.

use crate::domain::{
    ContactKey, EmailAddress, LocationText, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use crate::models::Contact;

/// A contact whose every field has passed validation.
///
/// The address book only stores contacts that went through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    first_name: PersonName,
    last_name: PersonName,
    address: LocationText,
    city: LocationText,
    state: LocationText,
    zip: ZipCode,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl ValidatedContact {
    /// Validate `contact`, reporting the first field that fails.
    ///
    /// Fields are checked in record order: first name, last name, address,
    /// city, state, zip, phone, email.
    pub fn new(contact: Contact) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new("first_name", contact.first_name)?,
            last_name: PersonName::new("last_name", contact.last_name)?,
            address: LocationText::new("address", contact.address)?,
            city: LocationText::new("city", contact.city)?,
            state: LocationText::new("state", contact.state)?,
            zip: ZipCode::new(contact.zip)?,
            phone: PhoneNumber::new(contact.phone)?,
            email: EmailAddress::new(contact.email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn key(&self) -> ContactKey {
        ContactKey::new(self.first_name(), self.last_name())
    }

    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name() == first_name && self.last_name() == last_name
    }
}

impl TryFrom<Contact> for ValidatedContact {
    type Error = ValidationError;

    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Self::new(contact)
    }
}

impl From<ValidatedContact> for Contact {
    fn from(valid: ValidatedContact) -> Self {
        Contact {
            first_name: valid.first_name.into_inner(),
            last_name: valid.last_name.into_inner(),
            address: valid.address.into_inner(),
            city: valid.city.into_inner(),
            state: valid.state.into_inner(),
            zip: valid.zip.into_inner(),
            phone: valid.phone.into_inner(),
            email: valid.email.into_inner(),
        }
    }
}

/// Check every field of `contact` without consuming it.
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    ValidatedContact::new(contact.clone()).map(|_| ())
}
