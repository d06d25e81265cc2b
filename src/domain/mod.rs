//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Each value object
//! validates at construction time, so a value that exists is a value that
//! passed the address book's formatting rules.

pub mod contact_key;
pub mod email;
pub mod errors;
pub mod location;
pub mod person_name;
pub mod phone;
pub mod zip_code;

pub use contact_key::ContactKey;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use location::LocationText;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
pub use zip_code::ZipCode;
