//! Address Book - an in-memory contact manager with validated records.
//!
//! This library stores contact records in insertion order, enforces field
//! formatting rules and name uniqueness, and supports lookup, editing,
//! deletion, filtering by city or state, and sorting.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record and its one-line rendering
//! - **domain**: Validated value objects (names, zip, phone, email) and the contact key
//! - **book**: The `AddressBook` collection, validation, sorting, shared handle
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, BookOptions, BookSummary, SharedAddressBook, SortCriterion};
pub use config::{Config, OutputFormat};
pub use domain::{ContactKey, ValidationError};
pub use error::{AddressBookError, BookResult, ConfigError};
pub use models::Contact;
