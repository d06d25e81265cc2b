//! The address book and the operations on its contacts.
//!
//! - **address_book**: the owning, ordered contact collection
//! - **validation**: field rules applied on add and edit
//! - **sort**: sort criteria and string collation
//! - **shared**: lock-guarded handle for multi-threaded callers

mod address_book;
mod index;
mod shared;
pub mod sort;
pub mod validation;

pub use address_book::{AddressBook, BookOptions, BookSummary};
pub use shared::SharedAddressBook;
pub use sort::SortCriterion;
pub use validation::{validate_contact, ValidatedContact};
