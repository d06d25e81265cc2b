//! Test fixtures and sample data.
//!
//! Contacts built here always pass validation unless a test mutates them.

use address_book::{AddressBook, Contact};

/// The first contact from the reference scenario.
pub fn savita() -> Contact {
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

/// The second contact from the reference scenario.
pub fn yogesh() -> Contact {
    Contact::new(
        "Yogesh",
        "Gunde",
        "Mumbai",
        "City2",
        "State2",
        "54321",
        "9876543210",
        "yogesh@example.com",
    )
}

/// A valid contact with the given name, city, state and zip.
#[allow(dead_code)]
pub fn sample_contact(
    first_name: &str,
    last_name: &str,
    city: &str,
    state: &str,
    zip: &str,
) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "Main Road",
        city,
        state,
        zip,
        "1234567890",
        format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
    )
}

/// An address book seeded with Savita and Yogesh, in that order.
#[allow(dead_code)]
pub fn scenario_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_contact(savita()).expect("savita is valid");
    book.add_contact(yogesh()).expect("yogesh is valid");
    book
}

/// Display names in current book order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.iter()
        .map(|c| format!("{} {}", c.first_name, c.last_name))
        .collect()
}
