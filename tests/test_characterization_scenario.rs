//! Characterization test for the reference address book session.
//!
//! Two contacts are added, one is edited to move it to a new city and state,
//! the book is sorted and filtered, and the other contact is deleted.

mod common;
use common::fixtures::*;

use address_book::Contact;

#[test]
fn test_reference_session() {
    let mut book = scenario_book();

    let updated = Contact::new(
        "Savita",
        "Tekale",
        "Nashik",
        "City3",
        "State3",
        "67890",
        "9876543210",
        "savitaS@example.com",
    );
    book.edit_contact("Savita", "Tekale", updated).unwrap();

    let mut viewed = Vec::new();
    book.view_contacts_by_city_or_state("City1", &mut viewed)
        .unwrap();
    assert!(viewed.is_empty());

    assert_eq!(book.contact_count_by_city_or_state("State1"), 0);
    assert_eq!(book.contact_count_by_city_or_state("State3"), 1);

    book.sort_contacts_alphabetically();
    book.sort_contacts_by("city").unwrap();
    assert_eq!(names(&book), vec!["Yogesh Gunde", "Savita Tekale"]);

    book.delete_contact_by_name("Yogesh", "Gunde").unwrap();
    assert_eq!(book.contact_count(), 1);

    assert_eq!(
        book.contacts()[0].to_string(),
        "Savita Tekale - Nashik, City3, State3 67890 - 9876543210, savitaS@example.com"
    );
}

#[test]
fn test_reference_session_summary_json() {
    let mut book = scenario_book();
    book.delete_contact_by_name("Savita", "Tekale").unwrap();

    let json = serde_json::to_value(book.summary()).unwrap();
    assert_eq!(json["contactCount"], 1);
    assert_eq!(json["contacts"][0]["firstName"], "Yogesh");
    assert_eq!(json["contacts"][0]["email"], "yogesh@example.com");
}
