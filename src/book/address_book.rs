//! The address book: an ordered, validated, deduplicated contact collection.

use super::index::ContactIndex;
use super::sort::{compare_by_name, SortCriterion};
use super::validation::{self, ValidatedContact};
use crate::domain::ValidationError;
use crate::error::{AddressBookError, BookResult};
use crate::models::Contact;
use serde::Serialize;
use std::io::{self, Write};

/// Behavioral switches for an [`AddressBook`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookOptions {
    /// Return `InvalidArgument` from [`AddressBook::sort_contacts_by`] for an
    /// unrecognized criterion instead of leaving the order unchanged.
    pub reject_unknown_sort_criteria: bool,
}

/// Serializable snapshot of an address book in its current order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub contact_count: usize,
    pub contacts: Vec<Contact>,
}

/// An in-memory collection of contacts.
///
/// Contacts keep insertion order until a sort reorders them. No two contacts
/// share the same first and last name. Every operation that fails leaves the
/// book exactly as it was.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Contact};
///
/// let mut book = AddressBook::new();
/// book.add_contact(Contact::new(
///     "Savita", "Tekale", "Pune", "City1", "State1", "12345", "1234567890",
///     "savita@example.com",
/// ))
/// .unwrap();
///
/// assert_eq!(book.contact_count(), 1);
/// assert!(book.find_contact_by_name("Savita", "Tekale").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    index: ContactIndex,
    options: BookOptions,
}

impl AddressBook {
    /// Create an empty address book with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty address book with the given behavioral switches.
    pub fn with_options(options: BookOptions) -> Self {
        Self {
            contacts: Vec::new(),
            index: ContactIndex::new(),
            options,
        }
    }

    /// The switches this book was built with.
    pub fn options(&self) -> BookOptions {
        self.options
    }

    /// Check `contact` against the field rules without touching the book.
    pub fn validate_contact(&self, contact: &Contact) -> Result<(), ValidationError> {
        validation::validate_contact(contact)
    }

    /// True if a stored contact has the same first and last name.
    pub fn is_duplicate(&self, contact: &Contact) -> bool {
        self.index.contains(&contact.first_name, &contact.last_name)
    }

    /// Validate `contact` and append it to the end of the book.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field is malformed
    /// - `Duplicate` if a contact with the same name already exists
    pub fn add_contact(&mut self, contact: Contact) -> BookResult<()> {
        let validated = ValidatedContact::new(contact).map_err(|e| {
            tracing::warn!(field = e.field(), "Rejected contact: {}", e);
            e
        })?;

        if self.index.contains(validated.first_name(), validated.last_name()) {
            tracing::warn!("Rejected duplicate contact: {}", validated.key());
            return Err(AddressBookError::duplicate(
                validated.first_name(),
                validated.last_name(),
            ));
        }

        let position = self.contacts.len();
        let key = validated.key();
        tracing::debug!(position, "Added contact: {}", key);
        self.index.insert(key, position);
        self.contacts.push(Contact::from(validated));
        debug_assert_eq!(self.index.len(), self.contacts.len());
        Ok(())
    }

    pub fn find_contact_by_name(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.index
            .position(first_name, last_name)
            .map(|position| &self.contacts[position])
    }

    /// Replace the contact named `first_name last_name` with `updated`.
    ///
    /// The record keeps its position in the book. If `updated` carries a
    /// different name, that name must not belong to any other contact.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has the given name
    /// - `Validation` if any field of `updated` is malformed
    /// - `Duplicate` if the new name collides with another contact
    pub fn edit_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        updated: Contact,
    ) -> BookResult<()> {
        let position = self
            .index
            .position(first_name, last_name)
            .ok_or_else(|| {
                tracing::warn!("Cannot edit missing contact: {} {}", first_name, last_name);
                AddressBookError::not_found(first_name, last_name)
            })?;

        let validated = ValidatedContact::new(updated).map_err(|e| {
            tracing::warn!(field = e.field(), "Rejected edit: {}", e);
            e
        })?;

        let renamed = !validated.matches_name(first_name, last_name);
        if renamed && self.index.contains(validated.first_name(), validated.last_name()) {
            tracing::warn!("Rejected rename to existing contact: {}", validated.key());
            return Err(AddressBookError::duplicate(
                validated.first_name(),
                validated.last_name(),
            ));
        }

        let key = validated.key();
        let previous = std::mem::replace(&mut self.contacts[position], Contact::from(validated));
        if renamed {
            self.index.remove(&previous.first_name, &previous.last_name);
            self.index.insert(key, position);
        }

        tracing::debug!(position, "Edited contact: {}", previous.key());
        Ok(())
    }

    /// Remove the contact named `first_name last_name`, returning it.
    ///
    /// Remaining contacts keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has the given name.
    pub fn delete_contact_by_name(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> BookResult<Contact> {
        let position = self
            .index
            .position(first_name, last_name)
            .ok_or_else(|| {
                tracing::warn!("Cannot delete missing contact: {} {}", first_name, last_name);
                AddressBookError::not_found(first_name, last_name)
            })?;

        let removed = self.contacts.remove(position);
        self.index.rebuild(&self.contacts);

        tracing::debug!(position, "Deleted contact: {}", removed.key());
        Ok(removed)
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in their current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Contacts whose city or state equals `value` (exact, case-sensitive),
    /// in book order.
    pub fn contacts_by_city_or_state(&self, value: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.is_in_city_or_state(value))
            .collect()
    }

    pub fn contact_count_by_city_or_state(&self, value: &str) -> usize {
        self.contacts
            .iter()
            .filter(|contact| contact.is_in_city_or_state(value))
            .count()
    }

    /// Write one line per contact in `value`'s city or state.
    pub fn view_contacts_by_city_or_state<W: Write>(
        &self,
        value: &str,
        out: &mut W,
    ) -> io::Result<()> {
        for contact in self.contacts_by_city_or_state(value) {
            writeln!(out, "{}", contact)?;
        }
        Ok(())
    }

    /// Order contacts by first name, then last name. The sort is stable.
    pub fn sort_contacts_alphabetically(&mut self) {
        self.contacts.sort_by(compare_by_name);
        self.index.rebuild(&self.contacts);
        tracing::debug!(count = self.contacts.len(), "Sorted contacts by name");
    }

    /// Order contacts by a single field named `criterion` ("city", "state" or "zip").
    ///
    /// An unrecognized criterion leaves the order unchanged and returns
    /// `Ok(())`, unless the book was built with
    /// [`BookOptions::reject_unknown_sort_criteria`], in which case it
    /// returns `InvalidArgument`.
    pub fn sort_contacts_by(&mut self, criterion: &str) -> BookResult<()> {
        match criterion.parse::<SortCriterion>() {
            Ok(criterion) => {
                self.sort_by(criterion);
                Ok(())
            }
            Err(e) if self.options.reject_unknown_sort_criteria => {
                tracing::warn!("Rejected sort: {}", e);
                Err(e)
            }
            Err(_) => {
                tracing::warn!(criterion, "Ignoring unknown sort criterion");
                Ok(())
            }
        }
    }

    /// Order contacts by `criterion`. The sort is stable.
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        self.contacts.sort_by(|a, b| criterion.compare(a, b));
        self.index.rebuild(&self.contacts);
        tracing::debug!(%criterion, count = self.contacts.len(), "Sorted contacts");
    }

    /// Snapshot the count and contacts for serialization.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            contact_count: self.contacts.len(),
            contacts: self.contacts.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
