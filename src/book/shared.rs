//! Thread-safe handle around an [`AddressBook`].
//!
//! The address book itself has no internal locking. Callers that need to share
//! one book between threads wrap it here: every mutating call takes a single
//! exclusive write lock, and reads return owned copies so no lock outlives
//! the call.

use super::address_book::{AddressBook, BookSummary};
use super::sort::SortCriterion;
use crate::error::{AddressBookError, BookResult};
use crate::models::Contact;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, shared address book. Clones refer to the same book.
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<RwLock<AddressBook>>,
}

impl SharedAddressBook {
    pub fn new(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    fn read(&self) -> BookResult<RwLockReadGuard<'_, AddressBook>> {
        self.inner.read().map_err(|_| AddressBookError::LockPoisoned)
    }

    fn write(&self) -> BookResult<RwLockWriteGuard<'_, AddressBook>> {
        self.inner.write().map_err(|_| AddressBookError::LockPoisoned)
    }

    pub fn add_contact(&self, contact: Contact) -> BookResult<()> {
        self.write()?.add_contact(contact)
    }

    pub fn edit_contact(
        &self,
        first_name: &str,
        last_name: &str,
        updated: Contact,
    ) -> BookResult<()> {
        self.write()?.edit_contact(first_name, last_name, updated)
    }

    pub fn delete_contact_by_name(&self, first_name: &str, last_name: &str) -> BookResult<Contact> {
        self.write()?.delete_contact_by_name(first_name, last_name)
    }

    pub fn find_contact_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> BookResult<Option<Contact>> {
        Ok(self.read()?.find_contact_by_name(first_name, last_name).cloned())
    }

    pub fn contact_count(&self) -> BookResult<usize> {
        Ok(self.read()?.contact_count())
    }

    pub fn contacts_by_city_or_state(&self, value: &str) -> BookResult<Vec<Contact>> {
        Ok(self
            .read()?
            .contacts_by_city_or_state(value)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn contact_count_by_city_or_state(&self, value: &str) -> BookResult<usize> {
        Ok(self.read()?.contact_count_by_city_or_state(value))
    }

    pub fn sort_contacts_alphabetically(&self) -> BookResult<()> {
        self.write()?.sort_contacts_alphabetically();
        Ok(())
    }

    pub fn sort_contacts_by(&self, criterion: &str) -> BookResult<()> {
        self.write()?.sort_contacts_by(criterion)
    }

    pub fn sort_by(&self, criterion: SortCriterion) -> BookResult<()> {
        self.write()?.sort_by(criterion);
        Ok(())
    }

    pub fn summary(&self) -> BookResult<BookSummary> {
        Ok(self.read()?.summary())
    }
}

impl From<AddressBook> for SharedAddressBook {
    fn from(book: AddressBook) -> Self {
        Self::new(book)
    }
}
