//! Key-to-position index over the address book's ordered contact list.

use crate::domain::ContactKey;
use crate::models::Contact;
use std::collections::HashMap;

/// Maps each (first name, last name) pair to the position of its record in
/// the owning `Vec`.
///
/// Keyed first name, then last name, so lookups borrow the caller's `&str`s.
/// The index does not own contacts. It must be rebuilt whenever positions
/// shift (delete, sort).
#[derive(Debug, Clone, Default)]
pub(crate) struct ContactIndex {
    positions: HashMap<String, HashMap<String, usize>>,
}

impl ContactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, contacts: &[Contact]) {
        self.positions.clear();
        for (position, contact) in contacts.iter().enumerate() {
            self.insert(contact.key(), position);
        }
    }

    pub fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.positions.get(first_name)?.get(last_name).copied()
    }

    pub fn contains(&self, first_name: &str, last_name: &str) -> bool {
        self.position(first_name, last_name).is_some()
    }

    pub fn insert(&mut self, key: ContactKey, position: usize) {
        self.positions
            .entry(key.first_name)
            .or_default()
            .insert(key.last_name, position);
    }

    pub fn remove(&mut self, first_name: &str, last_name: &str) {
        if let Some(last_names) = self.positions.get_mut(first_name) {
            last_names.remove(last_name);
            if last_names.is_empty() {
                self.positions.remove(first_name);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.positions.values().map(HashMap::len).sum()
    }
}
