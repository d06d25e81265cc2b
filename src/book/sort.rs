//! Sort criteria and string collation for address book ordering.

use crate::error::AddressBookError;
use crate::models::Contact;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Single-field orderings supported by [`AddressBook::sort_by`](super::AddressBook::sort_by).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    City,
    State,
    Zip,
}

impl SortCriterion {
    pub fn name(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }

    /// The contact field this criterion orders by.
    pub fn field<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            Self::City => &contact.city,
            Self::State => &contact.state,
            Self::Zip => &contact.zip,
        }
    }

    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        collate(self.field(a), self.field(b))
    }
}

impl FromStr for SortCriterion {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            other => Err(AddressBookError::InvalidArgument(format!(
                "unknown sort criterion: {:?} (expected city, state or zip)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Character classes in collation order: separators, then digits, then letters.
fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Accent- and case-insensitive key: NFD-decomposed, combining marks dropped,
/// lowercased, each char tagged with its class.
fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Compare two strings the way a human-facing list expects.
///
/// The primary comparison ignores accents and case and ranks punctuation and
/// whitespace before digits and digits before letters, so
/// `"_Hub" < "1st Ave" < "Éire City" < "Fargo"`. Strings equal at that level
/// are ordered with lowercase before uppercase at the first differing
/// position, and finally by raw code point (unaccented before accented),
/// which keeps the ordering total.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| {
            let case_a = a.chars().map(char::is_uppercase);
            let case_b = b.chars().map(char::is_uppercase);
            case_a.cmp(case_b)
        })
        .then_with(|| a.cmp(b))
}

/// Ascending by first name, then last name.
pub fn compare_by_name(a: &Contact, b: &Contact) -> Ordering {
    collate(&a.first_name, &b.first_name).then_with(|| collate(&a.last_name, &b.last_name))
}
