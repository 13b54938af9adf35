//! Ordered contact list with add/remove/set-primary transitions.

use crate::domain::text::trim_input;
use crate::domain::{EmailAddress, ValidationError};
use crate::models::{Contact, ContactCandidate};
use serde::Serialize;

/// The contacts of one buyer draft, newest first.
///
/// Every operation takes `&self` and returns a new list, so a failed
/// [`ContactList::add_contact`] leaves the caller's value untouched.
///
/// # Example
///
/// ```
/// use buyer_intake::contacts::ContactList;
/// use buyer_intake::models::ContactCandidate;
///
/// let list = ContactList::new()
///     .add_contact(&ContactCandidate::new("Alice", "a@x.com", "111"))
///     .unwrap()
///     .add_contact(&ContactCandidate::new("Bob", "b@x.com", "222").primary())
///     .unwrap();
///
/// assert_eq!(list.primary().unwrap().name, "Bob");
/// let list = list.remove_contact("Bob");
/// assert_eq!(list.primary().unwrap().name, "Alice");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactList {
    entries: Vec<Contact>,
}

impl ContactList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` against this list and return the list with the
    /// normalized entry prepended.
    ///
    /// Checks run in this order and the first failure wins: blank name,
    /// blank email, blank phone, email format, duplicate name (exact),
    /// duplicate email (case-insensitive).
    ///
    /// A candidate requesting primary demotes every existing entry. The first
    /// contact added to an empty list is always primary.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`ValidationError`]; `self` is unchanged.
    pub fn add_contact(&self, candidate: &ContactCandidate) -> Result<Self, ValidationError> {
        let name = trim_input(&candidate.name);
        let email = trim_input(&candidate.email);
        let phone_number = trim_input(&candidate.phone_number);

        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if phone_number.is_empty() {
            return Err(ValidationError::PhoneRequired);
        }

        let email = EmailAddress::new(email)?;

        if self.entries.iter().any(|c| c.name == name) {
            return Err(ValidationError::DuplicateName);
        }

        let email_key = email.normalized();
        if self.entries.iter().any(|c| c.email_key() == email_key) {
            return Err(ValidationError::DuplicateEmail);
        }

        let is_primary = candidate.is_primary || self.entries.is_empty();

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(Contact {
            name: name.to_string(),
            email: email.into_inner(),
            phone_number: phone_number.to_string(),
            is_primary,
        });
        entries.extend(self.entries.iter().cloned().map(|mut c| {
            if is_primary {
                c.is_primary = false;
            }
            c
        }));

        Ok(Self { entries })
    }

    /// Return the list without any entry named `name`.
    ///
    /// When a primary entry is removed and contacts remain, the new head of
    /// the list is promoted.
    pub fn remove_contact(&self, name: &str) -> Self {
        let removed_primary = self
            .entries
            .iter()
            .any(|c| c.name == name && c.is_primary);

        let mut entries: Vec<Contact> = self
            .entries
            .iter()
            .filter(|c| c.name != name)
            .cloned()
            .collect();

        if removed_primary {
            if let Some(head) = entries.first_mut() {
                head.is_primary = true;
            }
        }

        Self { entries }
    }

    /// Return the list with `name` as the only primary entry.
    ///
    /// An unknown name yields a list with no primary; callers are expected to
    /// pass a name taken from the list.
    pub fn set_primary(&self, name: &str) -> Self {
        if !self.entries.iter().any(|c| c.name == name) {
            tracing::warn!("set_primary called with unknown contact name: {}", name);
        }

        let entries = self
            .entries
            .iter()
            .cloned()
            .map(|mut c| {
                c.is_primary = c.name == name;
                c
            })
            .collect();

        Self { entries }
    }

    /// The primary contact, if any.
    pub fn primary(&self) -> Option<&Contact> {
        self.entries.iter().find(|c| c.is_primary)
    }

    /// Number of entries flagged primary.
    pub fn primary_count(&self) -> usize {
        self.entries.iter().filter(|c| c.is_primary).count()
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Contact> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
