//! Contact models: a person attached to a buyer.

use serde::{Deserialize, Serialize};

/// A validated contact entry held in a buyer's contact list.
///
/// Entries are only built by [`crate::contacts::ContactList::add_contact`],
/// which trims every field and checks the list-wide uniqueness rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Display name, unique within the list (case-sensitive)
    pub name: String,

    /// Email address, unique within the list (case-insensitive)
    pub email: String,

    /// Phone number as entered, trimmed
    pub phone_number: String,

    /// Whether this is the buyer's main point of contact
    #[serde(default)]
    pub is_primary: bool,
}

impl Contact {
    /// Lower-cased, trimmed email used for duplicate detection.
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// Raw contact input as typed into the draft, before trimming and validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactCandidate {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone_number: String,

    /// Requested primary flag (defaults to false)
    #[serde(default)]
    pub is_primary: bool,
}

impl ContactCandidate {
    /// Create a candidate that does not ask to be primary.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            is_primary: false,
        }
    }

    /// Request that this candidate become the primary contact.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}
