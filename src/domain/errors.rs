//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating contact entries and buyer values.
///
/// The display strings of the contact variants are user-facing and stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty after trimming.
    NameRequired,

    /// The contact email is empty after trimming.
    EmailRequired,

    /// The contact phone number is empty after trimming.
    PhoneRequired,

    /// The contact email does not look like an address.
    InvalidEmail,

    /// Another contact in the list already has this name.
    DuplicateName,

    /// Another contact in the list already has this email (case-insensitive).
    DuplicateEmail,

    /// The provided ABN is not an 11 digit business number.
    InvalidAbn(String),

    /// The provided ID is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "name required"),
            Self::EmailRequired => write!(f, "email required"),
            Self::PhoneRequired => write!(f, "phone required"),
            Self::InvalidEmail => write!(f, "invalid email"),
            Self::DuplicateName => write!(f, "duplicate name"),
            Self::DuplicateEmail => write!(f, "duplicate email"),
            Self::InvalidAbn(abn) => write!(f, "Invalid ABN: {}", abn),
            Self::EmptyId => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
