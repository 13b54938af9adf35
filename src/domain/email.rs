//! EmailAddress value object.

use super::errors::ValidationError;
use super::text::trim_input;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// `[^\s@]` with form whitespace: U+FEFF excluded, U+0085 allowed.
const EMAIL_PART: &str = r"[[^\s@\x{FEFF}]\x{85}]+";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{0}@{0}\.{0}$", EMAIL_PART)).expect("Failed to compile email regex")
});

/// A type-safe wrapper for contact email addresses.
///
/// The address is trimmed on construction and must match
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`. Case is preserved as entered; use
/// [`EmailAddress::normalized`] for comparisons.
///
/// # Example
///
/// ```
/// use buyer_intake::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Ops@Acme.com.au ").unwrap();
/// assert_eq!(email.as_str(), "Ops@Acme.com.au");
/// assert_eq!(email.normalized(), "ops@acme.com.au");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, trimming and validating the format.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmailRequired` if the input is blank.
    /// - `ValidationError::InvalidEmail` if it does not match the pattern.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = trim_input(email.as_ref());

        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }

        if !Self::is_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(email.to_string()))
    }

    /// Check a trimmed string against the email pattern.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Lower-cased form used for duplicate detection.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
