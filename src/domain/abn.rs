//! Abn value object (Australian Business Number).

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const ABN_DIGITS: usize = 11;

/// An 11 digit business number, stored without spacing.
///
/// Input may be grouped with whitespace (`"51 824 753 556"`); the stored
/// form is digits only.
///
/// # Example
///
/// ```
/// use buyer_intake::domain::Abn;
///
/// let abn = Abn::new("51 824 753 556").unwrap();
/// assert_eq!(abn.as_str(), "51824753556");
/// assert_eq!(abn.formatted(), "51 824 753 556");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Abn(String);

impl Abn {
    /// Create a new Abn, stripping whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAbn` unless exactly 11 ASCII digits
    /// remain.
    pub fn new(abn: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = abn.as_ref();
        let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if digits.len() != ABN_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidAbn(raw.trim().to_string()));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The conventional `NN NNN NNN NNN` grouping.
    pub fn formatted(&self) -> String {
        format!(
            "{} {} {} {}",
            &self.0[0..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..11]
        )
    }
}

impl Serialize for Abn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Abn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Abn::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Abn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
