//! The buyer draft edited through the intake tools.
//!
//! Scalar fields are free-form until submission; contacts are validated as
//! they are added.

use crate::contacts::ContactList;
use crate::domain::text::{is_blank, trim_input};
use crate::domain::{Abn, ValidationError};
use crate::error::SubmitError;
use crate::models::{BuyerFields, BuyerFieldsPatch, ContactCandidate, CreateBuyerRequest};
use serde::Serialize;

/// A buyer under construction.
///
/// Field edits are never validated on their own; [`BuyerDraft::to_request`]
/// checks everything at submit time. Contact edits go through
/// [`ContactList`] and are validated immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerDraft {
    pub fields: BuyerFields,
    pub contacts: ContactList,
}

impl BuyerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a partial field update.
    pub fn set_fields(&mut self, patch: BuyerFieldsPatch) {
        self.fields.apply(patch);
    }

    /// Add a contact; on failure the draft is left as it was.
    pub fn add_contact(&mut self, candidate: &ContactCandidate) -> Result<(), ValidationError> {
        self.contacts = self.contacts.add_contact(candidate)?;
        Ok(())
    }

    pub fn remove_contact(&mut self, name: &str) {
        self.contacts = self.contacts.remove_contact(name);
    }

    pub fn set_primary(&mut self, name: &str) {
        self.contacts = self.contacts.set_primary(name);
    }

    /// Whether [`BuyerDraft::to_request`] would succeed.
    pub fn is_ready(&self) -> bool {
        self.to_request().is_ok()
    }

    /// Build the creation payload.
    ///
    /// # Errors
    ///
    /// - `SubmitError::NoContacts` if no contact has been added.
    /// - `SubmitError::MissingField` for the first blank required field.
    /// - `SubmitError::InvalidAbn` if the ABN is not 11 digits.
    pub fn to_request(&self) -> Result<CreateBuyerRequest, SubmitError> {
        if self.contacts.is_empty() {
            return Err(SubmitError::NoContacts);
        }

        for (field, value) in self.fields.required() {
            if is_blank(value) {
                return Err(SubmitError::MissingField(field));
            }
        }

        let abn = Abn::new(&self.fields.abn).map_err(|e| match e {
            ValidationError::InvalidAbn(raw) => SubmitError::InvalidAbn(raw),
            other => SubmitError::InvalidAbn(other.to_string()),
        })?;

        Ok(CreateBuyerRequest {
            legal_name: trim_input(&self.fields.legal_name).to_string(),
            abn,
            address: trim_input(&self.fields.address).to_string(),
            contact_channel: trim_input(&self.fields.contact_channel).to_string(),
            account_number: trim_input(&self.fields.account_number).to_string(),
            contacts: self.contacts.as_slice().to_vec(),
        })
    }

    /// Discard everything entered so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> BuyerFieldsPatch {
        BuyerFieldsPatch {
            legal_name: Some(" Acme Pty Ltd ".to_string()),
            abn: Some("51 824 753 556".to_string()),
            address: Some("1 Main St, Sydney".to_string()),
            contact_channel: Some("email".to_string()),
            account_number: Some("ACC-001".to_string()),
        }
    }

    fn ready_draft() -> BuyerDraft {
        let mut draft = BuyerDraft::new();
        draft.set_fields(complete_fields());
        draft
            .add_contact(&ContactCandidate::new("Alice", "a@x.com", "111"))
            .unwrap();
        draft
    }

    #[test]
    fn test_submit_requires_a_contact() {
        let mut draft = BuyerDraft::new();
        draft.set_fields(complete_fields());
        assert_eq!(draft.to_request(), Err(SubmitError::NoContacts));
        assert!(!draft.is_ready());
    }

    #[test]
    fn test_submit_reports_first_missing_field() {
        let mut draft = ready_draft();
        draft.set_fields(BuyerFieldsPatch {
            address: Some("   ".to_string()),
            account_number: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(draft.to_request(), Err(SubmitError::MissingField("address")));
    }

    #[test]
    fn test_submit_rejects_bad_abn() {
        let mut draft = ready_draft();
        draft.set_fields(BuyerFieldsPatch {
            abn: Some("123".to_string()),
            ..Default::default()
        });
        assert_eq!(
            draft.to_request(),
            Err(SubmitError::InvalidAbn("123".to_string()))
        );
    }

    #[test]
    fn test_request_is_trimmed_and_normalized() {
        let request = ready_draft().to_request().unwrap();
        assert_eq!(request.legal_name, "Acme Pty Ltd");
        assert_eq!(request.abn.as_str(), "51824753556");
        assert_eq!(request.contacts.len(), 1);
        assert!(request.contacts[0].is_primary);
    }

    #[test]
    fn test_failed_add_keeps_draft() {
        let mut draft = ready_draft();
        let before = draft.clone();

        let err = draft
            .add_contact(&ContactCandidate::new("Alice", "z@x.com", "999"))
            .unwrap_err();

        assert_eq!(err, ValidationError::DuplicateName);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = ready_draft();
        draft.reset();
        assert_eq!(draft, BuyerDraft::new());
    }
}
