//! Buyer models: draft fields, the creation payload and the created record.

use crate::domain::{Abn, BuyerId};
use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// Scalar fields of a buyer under construction, as entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyerFields {
    /// Registered legal name of the organization
    pub legal_name: String,

    /// Australian Business Number, possibly space separated
    pub abn: String,

    /// Postal or street address
    pub address: String,

    /// Preferred channel for reaching the buyer (e.g. "email", "phone")
    pub contact_channel: String,

    /// Account number in the buyer's ledger
    pub account_number: String,
}

/// Partial update of [`BuyerFields`]; `None` leaves a field untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyerFieldsPatch {
    pub legal_name: Option<String>,
    pub abn: Option<String>,
    pub address: Option<String>,
    pub contact_channel: Option<String>,
    pub account_number: Option<String>,
}

impl BuyerFields {
    /// Apply a patch, overwriting only the fields it carries.
    pub fn apply(&mut self, patch: BuyerFieldsPatch) {
        if let Some(v) = patch.legal_name {
            self.legal_name = v;
        }
        if let Some(v) = patch.abn {
            self.abn = v;
        }
        if let Some(v) = patch.address {
            self.address = v;
        }
        if let Some(v) = patch.contact_channel {
            self.contact_channel = v;
        }
        if let Some(v) = patch.account_number {
            self.account_number = v;
        }
    }

    /// Required fields paired with their wire names, in submit-check order.
    pub fn required(&self) -> [(&'static str, &str); 5] {
        [
            ("legalName", self.legal_name.as_str()),
            ("abn", self.abn.as_str()),
            ("address", self.address.as_str()),
            ("contactChannel", self.contact_channel.as_str()),
            ("accountNumber", self.account_number.as_str()),
        ]
    }
}

/// Request payload for creating a buyer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuyerRequest {
    pub legal_name: String,
    pub abn: Abn,
    pub address: String,
    pub contact_channel: String,
    pub account_number: String,
    pub contacts: Vec<Contact>,
}

/// A buyer record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: BuyerId,

    pub legal_name: String,

    #[serde(default)]
    pub abn: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub contact_channel: String,

    #[serde(default)]
    pub account_number: String,

    #[serde(default)]
    pub contacts: Vec<Contact>,

    /// When the buyer was created (ISO 8601 timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Buyer {
    /// The buyer's primary contact, if the record carries one.
    pub fn primary_contact(&self) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.is_primary)
    }
}
