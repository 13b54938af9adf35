//! Data models for buyers and their contacts.
//!
//! This module contains the records exchanged with the buyer API and the
//! raw input types the draft collects before validation.

pub mod buyer;
pub mod contact;

pub use buyer::{Buyer, BuyerFields, BuyerFieldsPatch, CreateBuyerRequest};
pub use contact::{Contact, ContactCandidate};
