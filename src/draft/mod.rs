//! The buyer draft: scalar fields plus the contact list, and the rules for
//! turning it into a creation request.

mod buyer_draft;

pub use buyer_draft::BuyerDraft;
