//! Domain value objects and types.
//!
//! Type-safe wrappers for buyer concepts like business numbers, email
//! addresses and record IDs. These value objects validate at construction
//! time so invalid data cannot be represented past the draft boundary.

pub mod abn;
pub mod buyer_id;
pub mod email;
pub mod errors;
pub mod text;

pub use abn::Abn;
pub use buyer_id::BuyerId;
pub use email::EmailAddress;
pub use errors::ValidationError;
