//! Contact list management for a buyer under construction.
//!
//! The list enforces the single-primary invariant: a non-empty list has
//! exactly one primary contact.

pub mod contact_list;

pub use contact_list::ContactList;
