//! Data models for the contact directory.
//!
//! This module contains the stored contact record, the partial-update patch
//! and the listing sort key.

pub mod contact;
pub mod sort_key;

pub use contact::{Contact, ContactUpdate};
pub use sort_key::SortKey;
