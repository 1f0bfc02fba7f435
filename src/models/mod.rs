//! Data models for the Sendinblue transactional suppression list.
//!
//! Wire shapes mirror the provider's JSON; `BouncedEmail` is the local record
//! built from each entry for the duration of one pass.

pub mod blocked_contact;

pub use blocked_contact::{BlockedContact, BlockedContactsResponse, BouncedEmail};
