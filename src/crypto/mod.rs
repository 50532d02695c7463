//! Recipient identity hashing and verification.

pub mod digest;
pub mod verify;
