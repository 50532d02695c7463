//! Constant-time recipient verification.
//!
//! Proves only that the claimed email hashes to the identity the platform
//! published. Anyone who knows the recipient's email passes; the public OBI
//! API offers nothing stronger without authenticating against the platform.

use crate::crypto::digest::{sha256_hex, strip_identity_prefix};
use crate::protocol::models::BadgeAssertion;
use crate::CertmapError;
use subtle::ConstantTimeEq;

/// Compare two byte strings without short-circuiting on the first mismatch.
///
/// Slices of different length compare unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Check the claimed email against the assertion's recipient identity.
///
/// # Returns
/// * `Ok(())` - Hash of `claimed_email` equals the stored hash
/// * `Err(IdentityMismatch)` - Anything else
pub fn check_recipient(
    assertion: &BadgeAssertion,
    claimed_email: &str,
) -> Result<(), CertmapError> {
    let stored = strip_identity_prefix(&assertion.recipient_identity);
    let computed = sha256_hex(claimed_email.as_bytes());

    if constant_time_eq(stored.as_bytes(), computed.as_bytes()) {
        Ok(())
    } else {
        Err(CertmapError::IdentityMismatch)
    }
}

/// Whether `claimed_email` matches the assertion's recipient.
pub fn verify_recipient(assertion: &BadgeAssertion, claimed_email: &str) -> bool {
    check_recipient(assertion, claimed_email).is_ok()
}
