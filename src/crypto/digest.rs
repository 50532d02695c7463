//! SHA-256 identity hashes.

use sha2::{Digest, Sha256};

/// Algorithm tag the platform prefixes onto recipient identity hashes.
pub const SHA256_IDENTITY_PREFIX: &str = "sha256$";

/// Compute SHA-256 of `data` and return it as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Format an email as a recipient identity: `sha256$<hex>`.
///
/// The email is hashed byte-for-byte; no trimming or case folding.
pub fn hash_identity(email: &str) -> String {
    format!("{}{}", SHA256_IDENTITY_PREFIX, sha256_hex(email.as_bytes()))
}

/// Remove the `sha256$` tag from a stored identity.
///
/// An identity without the tag is returned unchanged, so a bare hex hash
/// still compares against the computed digest.
pub fn strip_identity_prefix(identity: &str) -> &str {
    identity
        .strip_prefix(SHA256_IDENTITY_PREFIX)
        .unwrap_or(identity)
}
