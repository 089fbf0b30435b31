//! Centralized module for cryptographic hashing algorithms.
//!
//! The coarse content fingerprint (see `verify::fingerprint`) is not
//! collision-resistant; callers that need forgery-proof identity layer one
//! of these digests on top of it.

use sha2::{Digest, Sha256, Sha512};

/// Computes the SHA-256 digest of the given data and returns it as a hex string.
pub fn sha256_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Computes the SHA-512 digest of the given data and returns it as a hex string.
pub fn sha512_digest(data: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
