//! Coarse content fingerprinting.
//!
//! Derives a stable identity string by sampling a bounded prefix of the
//! byte stream at a fixed stride and hex-encoding the sampled bytes. Pure
//! function of the request: no I/O, no randomness, no clock. Identity
//! derives from content only; renaming a document does not change it.
//!
//! The digest is visually stable and human-shareable, not
//! collision-resistant. Callers needing forgery-proof identity layer
//! `crate::hashing::sha256_digest` on top.

use crate::core::request::VerificationRequest;
use crate::verify::config::FingerprintConfig;

/// Fingerprint of a zero-length payload.
pub const EMPTY_FINGERPRINT: &str = "empty";

/// Sampling fingerprint generator.
#[derive(Debug, Clone, Default)]
pub struct FingerprintGenerator {
    config: FingerprintConfig,
}

impl FingerprintGenerator {
    pub fn new(config: FingerprintConfig) -> Self {
        Self { config }
    }

    /// Compute the identity string for a request.
    pub fn fingerprint(&self, request: &VerificationRequest) -> String {
        digest_bytes(
            request.raw_bytes(),
            self.config.sample_stride,
            self.config.sample_cap,
        )
    }
}

/// Sample every `stride`th byte of the first `cap` bytes and hex-encode
/// the samples. Zero-length input yields [`EMPTY_FINGERPRINT`].
pub fn digest_bytes(bytes: &[u8], stride: usize, cap: usize) -> String {
    if bytes.is_empty() {
        return EMPTY_FINGERPRINT.to_string();
    }
    let stride = stride.max(1);
    let prefix = &bytes[..bytes.len().min(cap)];
    let sampled: Vec<u8> = prefix.iter().step_by(stride).copied().collect();
    hex::encode(sampled)
}
