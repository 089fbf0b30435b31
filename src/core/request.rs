//! Verification request payload.

use serde::{Deserialize, Serialize};

/// Raw bytes plus filename for one verification call.
///
/// Ephemeral: owned by a single call and discarded when it returns. The
/// filename feeds classification and the pending-review heuristic; the
/// content fingerprint derives from the bytes alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    raw_bytes: Vec<u8>,
    filename: String,
}

impl VerificationRequest {
    pub fn new(raw_bytes: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self {
            raw_bytes: raw_bytes.into(),
            filename: filename.into(),
        }
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}
