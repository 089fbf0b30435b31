//! Verdict and classification data types.
//!
//! These types are the sole externally observable results of a
//! verification call. They serialize with serde so the embedding
//! presentation layer can render them directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::certificate::Certificate;

/// Result of one fraud-classification pass. Produced fresh per request,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// True iff `patterns` is non-empty.
    pub matched: bool,
    /// Human-readable explanation supplied by the first rule that matched.
    pub reason: String,
    /// Every matched signal, in rule order, catalog order within a rule.
    pub patterns: Vec<String>,
}

impl ClassificationOutcome {
    /// Outcome for a document with no fraud signals.
    pub fn clean() -> Self {
        Self {
            matched: false,
            reason: String::new(),
            patterns: Vec::new(),
        }
    }
}

/// The single, mutually exclusive outcome of a verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationVerdict {
    /// The fingerprint matched a registry-known certificate.
    Verified(Certificate),
    /// Fraud signals matched; dominates any coincidental registry hit.
    Fake {
        reason: String,
        patterns: Vec<String>,
    },
    /// Looks like a legitimate educational certificate but is not in the
    /// registry; needs a human.
    PendingManualReview { evidence: Vec<String> },
    /// Unknown fingerprint, no fraud signals, no education-domain cues.
    NotFound,
}

impl VerificationVerdict {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationVerdict::Verified(_))
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, VerificationVerdict::Fake { .. })
    }

    /// The certificate carried by a `Verified` verdict.
    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            VerificationVerdict::Verified(cert) => Some(cert),
            _ => None,
        }
    }
}

/// Verification pipeline states. `Resolved` is terminal and holds the
/// verdict on the in-flight `Verification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Idle,
    Extracting,
    Classifying,
    MatchingRegistry,
    Resolved,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Idle => "Idle",
            EngineState::Extracting => "Extracting",
            EngineState::Classifying => "Classifying",
            EngineState::MatchingRegistry => "MatchingRegistry",
            EngineState::Resolved => "Resolved",
        };
        f.write_str(name)
    }
}
