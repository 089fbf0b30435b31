//! Certiblock verification core.
//!
//! Verifies whether a submitted credential document corresponds to a
//! registry-known certificate or bears known hallmarks of forgery. The
//! crate owns fingerprinting, fraud-signature classification and registry
//! matching; file upload, wallet handshakes and rendering belong to the
//! embedding application, which supplies raw bytes plus a filename and
//! receives a structured [`VerificationVerdict`].
//!
//! ```
//! use certiblock::{VerificationEngine, VerificationVerdict};
//!
//! let engine = VerificationEngine::with_builtin();
//! let verdict = engine.verify_fingerprint(
//!     "cbse10th2024student001verification",
//!     "certificate.pdf",
//!     Some("Secondary School Certificate"),
//! );
//! assert!(matches!(verdict, VerificationVerdict::Verified(_)));
//! ```

/// Core data types module
pub mod core;
/// Error types
pub mod error;
/// Cryptographic hashing helpers
pub mod hashing;
/// Tracing setup
pub mod logging;
/// Verification pipeline
pub mod verify;

pub use crate::core::certificate::{Certificate, CertificateMetadata};
pub use crate::core::request::VerificationRequest;
pub use crate::core::verdict::{ClassificationOutcome, EngineState, VerificationVerdict};
pub use crate::error::{Result, VerifyError};
pub use crate::verify::catalog::SignatureCatalog;
pub use crate::verify::classify::FraudClassifier;
pub use crate::verify::config::VerifyConfig;
pub use crate::verify::engine::{Verification, VerificationEngine};
pub use crate::verify::fingerprint::FingerprintGenerator;
pub use crate::verify::intake::IntakeGate;
pub use crate::verify::registry::Registry;
