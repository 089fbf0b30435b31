//! Error types for the certiblock verification core.
//!
//! Per-request verification is total: a verdict is always produced and no
//! error escapes the engine. The variants here cover the intake boundary
//! and the load-once constructors for catalogs, registries and configs.

use thiserror::Error;

/// Main error type for certiblock operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Payload rejected at the intake boundary (oversized or wrong type).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Fingerprint or byte payload missing. Surfaced internally; the
    /// engine resolves this to a `NotFound` verdict, never an `Err`.
    #[error("Empty query: {0}")]
    EmptyQuery(String),

    /// File I/O errors from the load-once constructors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Signature catalog failed load-time validation.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Registry failed load-time validation.
    #[error("Registry error: {0}")]
    Registry(String),
}

/// Result type alias for certiblock operations
pub type Result<T> = std::result::Result<T, VerifyError>;
