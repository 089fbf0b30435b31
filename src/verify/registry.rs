//! Immutable certificate registry.
//!
//! Loaded once at process start from a trusted, append-only source and
//! read-only thereafter. Lookup is exact on the normalized (trimmed,
//! lowercased) fingerprint; absence is a normal outcome, never an error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::core::certificate::Certificate;
use crate::error::{Result, VerifyError};

const BUILTIN_CERTIFICATES: &str = include_str!("builtin_certificates.json");

/// On-disk registry document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub certificates: Vec<Certificate>,
}

/// The loaded, immutable registry table.
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<String, Certificate>,
}

static BUILTIN: Lazy<Arc<Registry>> = Lazy::new(|| {
    Arc::new(Registry::from_json_str(BUILTIN_CERTIFICATES).expect("builtin registry is valid"))
});

/// Normalize a fingerprint for lookup: trim + lowercase.
pub(crate) fn normalize_fingerprint(fingerprint: &str) -> String {
    fingerprint.trim().to_lowercase()
}

impl Registry {
    /// The embedded reference registry, parsed once per process.
    pub fn builtin() -> Arc<Registry> {
        Arc::clone(&BUILTIN)
    }

    /// Build a registry from certificate records, validating each record
    /// and rejecting duplicate fingerprints.
    pub fn from_certificates(certificates: Vec<Certificate>) -> Result<Self> {
        let mut entries = HashMap::with_capacity(certificates.len());
        for certificate in certificates {
            certificate.validate()?;
            let key = normalize_fingerprint(&certificate.fingerprint);
            if entries.contains_key(&key) {
                return Err(VerifyError::Registry(format!(
                    "duplicate fingerprint: {key}"
                )));
            }
            entries.insert(key, certificate);
        }
        debug!(entry_count = entries.len(), "registry loaded");
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        Self::from_certificates(document.certificates)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: RegistryDocument = serde_json::from_reader(reader)?;
        Self::from_certificates(document.certificates)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Exact lookup on the normalized fingerprint. No fuzzy or prefix
    /// matching; `None` for unknown fingerprints.
    pub fn lookup(&self, fingerprint: &str) -> Option<&Certificate> {
        self.entries.get(&normalize_fingerprint(fingerprint))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
