//! Certificate records as issued by the registry's trusted source.
//!
//! Entries are loaded once at process start and never mutated at runtime;
//! the serde field names match the registry's JSON document format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VerifyError};

/// Expiry sentinel meaning "never expires".
pub fn never_expires() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).expect("sentinel date is valid")
}

/// Supplementary certificate details surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateMetadata {
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// External reference link for manual cross-checking.
    pub verification_url: String,
}

/// A registry-known certificate.
///
/// Invariants, enforced at registry load time: `fingerprint` is unique
/// across the registry and `issue_date <= expiry_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    /// Registry-issued lookup key; matched after trim + lowercase.
    pub fingerprint: String,
    pub issuer: String,
    pub holder_name: String,
    pub certificate_type: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CertificateMetadata>,
}

impl Certificate {
    /// Whether this certificate carries the never-expires sentinel.
    pub fn is_perpetual(&self) -> bool {
        self.expiry_date == never_expires()
    }

    /// Check the record-level invariants. Called by the registry loader.
    pub fn validate(&self) -> Result<()> {
        if self.fingerprint.trim().is_empty() {
            return Err(VerifyError::Registry(format!(
                "certificate {} has an empty fingerprint",
                self.id
            )));
        }
        if self.issue_date > self.expiry_date {
            return Err(VerifyError::Registry(format!(
                "certificate {} has issue date {} after expiry date {}",
                self.id, self.issue_date, self.expiry_date
            )));
        }
        Ok(())
    }
}
