//! Configuration for the verification pipeline.
//!
//! Provides centralized configuration for all pipeline components with
//! sensible defaults. Everything is serde-(de)serializable so an embedding
//! application can load its configuration from disk once at startup.

use serde::{Deserialize, Serialize};

/// Master configuration for the verification pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Intake boundary limits (payload size, content-type allow-list).
    pub intake: IntakeConfig,
    /// Content fingerprint sampling parameters.
    pub fingerprint: FingerprintConfig,
    /// Keyword lists for the classifier and engine heuristics.
    pub heuristics: HeuristicsConfig,
}

/// Intake boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Maximum accepted payload size in bytes.
    pub max_payload_bytes: u64,
    /// Accepted MIME types, compared lowercase-exact.
    pub allowed_mime_types: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 10 * 1024 * 1024,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "image/jpeg".to_string(),
                "image/jpg".to_string(),
                "image/png".to_string(),
                "image/webp".to_string(),
            ],
        }
    }
}

/// Content fingerprint sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintConfig {
    /// Sample every Nth byte of the prefix.
    pub sample_stride: usize,
    /// Prefix length cap in bytes.
    pub sample_cap: usize,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            sample_stride: 25,
            sample_cap: 2000,
        }
    }
}

/// Keyword lists backing the internship rule and the pending-review
/// heuristic. Matching is substring, against lowercased inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicsConfig {
    /// Terms marking internship-like documents.
    pub internship_terms: Vec<String>,
    /// Institutional terms whose presence in the text suppresses the
    /// internship rule.
    pub institutional_terms: Vec<String>,
    /// Education-domain keywords feeding the pending-review heuristic.
    pub education_keywords: Vec<String>,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            internship_terms: vec!["internship".to_string()],
            institutional_terms: vec![
                "government".to_string(),
                "ministry".to_string(),
                "university".to_string(),
                "college".to_string(),
            ],
            education_keywords: vec![
                "certificate".to_string(),
                "cert".to_string(),
                "10th".to_string(),
                "tenth".to_string(),
                "ssc".to_string(),
                "cbse".to_string(),
                "icse".to_string(),
                "marksheet".to_string(),
                "grade".to_string(),
            ],
        }
    }
}
