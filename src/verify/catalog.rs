//! Fraud signature catalog.
//!
//! Four disjoint sets of curated lowercase patterns: organization names,
//! platform names, certificate-type labels and issuer names known to
//! correlate with forged credentials. Entries are normalized at load time
//! so matching is case-insensitive by construction, and each set compiles
//! into an Aho-Corasick automaton for multi-pattern substring scanning.
//! Catalogs are immutable after load and injected into the classifier,
//! never consulted as ambient global state.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::error::{Result, VerifyError};

/// Company names known for fake certificates.
pub const FAKE_COMPANIES: &[&str] = &[
    "techgenius solutions",
    "code masters academy",
    "digital ninjas inc",
    "web wizard institute",
    "future coders camp",
    "elite developers hub",
    "programming gurus ltd",
    "cyber skills academy",
    "app builders institute",
    "data science pro camp",
];

/// Online course platforms not recognized for official certifications.
pub const SUSPICIOUS_PLATFORMS: &[&str] = &[
    "udemy",
    "coursera",
    "udacity",
    "edx",
    "skillshare",
    "alison",
    "futurelearn",
    "khan academy",
    "linkedin learning",
    "pluralsight",
];

/// Certificate-type labels commonly forged or unofficial.
pub const FAKE_CERTIFICATE_TYPES: &[&str] = &[
    "internship",
    "online course",
    "workshop",
    "bootcamp",
    "training program",
    "certification course",
    "summer internship",
    "virtual internship",
    "online training",
    "skill development program",
];

/// Known fake issuer names.
pub const FAKE_ISSUERS: &[&str] = &[
    "global certification council",
    "international skills board",
    "digital credentials authority",
    "online education network",
    "tech certification institute",
    "professional development board",
    "virtual learning academy",
    "corporate training alliance",
    "industry skills council",
    "digital badges authority",
];

/// One normalized pattern set with its compiled automaton.
#[derive(Debug)]
pub struct PatternSet {
    entries: Vec<String>,
    automaton: AhoCorasick,
}

impl PatternSet {
    /// Normalize (trim, lowercase), deduplicate preserving order, and
    /// compile the automaton. Blank entries are rejected.
    fn compile(name: &str, raw: &[String]) -> Result<Self> {
        let mut entries: Vec<String> = Vec::with_capacity(raw.len());
        let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
        for entry in raw {
            let normalized = entry.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(VerifyError::Catalog(format!(
                    "set {name} contains a blank entry"
                )));
            }
            if seen.insert(normalized.clone()) {
                entries.push(normalized);
            }
        }
        let automaton = AhoCorasick::new(&entries)
            .map_err(|e| VerifyError::Catalog(format!("set {name} failed to compile: {e}")))?;
        Ok(Self { entries, automaton })
    }

    /// Unique matched entries, in catalog order. The haystack must already
    /// be lowercased.
    pub fn matches<'a>(&'a self, haystack: &str) -> Vec<&'a str> {
        let mut hit = vec![false; self.entries.len()];
        for m in self.automaton.find_overlapping_iter(haystack) {
            hit[m.pattern().as_usize()] = true;
        }
        self.entries
            .iter()
            .zip(hit)
            .filter_map(|(entry, matched)| matched.then_some(entry.as_str()))
            .collect()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// On-disk catalog document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub fake_companies: Vec<String>,
    pub suspicious_platforms: Vec<String>,
    pub fake_certificate_types: Vec<String>,
    pub fake_issuers: Vec<String>,
}

/// The loaded, immutable fraud signature catalog.
#[derive(Debug)]
pub struct SignatureCatalog {
    pub fake_companies: PatternSet,
    pub suspicious_platforms: PatternSet,
    pub fake_certificate_types: PatternSet,
    pub fake_issuers: PatternSet,
}

static BUILTIN: Lazy<Arc<SignatureCatalog>> = Lazy::new(|| {
    let document = CatalogDocument {
        fake_companies: FAKE_COMPANIES.iter().map(|s| s.to_string()).collect(),
        suspicious_platforms: SUSPICIOUS_PLATFORMS.iter().map(|s| s.to_string()).collect(),
        fake_certificate_types: FAKE_CERTIFICATE_TYPES
            .iter()
            .map(|s| s.to_string())
            .collect(),
        fake_issuers: FAKE_ISSUERS.iter().map(|s| s.to_string()).collect(),
    };
    Arc::new(SignatureCatalog::from_document(document).expect("builtin catalog is valid"))
});

impl SignatureCatalog {
    /// The curated builtin catalog, compiled once per process.
    pub fn builtin() -> Arc<SignatureCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Build a catalog from a document, normalizing every set and
    /// validating that the four sets stay disjoint.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let catalog = Self {
            fake_companies: PatternSet::compile("fakeCompanies", &document.fake_companies)?,
            suspicious_platforms: PatternSet::compile(
                "suspiciousPlatforms",
                &document.suspicious_platforms,
            )?,
            fake_certificate_types: PatternSet::compile(
                "fakeCertificateTypes",
                &document.fake_certificate_types,
            )?,
            fake_issuers: PatternSet::compile("fakeIssuers", &document.fake_issuers)?,
        };
        catalog.check_disjoint()?;
        debug!(
            companies = catalog.fake_companies.entries().len(),
            platforms = catalog.suspicious_platforms.entries().len(),
            types = catalog.fake_certificate_types.entries().len(),
            issuers = catalog.fake_issuers.entries().len(),
            "signature catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn check_disjoint(&self) -> Result<()> {
        let sets: [(&str, &PatternSet); 4] = [
            ("fakeCompanies", &self.fake_companies),
            ("suspiciousPlatforms", &self.suspicious_platforms),
            ("fakeCertificateTypes", &self.fake_certificate_types),
            ("fakeIssuers", &self.fake_issuers),
        ];
        let mut owner: std::collections::HashMap<&str, &str> = std::collections::HashMap::new();
        for (name, set) in sets {
            for entry in set.entries() {
                if let Some(previous) = owner.insert(entry.as_str(), name) {
                    return Err(VerifyError::Catalog(format!(
                        "entry \"{entry}\" appears in both {previous} and {name}"
                    )));
                }
            }
        }
        Ok(())
    }
}
