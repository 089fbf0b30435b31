//! Verification engine.
//!
//! Orchestrates fingerprinting, fraud classification and registry lookup
//! into a single verdict. The policy order is deliberate: fraud signals
//! dominate any coincidental registry hit, which dominates the
//! looks-legitimate pending-review heuristic, which dominates `NotFound`.
//! False negatives on fraud are costlier than false negatives on
//! legitimacy.
//!
//! The engine holds its catalog and registry behind `Arc` and never
//! mutates them; any number of verifications may run concurrently, and
//! verifying the same document twice yields the same verdict.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::request::VerificationRequest;
use crate::core::verdict::{EngineState, VerificationVerdict};
use crate::verify::catalog::SignatureCatalog;
use crate::verify::classify::FraudClassifier;
use crate::verify::config::VerifyConfig;
use crate::verify::extract;
use crate::verify::fingerprint::FingerprintGenerator;
use crate::verify::registry::Registry;

/// One in-flight verification. Walks the pipeline states and terminates
/// in `Resolved` holding the verdict.
#[derive(Debug)]
pub struct Verification {
    state: EngineState,
    verdict: Option<VerificationVerdict>,
}

impl Verification {
    fn new() -> Self {
        Self {
            state: EngineState::Idle,
            verdict: None,
        }
    }

    fn advance(&mut self, next: EngineState) {
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }

    fn resolve(&mut self, verdict: VerificationVerdict) {
        self.advance(EngineState::Resolved);
        self.verdict = Some(verdict);
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The verdict, populated once the state is `Resolved`.
    pub fn verdict(&self) -> Option<&VerificationVerdict> {
        self.verdict.as_ref()
    }

    fn into_verdict(self) -> VerificationVerdict {
        self.verdict.unwrap_or(VerificationVerdict::NotFound)
    }
}

/// The verification engine. Catalog and registry are injected at
/// construction and shared read-only across calls.
#[derive(Debug)]
pub struct VerificationEngine {
    registry: Arc<Registry>,
    classifier: FraudClassifier,
    generator: FingerprintGenerator,
    config: VerifyConfig,
}

impl VerificationEngine {
    pub fn new(
        catalog: Arc<SignatureCatalog>,
        registry: Arc<Registry>,
        config: VerifyConfig,
    ) -> Self {
        let classifier = FraudClassifier::new(catalog, config.heuristics.clone());
        let generator = FingerprintGenerator::new(config.fingerprint.clone());
        Self {
            registry,
            classifier,
            generator,
            config,
        }
    }

    /// Engine over the builtin catalog and registry with default limits.
    pub fn with_builtin() -> Self {
        Self::new(
            SignatureCatalog::builtin(),
            Registry::builtin(),
            VerifyConfig::default(),
        )
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Verify a document from its raw bytes and filename.
    pub fn verify(&self, request: &VerificationRequest) -> VerificationVerdict {
        self.verify_with_text(request, None)
    }

    /// Verify a document, using caller-supplied extracted text instead of
    /// the filename-derived placeholder.
    pub fn verify_with_text(
        &self,
        request: &VerificationRequest,
        extracted_text: Option<&str>,
    ) -> VerificationVerdict {
        let span = tracing::info_span!(
            "verify",
            filename = %request.filename(),
            size_bytes = request.raw_bytes().len()
        );
        let _g = span.enter();

        if request.raw_bytes().is_empty() {
            warn!("empty byte payload; resolving NotFound");
            return VerificationVerdict::NotFound;
        }

        let mut verification = Verification::new();
        self.run(
            &mut verification,
            request.filename(),
            extracted_text,
            FingerprintSource::Request(request),
        );
        info!("resolved");
        verification.into_verdict()
    }

    /// Verify a caller-supplied fingerprint string, with the filename and
    /// optional extracted text of the document it belongs to.
    pub fn verify_fingerprint(
        &self,
        fingerprint: &str,
        filename: &str,
        extracted_text: Option<&str>,
    ) -> VerificationVerdict {
        let span = tracing::info_span!("verify", fingerprint = %fingerprint, filename = %filename);
        let _g = span.enter();

        if fingerprint.trim().is_empty() {
            warn!("empty fingerprint query; resolving NotFound");
            return VerificationVerdict::NotFound;
        }

        let mut verification = Verification::new();
        self.run(
            &mut verification,
            filename,
            extracted_text,
            FingerprintSource::Supplied(fingerprint),
        );
        info!("resolved");
        verification.into_verdict()
    }

    fn run(
        &self,
        verification: &mut Verification,
        filename: &str,
        extracted_text: Option<&str>,
        source: FingerprintSource<'_>,
    ) {
        verification.advance(EngineState::Extracting);
        let derived;
        let text: &str = match extracted_text {
            Some(text) => text,
            None => {
                derived = extract::placeholder_text(filename);
                &derived
            }
        };

        verification.advance(EngineState::Classifying);
        let outcome = self.classifier.classify(filename, text);
        if outcome.matched {
            verification.resolve(VerificationVerdict::Fake {
                reason: outcome.reason,
                patterns: outcome.patterns,
            });
            return;
        }

        verification.advance(EngineState::MatchingRegistry);
        let fingerprint = match source {
            FingerprintSource::Supplied(fingerprint) => fingerprint.to_string(),
            FingerprintSource::Request(request) => self.generator.fingerprint(request),
        };
        if let Some(certificate) = self.registry.lookup(&fingerprint) {
            verification.resolve(VerificationVerdict::Verified(certificate.clone()));
            return;
        }

        let evidence = self.education_evidence(filename, extracted_text);
        if evidence.is_empty() {
            verification.resolve(VerificationVerdict::NotFound);
        } else {
            verification.resolve(VerificationVerdict::PendingManualReview { evidence });
        }
    }

    /// Education-domain keywords found in the filename or caller-supplied
    /// text. The placeholder text never feeds this scan: it embeds the
    /// word "certificate" by construction and would pend every unknown
    /// document.
    fn education_evidence(&self, filename: &str, extracted_text: Option<&str>) -> Vec<String> {
        let filename = filename.to_lowercase();
        let text = extracted_text.map(str::to_lowercase);
        self.config
            .heuristics
            .education_keywords
            .iter()
            .filter(|keyword| {
                filename.contains(keyword.as_str())
                    || text
                        .as_deref()
                        .is_some_and(|text| text.contains(keyword.as_str()))
            })
            .cloned()
            .collect()
    }
}

enum FingerprintSource<'a> {
    Supplied(&'a str),
    Request(&'a VerificationRequest),
}
