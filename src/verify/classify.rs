//! Fraud classification rule engine.
//!
//! A fixed, documented list of rules evaluated in priority order. Every
//! rule appends all of its matching signals to the outcome, but only the
//! first rule that matched supplies the human-readable reason
//! (first-match-wins). Reordering the rules changes observable reason
//! selection and is a breaking change.

use std::sync::Arc;
use tracing::debug;

use crate::core::verdict::ClassificationOutcome;
use crate::verify::catalog::SignatureCatalog;
use crate::verify::config::HeuristicsConfig;

/// The classification rules, tagged per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudRule {
    /// Filename or text names a known fake certification provider.
    FakeCompany,
    /// Text names an online platform not recognized for official
    /// certifications.
    SuspiciousPlatform,
    /// Text names a certificate type commonly forged or unofficial.
    FakeCertificateType,
    /// Text names a known fake issuing authority.
    FakeIssuer,
    /// Internship-like document with no institutional backing in the text.
    UnverifiedInternship,
}

/// Evaluation order. A stable, auditable contract.
pub const RULE_ORDER: &[FraudRule] = &[
    FraudRule::FakeCompany,
    FraudRule::SuspiciousPlatform,
    FraudRule::FakeCertificateType,
    FraudRule::FakeIssuer,
    FraudRule::UnverifiedInternship,
];

impl FraudRule {
    /// The reason this rule supplies when it is the first to match.
    pub fn reason(&self) -> &'static str {
        match self {
            FraudRule::FakeCompany => "known fake certification provider",
            FraudRule::SuspiciousPlatform => "unrecognized online learning platform",
            FraudRule::FakeCertificateType => "certificate type commonly forged or unofficial",
            FraudRule::FakeIssuer => "known fake issuing authority",
            FraudRule::UnverifiedInternship => "unverified internship certificate",
        }
    }
}

/// Rule engine over an injected signature catalog.
#[derive(Debug)]
pub struct FraudClassifier {
    catalog: Arc<SignatureCatalog>,
    heuristics: HeuristicsConfig,
}

impl FraudClassifier {
    pub fn new(catalog: Arc<SignatureCatalog>, heuristics: HeuristicsConfig) -> Self {
        Self { catalog, heuristics }
    }

    /// Classify a document's filename and extracted text.
    ///
    /// Inputs are lowercased before matching. The outcome is produced
    /// fresh per call and never cached.
    pub fn classify(&self, filename: &str, extracted_text: &str) -> ClassificationOutcome {
        let filename = filename.to_lowercase();
        let text = extracted_text.to_lowercase();

        let mut reason = String::new();
        let mut patterns: Vec<String> = Vec::new();
        for rule in RULE_ORDER {
            let signals = self.signals(*rule, &filename, &text);
            if !signals.is_empty() && reason.is_empty() {
                reason = rule.reason().to_string();
            }
            patterns.extend(signals);
        }

        let matched = !patterns.is_empty();
        if matched {
            debug!(reason = %reason, signal_count = patterns.len(), "fraud signals matched");
        }
        ClassificationOutcome {
            matched,
            reason,
            patterns,
        }
    }

    fn signals(&self, rule: FraudRule, filename: &str, text: &str) -> Vec<String> {
        match rule {
            FraudRule::FakeCompany => {
                let mut hits = self.catalog.fake_companies.matches(filename);
                for hit in self.catalog.fake_companies.matches(text) {
                    if !hits.contains(&hit) {
                        hits.push(hit);
                    }
                }
                hits.into_iter()
                    .map(|entry| format!("Fake company: {entry}"))
                    .collect()
            }
            FraudRule::SuspiciousPlatform => self
                .catalog
                .suspicious_platforms
                .matches(text)
                .into_iter()
                .map(|entry| format!("Suspicious platform: {entry}"))
                .collect(),
            FraudRule::FakeCertificateType => self
                .catalog
                .fake_certificate_types
                .matches(text)
                .into_iter()
                .map(|entry| format!("Suspicious certificate type: {entry}"))
                .collect(),
            FraudRule::FakeIssuer => self
                .catalog
                .fake_issuers
                .matches(text)
                .into_iter()
                .map(|entry| format!("Fake issuer: {entry}"))
                .collect(),
            FraudRule::UnverifiedInternship => {
                let internship_like = self
                    .heuristics
                    .internship_terms
                    .iter()
                    .any(|term| text.contains(term) || filename.contains(term));
                let institutional = self
                    .heuristics
                    .institutional_terms
                    .iter()
                    .any(|term| text.contains(term));
                if internship_like && !institutional {
                    vec!["Unverified internship certificate".to_string()]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::catalog::CatalogDocument;

    fn classifier() -> FraudClassifier {
        FraudClassifier::new(SignatureCatalog::builtin(), HeuristicsConfig::default())
    }

    #[test]
    fn test_clean_text_produces_no_signals() {
        let outcome = classifier().classify(
            "degree.pdf",
            "Bachelor of Engineering awarded by a state university",
        );
        assert!(!outcome.matched);
        assert!(outcome.reason.is_empty());
        assert!(outcome.patterns.is_empty());
    }

    #[test]
    fn test_fake_company_matches_filename_or_text() {
        let from_filename = classifier().classify("techgenius solutions award.pdf", "plain text");
        assert!(from_filename.matched);
        assert_eq!(from_filename.reason, "known fake certification provider");
        assert_eq!(
            from_filename.patterns,
            vec!["Fake company: techgenius solutions"]
        );

        let from_text = classifier().classify("award.pdf", "Issued by TechGenius Solutions");
        assert!(from_text.matched);
        assert_eq!(from_text.patterns, vec!["Fake company: techgenius solutions"]);
    }

    #[test]
    fn test_first_match_wins_reason_later_rules_still_append() {
        // Fake company and suspicious platform both present: company rule
        // supplies the reason, platform signal still lands in patterns.
        let outcome = classifier().classify(
            "cert.pdf",
            "code masters academy course hosted on udemy",
        );
        assert_eq!(outcome.reason, "known fake certification provider");
        assert!(outcome
            .patterns
            .contains(&"Fake company: code masters academy".to_string()));
        assert!(outcome
            .patterns
            .contains(&"Suspicious platform: udemy".to_string()));
    }

    #[test]
    fn test_fake_issuer_does_not_steal_reason_from_earlier_rule() {
        let outcome = classifier().classify(
            "cert.pdf",
            "udemy badge issued by global certification council",
        );
        assert_eq!(outcome.reason, "unrecognized online learning platform");
        assert!(outcome
            .patterns
            .contains(&"Fake issuer: global certification council".to_string()));
    }

    #[test]
    fn test_certificate_type_rule() {
        let outcome = classifier().classify("doc.pdf", "completed an online training module");
        assert_eq!(
            outcome.reason,
            "certificate type commonly forged or unofficial"
        );
        assert_eq!(
            outcome.patterns,
            vec!["Suspicious certificate type: online training"]
        );
    }

    #[test]
    fn test_internship_rule_suppressed_by_institutional_terms() {
        let flagged = classifier().classify("internship_letter.pdf", "completed at a startup");
        assert!(flagged
            .patterns
            .contains(&"Unverified internship certificate".to_string()));

        let suppressed = classifier().classify(
            "internship_letter.pdf",
            "completed at a government ministry program",
        );
        assert!(!suppressed
            .patterns
            .contains(&"Unverified internship certificate".to_string()));
    }

    #[test]
    fn test_internship_in_text_hits_type_rule_first() {
        // "internship" is also a catalog type entry, so the type rule
        // supplies the reason and the heuristic only appends its signal.
        let outcome = classifier().classify("doc.pdf", "summer internship at a startup");
        assert_eq!(
            outcome.reason,
            "certificate type commonly forged or unofficial"
        );
        assert!(outcome
            .patterns
            .contains(&"Unverified internship certificate".to_string()));
    }

    #[test]
    fn test_custom_catalog_injection() {
        let document = CatalogDocument {
            fake_companies: vec!["acme diploma works".to_string()],
            suspicious_platforms: vec![],
            fake_certificate_types: vec![],
            fake_issuers: vec![],
        };
        let catalog = Arc::new(SignatureCatalog::from_document(document).unwrap());
        let classifier = FraudClassifier::new(catalog, HeuristicsConfig::default());
        let outcome = classifier.classify("x.pdf", "printed by Acme Diploma Works");
        assert_eq!(outcome.patterns, vec!["Fake company: acme diploma works"]);
    }
}
