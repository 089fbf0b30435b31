//! End-to-end verification scenarios over the builtin catalog and registry.

use certiblock::{VerificationEngine, VerificationRequest, VerificationVerdict};

fn engine() -> VerificationEngine {
    VerificationEngine::with_builtin()
}

#[test]
fn known_fingerprint_resolves_verified_with_full_record() {
    let verdict = engine().verify_fingerprint(
        "cbse10th2024student001verification",
        "10th_certificate.pdf",
        Some("Secondary School Certificate issued by the board"),
    );
    let cert = match &verdict {
        VerificationVerdict::Verified(cert) => cert,
        other => panic!("expected Verified, got {other:?}"),
    };
    assert_eq!(cert.holder_name, "Arjun Sharma");
    assert_eq!(cert.issuer, "Central Board of Secondary Education (CBSE)");
    assert_eq!(cert.id, "CBSE-10-2024-001");
    // The presentation layer surfaces the verification URL as a link.
    assert_eq!(
        cert.metadata.as_ref().unwrap().verification_url,
        "https://cbse.gov.in/verify/CBSE-10-2024-001"
    );
}

#[test]
fn udemy_online_training_resolves_fake_with_both_signals() {
    let verdict = engine().verify_fingerprint(
        "some-fingerprint",
        "training_cert.pdf",
        Some("This certifies the student completed via Udemy online training with distinction."),
    );
    match verdict {
        VerificationVerdict::Fake { reason, patterns } => {
            assert_eq!(reason, "unrecognized online learning platform");
            assert!(patterns.contains(&"Suspicious platform: udemy".to_string()));
            assert!(patterns.contains(&"Suspicious certificate type: online training".to_string()));
        }
        other => panic!("expected Fake, got {other:?}"),
    }
}

#[test]
fn unknown_fingerprint_with_plain_text_resolves_not_found() {
    let verdict = engine().verify_fingerprint(
        "does-not-exist-123",
        "scan.bin",
        Some("plain text content"),
    );
    assert_eq!(verdict, VerificationVerdict::NotFound);
}

#[test]
fn education_filename_without_registry_match_pends_manual_review() {
    let request = VerificationRequest::new(vec![0x11u8; 1024], "10th_marksheet_cbse.pdf");
    let verdict = engine().verify(&request);
    match verdict {
        VerificationVerdict::PendingManualReview { evidence } => {
            assert!(evidence.contains(&"10th".to_string()));
            assert!(evidence.contains(&"marksheet".to_string()));
            assert!(evidence.contains(&"cbse".to_string()));
        }
        other => panic!("expected PendingManualReview, got {other:?}"),
    }
}

#[test]
fn fraud_signals_dominate_registry_presence() {
    // A registry-known fingerprint whose document text trips a fraud rule
    // must never resolve Verified.
    let verdict = engine().verify_fingerprint(
        "icse10th2023student002verification",
        "certificate.pdf",
        Some("issued through the digital credentials authority"),
    );
    match verdict {
        VerificationVerdict::Fake { reason, patterns } => {
            assert_eq!(reason, "known fake issuing authority");
            assert_eq!(
                patterns,
                vec!["Fake issuer: digital credentials authority".to_string()]
            );
        }
        other => panic!("expected Fake, got {other:?}"),
    }
}

#[test]
fn company_reason_wins_tie_against_platform() {
    let verdict = engine().verify_fingerprint(
        "irrelevant",
        "cert.pdf",
        Some("issued by cyber skills academy, course hosted on coursera"),
    );
    match verdict {
        VerificationVerdict::Fake { reason, patterns } => {
            assert_eq!(reason, "known fake certification provider");
            assert!(patterns.contains(&"Fake company: cyber skills academy".to_string()));
            assert!(patterns.contains(&"Suspicious platform: coursera".to_string()));
        }
        other => panic!("expected Fake, got {other:?}"),
    }
}

#[test]
fn internship_without_institution_is_flagged() {
    let verdict = engine().verify_fingerprint(
        "irrelevant",
        "summer_internship_certificate.pdf",
        Some("awarded for a summer internship at a private firm"),
    );
    match verdict {
        VerificationVerdict::Fake { patterns, .. } => {
            assert!(patterns.contains(&"Unverified internship certificate".to_string()));
        }
        other => panic!("expected Fake, got {other:?}"),
    }
}

#[test]
fn internship_backed_by_university_is_not_flagged_by_heuristic() {
    // "internship" still matches the certificate-type catalog, so the
    // document is flagged, but the heuristic signal itself must be absent.
    let verdict = engine().verify_fingerprint(
        "irrelevant",
        "internship.pdf",
        Some("internship completed at a state university department"),
    );
    match verdict {
        VerificationVerdict::Fake { patterns, .. } => {
            assert!(!patterns.contains(&"Unverified internship certificate".to_string()));
            assert!(patterns.contains(&"Suspicious certificate type: internship".to_string()));
        }
        other => panic!("expected Fake, got {other:?}"),
    }
}

#[test]
fn verified_certificates_carry_expiry_semantics() {
    let verdict = engine().verify_fingerprint(
        "b2c3d4e5f6g7h8i9j0k1l2m3n4o5p6q7",
        "mbbs_degree.pdf",
        Some("MBBS Degree"),
    );
    let cert = verdict.certificate().expect("verified");
    assert_eq!(cert.holder_name, "Dr. Priya Sharma");
    assert!(cert.is_perpetual());
    assert!(cert.is_valid);
}

#[test]
fn verdicts_serialize_for_the_presentation_layer() {
    let verdict = engine().verify_fingerprint("does-not-exist-123", "x.bin", Some("nothing"));
    let json = serde_json::to_string(&verdict).unwrap();
    assert_eq!(json, r#"{"status":"not_found"}"#);
}
