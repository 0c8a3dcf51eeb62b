//! Evidence records, audit trail, contradiction detection and claim projections.

use assessment_core::claim::*;
use assessment_core::evidence::*;
use assessment_core::AssessError;

fn evidence(id: &str, source: EvidenceSource, strength: EvidenceStrength, confidence: u8) -> Evidence {
    EvidenceBuilder::new(id, source, strength, Confidence::new(confidence), format!("text for {}", id)).build()
}

fn claim_with(evidence: Vec<Evidence>) -> Claim {
    Claim::new(
        "c1",
        ClaimType::TechnicalSkill,
        "Writes production Rust",
        "engineering",
        Importance::High,
        evidence,
    )
}

// ---- Confidence ----

#[test]
fn confidence_clamps_on_construction() {
    assert_eq!(Confidence::new(140).value(), 100);
    assert_eq!(Confidence::new(0).value(), 0);
}

#[test]
fn confidence_out_of_range_rejected_on_ingestion() {
    let ok: Result<Confidence, _> = serde_json::from_str("100");
    assert!(ok.is_ok());
    let bad: Result<Confidence, _> = serde_json::from_str("101");
    assert!(bad.is_err(), "101 must not deserialize");
}

#[test]
fn unknown_source_rejected_on_ingestion() {
    let bad: Result<EvidenceSource, _> = serde_json::from_str("\"horoscope\"");
    assert!(bad.is_err());
    let ok: EvidenceSource = serde_json::from_str("\"interview_feedback\"").unwrap();
    assert_eq!(ok, EvidenceSource::InterviewFeedback);
}

#[test]
fn strength_ordering_direct_is_strongest() {
    assert!(EvidenceStrength::Direct.meets(EvidenceStrength::Moderate));
    assert!(EvidenceStrength::Moderate.meets(EvidenceStrength::Moderate));
    assert!(!EvidenceStrength::Weak.meets(EvidenceStrength::Moderate));
    assert_eq!(EvidenceStrength::ORDERED.iter().map(|s| s.rank()).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn evidence_fields_read_through_accessors() {
    let e = EvidenceBuilder::new("e1", EvidenceSource::WorkSample, EvidenceStrength::Direct, Confidence::new(85), "shipped parser")
        .highlighted("parser")
        .context("take-home")
        .related_to("e0")
        .build();

    assert_eq!(e.id(), "e1");
    assert_eq!(e.source(), EvidenceSource::WorkSample);
    assert_eq!(e.strength(), EvidenceStrength::Direct);
    assert_eq!(e.confidence().value(), 85);
    assert_eq!(e.original_text(), "shipped parser");
    assert_eq!(e.highlighted_text(), Some("parser"));
    assert_eq!(e.context(), Some("take-home"));
    assert!(e.related_evidence_ids().contains("e0"));

    let restored: Evidence = serde_json::from_value(serde_json::to_value(&e).unwrap()).unwrap();
    assert_eq!(restored, e);
}

// ---- Audit trail ----

#[test]
fn verification_change_appends_one_entry() {
    let mut e = evidence("e1", EvidenceSource::Resume, EvidenceStrength::Strong, 80);
    let mut trail = AuditTrail::new();

    assert!(e.set_verification_status(VerificationStatus::Verified, "recruiter-7", &mut trail).unwrap());
    assert_eq!(e.verification_status(), Some(VerificationStatus::Verified));
    assert_eq!(trail.len(), 1);

    let entry = &trail.entries()[0];
    assert_eq!(entry.evidence_id, "e1");
    assert_eq!(entry.action, AuditAction::VerificationChanged);
    assert_eq!(entry.performed_by, "recruiter-7");
    assert_eq!(entry.previous_value, serde_json::Value::Null);
    assert_eq!(entry.new_value, serde_json::json!("verified"));
}

#[test]
fn unchanged_verification_records_nothing() {
    let mut e = EvidenceBuilder::new(
        "e1",
        EvidenceSource::Resume,
        EvidenceStrength::Strong,
        Confidence::new(80),
        "text",
    )
    .verification(VerificationStatus::Disputed)
    .build();
    let mut trail = AuditTrail::new();

    assert!(!e.set_verification_status(VerificationStatus::Disputed, "r", &mut trail).unwrap());
    assert!(trail.is_empty());
}

#[test]
fn contradiction_link_and_unlink_are_audited() {
    let mut e = evidence("e1", EvidenceSource::Resume, EvidenceStrength::Strong, 80);
    let mut trail = AuditTrail::new();

    assert!(e.link_contradiction("e2", "auditor", &mut trail).unwrap());
    assert!(!e.link_contradiction("e2", "auditor", &mut trail).unwrap(), "duplicate link is a no-op");
    assert!(e.unlink_contradiction("e2", "auditor", &mut trail).unwrap());
    assert!(!e.unlink_contradiction("e2", "auditor", &mut trail).unwrap());

    let actions: Vec<AuditAction> = trail.for_evidence("e1").map(|a| a.action).collect();
    assert_eq!(actions, vec![AuditAction::ContradictionLinked, AuditAction::ContradictionUnlinked]);
    assert!(e.contradicting_evidence_ids().is_empty());
}

#[test]
fn self_contradiction_rejected() {
    let mut e = evidence("e1", EvidenceSource::Resume, EvidenceStrength::Strong, 80);
    let mut trail = AuditTrail::new();
    let err = e.link_contradiction("e1", "auditor", &mut trail).unwrap_err();
    assert!(matches!(err, AssessError::InvalidInput(_)));
    assert!(trail.is_empty());
}

#[test]
fn pair_link_updates_both_sides() {
    let mut a = evidence("a", EvidenceSource::Resume, EvidenceStrength::Strong, 80);
    let mut b = evidence("b", EvidenceSource::ReferenceCheck, EvidenceStrength::Moderate, 70);
    let mut trail = AuditTrail::new();

    link_contradicting_pair(&mut a, &mut b, "auditor", &mut trail).unwrap();

    assert!(a.contradicting_evidence_ids().contains("b"));
    assert!(b.contradicting_evidence_ids().contains("a"));
    assert_eq!(trail.len(), 2);
}

// ---- Contradiction detection ----

#[test]
fn one_sided_declaration_is_enough() {
    let a = EvidenceBuilder::new("a", EvidenceSource::Resume, EvidenceStrength::Strong, Confidence::new(90), "5 years Rust")
        .contradicts("b")
        .build();
    let b = evidence("b", EvidenceSource::ReferenceCheck, EvidenceStrength::Moderate, 70);
    let c = evidence("c", EvidenceSource::WorkSample, EvidenceStrength::Direct, 95);

    assert!(contradicts(&a, &b));
    assert!(contradicts(&b, &a));
    assert!(!contradicts(&a, &c));
}

#[test]
fn find_contradictions_lists_each_pair_once() {
    let a = EvidenceBuilder::new("a", EvidenceSource::Resume, EvidenceStrength::Strong, Confidence::new(90), "x")
        .contradicts("b")
        .build();
    let b = EvidenceBuilder::new("b", EvidenceSource::ReferenceCheck, EvidenceStrength::Weak, Confidence::new(50), "y")
        .contradicts("a")
        .build();
    let c = evidence("c", EvidenceSource::WorkSample, EvidenceStrength::Direct, 95);

    let pairs = find_contradictions(&[a, b, c]);
    assert_eq!(pairs, vec![("a".to_string(), "b".to_string())]);
}

#[test]
fn index_resolves_known_ids_only() {
    let a = EvidenceBuilder::new("a", EvidenceSource::Resume, EvidenceStrength::Strong, Confidence::new(90), "x")
        .contradicts("b")
        .contradicts("ghost")
        .build();
    let b = evidence("b", EvidenceSource::ReferenceCheck, EvidenceStrength::Weak, 50);
    let c = EvidenceBuilder::new("c", EvidenceSource::AiAnalysis, EvidenceStrength::Inferential, Confidence::new(40), "z")
        .contradicts("a")
        .build();
    let pool = vec![a.clone(), b, c];
    let index = EvidenceIndex::new(&pool);

    let ids: Vec<&str> = index.resolve_contradictions(&a).iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert!(index.get("ghost").is_none());
}

// ---- Claim projections ----

#[test]
fn claim_projections_follow_evidence_changes() {
    let mut claim = claim_with(vec![]);
    assert_eq!(claim.evidence_summary(), "No evidence available");
    assert_eq!(claim.confidence_score(), 0);

    claim.add_evidence(evidence("e1", EvidenceSource::Resume, EvidenceStrength::Direct, 100));
    assert_eq!(claim.confidence_score(), 100);
    assert_eq!(claim.evidence_summary(), "1 of resume (average confidence 100%)");

    claim.add_evidence(evidence("e2", EvidenceSource::InterviewFeedback, EvidenceStrength::Weak, 50));
    // (100 + 40 × 0.5) / 2 = 60
    assert_eq!(claim.confidence_score(), 60);
    assert_eq!(
        claim.evidence_summary(),
        "1 of resume, 1 of interview feedback (average confidence 75%)"
    );

    let removed = claim.remove_evidence("e1").unwrap();
    assert_eq!(removed.id(), "e1");
    assert_eq!(claim.confidence_score(), 20);
    assert!(claim.remove_evidence("e1").is_none());
}

#[test]
fn claim_locale_switch_rerenders_summary() {
    let mut claim = claim_with(vec![evidence("e1", EvidenceSource::Portfolio, EvidenceStrength::Strong, 70)]);
    claim.set_summary_locale(SummaryLocale::Ko);
    assert_eq!(claim.evidence_summary(), "포트폴리오 1건 (평균 신뢰도 70%)");
}

#[test]
fn deserialized_claim_ignores_supplied_projections() {
    let claim = claim_with(vec![evidence("e1", EvidenceSource::Resume, EvidenceStrength::Strong, 50)]);
    let mut json = serde_json::to_value(&claim).unwrap();
    json["confidence_score"] = serde_json::json!(99);
    json["evidence_summary"] = serde_json::json!("forged");

    let restored: Claim = serde_json::from_value(json).unwrap();
    assert_eq!(restored.confidence_score(), 40);
    assert_eq!(restored.evidence_summary(), "1 of resume (average confidence 50%)");
    assert_eq!(restored, claim);
}

#[test]
fn claim_types_cover_every_family() {
    for family in [
        ClaimFamily::Skill,
        ClaimFamily::Experience,
        ClaimFamily::Competency,
        ClaimFamily::CultureFit,
        ClaimFamily::Potential,
        ClaimFamily::Risk,
    ] {
        assert!(!ClaimType::in_family(family).is_empty(), "{:?} has no claim types", family);
    }
}

#[test]
fn claim_type_displays_wire_name() {
    for claim_type in ClaimType::ALL {
        let wire = serde_json::to_value(claim_type).unwrap();
        assert_eq!(wire, serde_json::json!(claim_type.as_str()));
        assert_eq!(claim_type.to_string(), claim_type.as_str());
    }
    assert_eq!(ClaimType::TechnicalSkill.to_string(), "technical_skill");
}
