//! Property tests: invariants that hold for any evidence set or stage id.

use proptest::prelude::*;

use assessment_core::chain::{build_chain, chain_strength, compute_chain_strength, EvidenceChain};
use assessment_core::claim::{weighted_confidence, Claim, ClaimType, Importance};
use assessment_core::evidence::*;
use assessment_core::interview::{InterviewType, StageId};

// ---- Strategies ----

fn source_strategy() -> impl Strategy<Value = EvidenceSource> {
    prop::sample::select(EvidenceSource::ALL.to_vec())
}

fn strength_strategy() -> impl Strategy<Value = EvidenceStrength> {
    prop::sample::select(EvidenceStrength::ORDERED.to_vec())
}

fn interview_type_strategy() -> impl Strategy<Value = InterviewType> {
    prop::sample::select(InterviewType::ALL.to_vec())
}

/// Evidence pool with unique ids `e0..eN`; each item may declare contradictions
/// against other ids in the pool.
fn pool_strategy(max: usize) -> impl Strategy<Value = Vec<Evidence>> {
    prop::collection::vec(
        (
            source_strategy(),
            strength_strategy(),
            0u8..=100,
            prop::collection::vec(0usize..max.max(1), 0..3),
            any::<bool>(),
        ),
        0..=max,
    )
    .prop_map(|rows| {
        let n = rows.len();
        rows.into_iter()
            .enumerate()
            .map(|(i, (source, strength, confidence, targets, disputed))| {
                let mut builder =
                    EvidenceBuilder::new(format!("e{}", i), source, strength, Confidence::new(confidence), "observed");
                for t in targets.into_iter().filter(|t| *t < n && *t != i) {
                    builder = builder.contradicts(format!("e{}", t));
                }
                if disputed {
                    builder = builder.verification(VerificationStatus::Disputed);
                }
                builder.build()
            })
            .collect()
    })
}

fn stage_id_strategy() -> impl Strategy<Value = StageId> {
    prop_oneof![
        Just(StageId::Resume),
        (1u32..50, interview_type_strategy(), prop::option::of(0u32..10)).prop_map(|(round, kind, sub)| {
            let id = StageId::interview(round, kind);
            match sub {
                Some(sub) => id.with_sub_round(sub),
                None => id,
            }
        }),
    ]
}

fn claim_from(evidence: Vec<Evidence>) -> Claim {
    Claim::new("c", ClaimType::Communication, "Explains clearly", "soft", Importance::Medium, evidence)
}

// ---- Chain strength ----

proptest! {
    #[test]
    fn chain_strength_stays_in_range(pool in pool_strategy(12), split in 0usize..12) {
        let split = split.min(pool.len());
        let index = EvidenceIndex::new(&pool);
        let chain: EvidenceChain = build_chain(&claim_from(pool[..split].to_vec()), &index);
        let score = chain_strength(&chain);
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn built_chains_are_consistent(pool in pool_strategy(10)) {
        let index = EvidenceIndex::new(&pool);
        let chain = build_chain(&claim_from(pool.clone()), &index);
        prop_assert!(chain.is_consistent());
        prop_assert_eq!(chain.primary_evidence.len() + chain.supporting_evidence.len(), pool.len());
        prop_assert!(chain.graph.as_ref().map_or(true, |g| g.dangling_edges().is_empty()));
    }

    #[test]
    fn primary_items_are_strong_and_undisputed(pool in pool_strategy(10)) {
        let chain = build_chain(&claim_from(pool), &EvidenceIndex::default());
        for e in &chain.primary_evidence {
            prop_assert!(e.strength().meets(EvidenceStrength::Strong));
            prop_assert!(!e.is_disputed());
        }
    }

    #[test]
    fn penalty_is_flat_per_outside_contradiction(pool in pool_strategy(10), split in 0usize..10) {
        let split = split.min(pool.len());
        let index = EvidenceIndex::new(&pool);
        let chain = build_chain(&claim_from(pool[..split].to_vec()), &index);
        let strength = compute_chain_strength(&chain);
        prop_assert_eq!(strength.contradiction_penalty, 10.0 * chain.contradictory().len() as f64);
        for e in chain.contradictory() {
            prop_assert!(!pool[..split].iter().any(|own| own.id() == e.id()));
        }
    }
}

// ---- Contradictions ----

proptest! {
    #[test]
    fn contradiction_is_symmetric(pool in pool_strategy(8)) {
        for a in &pool {
            for b in &pool {
                prop_assert_eq!(contradicts(a, b), contradicts(b, a));
            }
        }
    }

    #[test]
    fn found_pairs_are_ordered_and_unique(pool in pool_strategy(8)) {
        let pairs = find_contradictions(&pool);
        let mut seen = std::collections::HashSet::new();
        for (a, b) in &pairs {
            prop_assert!(a != b);
            prop_assert!(seen.insert((a.clone(), b.clone())));
            prop_assert!(!seen.contains(&(b.clone(), a.clone())));
        }
    }
}

// ---- Summaries and claim projections ----

proptest! {
    #[test]
    fn summary_average_is_rounded_mean(pool in pool_strategy(15)) {
        match average_confidence(&pool) {
            None => {
                prop_assert!(pool.is_empty());
                prop_assert_eq!(generate_evidence_summary(&pool, SummaryLocale::En), "No evidence available");
            }
            Some(avg) => {
                let total: f64 = pool.iter().map(|e| f64::from(e.confidence().value())).sum();
                let expected = (total / pool.len() as f64).round() as u8;
                prop_assert_eq!(avg, expected);
                let summary = generate_evidence_summary(&pool, SummaryLocale::En);
                let expected_suffix = format!("(average confidence {}%)", expected);
                prop_assert!(summary.ends_with(&expected_suffix), "{}", summary);
            }
        }
    }

    #[test]
    fn claim_projections_match_fresh_computation(pool in pool_strategy(10), remove_at in 0usize..10) {
        let mut claim = claim_from(pool.clone());
        if let Some(victim) = pool.get(remove_at) {
            claim.remove_evidence(victim.id());
        }
        prop_assert_eq!(claim.confidence_score(), weighted_confidence(claim.evidence()));
        prop_assert_eq!(
            claim.evidence_summary(),
            generate_evidence_summary(claim.evidence(), claim.summary_locale())
        );
        prop_assert!(claim.confidence_score() <= 100);
    }
}

// ---- Stage ids ----

proptest! {
    #[test]
    fn stage_id_round_trips(id in stage_id_strategy()) {
        let encoded = id.encode();
        prop_assert_eq!(StageId::decode(&encoded).unwrap(), id);
    }

    #[test]
    fn decode_never_panics(raw in "[a-z0-9_]{0,30}") {
        let _ = StageId::decode(&raw);
    }

    #[test]
    fn decoded_ids_re_encode_canonically(raw in "interview_[0-9]{1,3}(_[a-z_]{0,14})?(_[0-9]{1,2})?") {
        if let Ok(id) = StageId::decode(&raw) {
            prop_assert_eq!(StageId::decode(&id.encode()).unwrap(), id);
        }
    }
}
