//! Build an EvidenceChain from a claim and a pool of known evidence.

use std::collections::HashSet;

use super::graph::export_graph;
use super::types::{ArgumentStructure, EvidenceChain, InferenceStep, Premise};
use crate::claim::Claim;
use crate::evidence::{Evidence, EvidenceIndex, EvidenceStrength};

/// Primary evidence: direct or strong, and not disputed.
pub fn is_primary(evidence: &Evidence) -> bool {
    evidence.strength.meets(EvidenceStrength::Strong) && !evidence.is_disputed()
}

/// Partition the claim's evidence and pull contradicting items from `pool`.
///
/// The argument has one premise per primary item and, when there is
/// supporting evidence, a single inference citing all of it. The returned
/// chain is always consistent and carries a graph export.
pub fn build_chain(claim: &Claim, pool: &EvidenceIndex<'_>) -> EvidenceChain {
    let (primary, supporting): (Vec<Evidence>, Vec<Evidence>) =
        claim.evidence().iter().cloned().partition(is_primary);

    let own_ids: HashSet<&str> = claim.evidence().iter().map(|e| e.id.as_str()).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut contradictory: Vec<Evidence> = Vec::new();
    for item in claim.evidence() {
        for other in pool.resolve_contradictions(item) {
            if !own_ids.contains(other.id.as_str()) && seen.insert(other.id.clone()) {
                contradictory.push(other.clone());
            }
        }
    }

    let premises = primary
        .iter()
        .map(|e| Premise {
            evidence_id: e.id.clone(),
            statement: e.highlighted_text.clone().unwrap_or_else(|| e.original_text.clone()),
        })
        .collect();

    let inferences = if supporting.is_empty() {
        Vec::new()
    } else {
        vec![InferenceStep {
            id: format!("{}-supporting", claim.id),
            from_evidence: supporting.iter().map(|e| e.id.clone()).collect(),
            conclusion: format!("{} supporting observations corroborate the claim", supporting.len()),
        }]
    };

    let mut chain = EvidenceChain {
        claim_id: claim.id.clone(),
        primary_evidence: primary,
        supporting_evidence: supporting,
        contradictory_evidence: if contradictory.is_empty() { None } else { Some(contradictory) },
        argument: ArgumentStructure {
            premises,
            inferences,
            conclusion: claim.statement.clone(),
        },
        graph: None,
    };
    chain.graph = Some(export_graph(&chain));

    tracing::debug!(
        claim_id = %claim.id,
        primary = chain.primary_evidence.len(),
        supporting = chain.supporting_evidence.len(),
        contradictory = chain.contradictory().len(),
        "evidence chain built"
    );

    chain
}
