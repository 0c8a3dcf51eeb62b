//! Chain strength aggregation.
//!
//! score = 0.6 × mean(primary) + 0.3 × mean(supporting) − 10 × |contradictory|,
//! clamped to [0, 100], where each item contributes weight(strength) × confidence / 100.
//!
//! The contradiction penalty is flat: a contradicting item costs 10 points
//! whatever its own strength or confidence. Downstream consumers compare
//! against these exact constants.

use serde::{Deserialize, Serialize};

use super::types::EvidenceChain;
use crate::evidence::Evidence;

pub const PRIMARY_WEIGHT: f64 = 0.6;
pub const SUPPORTING_WEIGHT: f64 = 0.3;
pub const CONTRADICTION_PENALTY: f64 = 10.0;

/// Breakdown of a chain strength computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainStrength {
    pub primary_mean: f64,
    pub supporting_mean: f64,
    pub contradiction_penalty: f64,
    /// Final score in [0, 100].
    pub score: f64,
}

/// Mean of per-item weighted scores. An empty partition yields 0.
fn partition_mean(evidence: &[Evidence]) -> f64 {
    let total: f64 = evidence.iter().map(Evidence::weighted_score).sum();
    total / evidence.len().max(1) as f64
}

pub fn compute_chain_strength(chain: &EvidenceChain) -> ChainStrength {
    let primary_mean = partition_mean(&chain.primary_evidence);
    let supporting_mean = partition_mean(&chain.supporting_evidence);
    let contradiction_penalty = CONTRADICTION_PENALTY * chain.contradictory().len() as f64;

    let raw = PRIMARY_WEIGHT * primary_mean + SUPPORTING_WEIGHT * supporting_mean - contradiction_penalty;

    let strength = ChainStrength {
        primary_mean,
        supporting_mean,
        contradiction_penalty,
        score: raw.clamp(0.0, 100.0),
    };

    tracing::debug!(
        claim_id = %chain.claim_id,
        primary = chain.primary_evidence.len(),
        supporting = chain.supporting_evidence.len(),
        contradictory = chain.contradictory().len(),
        score = strength.score,
        "chain strength computed"
    );

    strength
}

/// Chain strength score alone, in [0, 100].
pub fn chain_strength(chain: &EvidenceChain) -> f64 {
    compute_chain_strength(chain).score
}
