//! EvidenceValidationRule and the built-in rule set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::claim::{ClaimFamily, ClaimType};
use crate::evidence::{EvidenceSource, EvidenceStrength};

/// A named, priority-ordered gate on a claim's evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceValidationRule {
    pub id: String,
    pub name: String,
    /// Higher runs first. Order only affects message ordering.
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub required_sources: BTreeSet<EvidenceSource>,
    #[serde(default)]
    pub minimum_evidence: usize,
    pub minimum_strength: EvidenceStrength,
    pub applicable_to_types: BTreeSet<ClaimType>,
}

impl EvidenceValidationRule {
    pub fn applies_to(&self, claim_type: ClaimType) -> bool {
        self.applicable_to_types.contains(&claim_type)
    }
}

/// Rules used when configuration supplies none.
pub fn default_rules() -> Vec<EvidenceValidationRule> {
    vec![
        EvidenceValidationRule {
            id: "risk-substantiation".to_string(),
            name: "Risk claims need corroborated, direct evidence".to_string(),
            priority: 100,
            required_sources: BTreeSet::from([EvidenceSource::InterviewFeedback, EvidenceSource::ReferenceCheck]),
            minimum_evidence: 2,
            minimum_strength: EvidenceStrength::Strong,
            applicable_to_types: ClaimType::in_family(ClaimFamily::Risk).into_iter().collect(),
        },
        EvidenceValidationRule {
            id: "technical-skill".to_string(),
            name: "Technical skills must be demonstrated".to_string(),
            priority: 80,
            required_sources: BTreeSet::from([EvidenceSource::Resume]),
            minimum_evidence: 2,
            minimum_strength: EvidenceStrength::Moderate,
            applicable_to_types: BTreeSet::from([ClaimType::TechnicalSkill]),
        },
        EvidenceValidationRule {
            id: "experience-documented".to_string(),
            name: "Experience claims must be documented".to_string(),
            priority: 60,
            required_sources: BTreeSet::from([EvidenceSource::Resume]),
            minimum_evidence: 1,
            minimum_strength: EvidenceStrength::Moderate,
            applicable_to_types: ClaimType::in_family(ClaimFamily::Experience).into_iter().collect(),
        },
        EvidenceValidationRule {
            id: "observed-competency".to_string(),
            name: "Competency and culture claims need first-hand observation".to_string(),
            priority: 40,
            required_sources: BTreeSet::new(),
            minimum_evidence: 1,
            minimum_strength: EvidenceStrength::Weak,
            applicable_to_types: ClaimType::in_family(ClaimFamily::Competency)
                .into_iter()
                .chain(ClaimType::in_family(ClaimFamily::CultureFit))
                .collect(),
        },
    ]
}
