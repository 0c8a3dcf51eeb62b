//! The Claim record with cached evidence projections.

use serde::{Deserialize, Serialize};

use super::types::{ClaimType, Importance, ReasoningTrace};
use crate::evidence::{generate_evidence_summary, Evidence, SummaryLocale};

/// An evaluative statement about a candidate, backed by evidence.
///
/// `evidence_summary` and `confidence_score` are projections of the evidence
/// list. They are recomputed by every method that touches the list and are
/// never accepted from input, including deserialized payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ClaimRecord")]
pub struct Claim {
    pub id: String,
    pub claim_type: ClaimType,
    pub statement: String,
    pub category: String,
    pub importance: Importance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningTrace>,
    summary_locale: SummaryLocale,
    evidence: Vec<Evidence>,
    evidence_summary: String,
    confidence_score: u8,
}

/// Deserialization shape: everything except the projections.
#[derive(Deserialize)]
struct ClaimRecord {
    id: String,
    claim_type: ClaimType,
    statement: String,
    category: String,
    importance: Importance,
    #[serde(default)]
    reasoning: Option<ReasoningTrace>,
    #[serde(default)]
    summary_locale: SummaryLocale,
    #[serde(default)]
    evidence: Vec<Evidence>,
}

impl From<ClaimRecord> for Claim {
    fn from(r: ClaimRecord) -> Self {
        let mut claim = Claim::new(r.id, r.claim_type, r.statement, r.category, r.importance, r.evidence);
        claim.reasoning = r.reasoning;
        claim.set_summary_locale(r.summary_locale);
        claim
    }
}

impl Claim {
    pub fn new(
        id: impl Into<String>,
        claim_type: ClaimType,
        statement: impl Into<String>,
        category: impl Into<String>,
        importance: Importance,
        evidence: Vec<Evidence>,
    ) -> Self {
        let mut claim = Self {
            id: id.into(),
            claim_type,
            statement: statement.into(),
            category: category.into(),
            importance,
            reasoning: None,
            summary_locale: SummaryLocale::default(),
            evidence,
            evidence_summary: String::new(),
            confidence_score: 0,
        };
        claim.recompute();
        claim
    }

    pub fn with_reasoning(mut self, reasoning: ReasoningTrace) -> Self {
        self.reasoning = Some(reasoning);
        self
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn evidence_summary(&self) -> &str {
        &self.evidence_summary
    }

    /// Strength-weighted mean confidence of the supporting evidence, 0..=100.
    pub fn confidence_score(&self) -> u8 {
        self.confidence_score
    }

    pub fn summary_locale(&self) -> SummaryLocale {
        self.summary_locale
    }

    pub fn set_summary_locale(&mut self, locale: SummaryLocale) {
        self.summary_locale = locale;
        self.recompute();
    }

    pub fn set_evidence(&mut self, evidence: Vec<Evidence>) {
        self.evidence = evidence;
        self.recompute();
    }

    pub fn add_evidence(&mut self, evidence: Evidence) {
        self.evidence.push(evidence);
        self.recompute();
    }

    /// Remove the item with `evidence_id`. Returns it if present.
    pub fn remove_evidence(&mut self, evidence_id: &str) -> Option<Evidence> {
        let pos = self.evidence.iter().position(|e| e.id == evidence_id)?;
        let removed = self.evidence.remove(pos);
        self.recompute();
        Some(removed)
    }

    fn recompute(&mut self) {
        self.evidence_summary = generate_evidence_summary(&self.evidence, self.summary_locale);
        self.confidence_score = weighted_confidence(&self.evidence);
    }
}

/// `mean(weight(strength) × confidence / 100)` rounded; 0 for no evidence.
pub fn weighted_confidence(evidence: &[Evidence]) -> u8 {
    if evidence.is_empty() {
        return 0;
    }
    let total: f64 = evidence.iter().map(Evidence::weighted_score).sum();
    (total / evidence.len() as f64).round().clamp(0.0, 100.0) as u8
}
