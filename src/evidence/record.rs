//! The Evidence record and its builder.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::{Confidence, EvidenceSource, EvidenceStrength, SourceDetail, VerificationStatus};

/// A single sourced fact.
///
/// Immutable once built: fields are read through accessors, and the only
/// mutable parts, the verification status and the contradiction links, change
/// through the audited methods in [`super::audit`] so every change leaves a
/// trail entry. Other records refer to evidence by `id`, which never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub(crate) id: String,
    pub(crate) source: EvidenceSource,
    pub(crate) strength: EvidenceStrength,
    pub(crate) original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) highlighted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) context: Option<String>,
    pub(crate) source_detail: SourceDetail,
    pub(crate) confidence: Confidence,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub(crate) related_evidence_ids: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) verification_status: Option<VerificationStatus>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub(crate) contradicting_evidence_ids: BTreeSet<String>,
}

impl Evidence {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> EvidenceSource {
        self.source
    }

    pub fn strength(&self) -> EvidenceStrength {
        self.strength
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn highlighted_text(&self) -> Option<&str> {
        self.highlighted_text.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn source_detail(&self) -> &SourceDetail {
        &self.source_detail
    }

    pub fn related_evidence_ids(&self) -> &BTreeSet<String> {
        &self.related_evidence_ids
    }

    pub fn verification_status(&self) -> Option<VerificationStatus> {
        self.verification_status
    }

    /// Ids this item is declared to contradict (back-references only).
    pub fn contradicting_evidence_ids(&self) -> &BTreeSet<String> {
        &self.contradicting_evidence_ids
    }

    pub fn is_disputed(&self) -> bool {
        self.verification_status == Some(VerificationStatus::Disputed)
    }

    /// `weight(strength) × confidence / 100`, the per-item score used by
    /// chain aggregation and claim scoring.
    pub fn weighted_score(&self) -> f64 {
        self.strength.weight() * self.confidence.fraction()
    }
}

/// Fluent construction for [`Evidence`].
pub struct EvidenceBuilder {
    evidence: Evidence,
}

impl EvidenceBuilder {
    /// Start with the required fields. The capture timestamp defaults to now.
    pub fn new(
        id: impl Into<String>,
        source: EvidenceSource,
        strength: EvidenceStrength,
        confidence: Confidence,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            evidence: Evidence {
                id: id.into(),
                source,
                strength,
                original_text: original_text.into(),
                highlighted_text: None,
                context: None,
                source_detail: SourceDetail::at(Utc::now()),
                confidence,
                related_evidence_ids: BTreeSet::new(),
                verification_status: None,
                contradicting_evidence_ids: BTreeSet::new(),
            },
        }
    }

    pub fn highlighted(mut self, text: impl Into<String>) -> Self {
        self.evidence.highlighted_text = Some(text.into());
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.evidence.context = Some(context.into());
        self
    }

    pub fn source_detail(mut self, detail: SourceDetail) -> Self {
        self.evidence.source_detail = detail;
        self
    }

    pub fn verification(mut self, status: VerificationStatus) -> Self {
        self.evidence.verification_status = Some(status);
        self
    }

    pub fn related_to(mut self, id: impl Into<String>) -> Self {
        self.evidence.related_evidence_ids.insert(id.into());
        self
    }

    /// Declare a contradiction at capture time. Later edits go through the audit trail.
    pub fn contradicts(mut self, id: impl Into<String>) -> Self {
        self.evidence.contradicting_evidence_ids.insert(id.into());
        self
    }

    pub fn build(self) -> Evidence {
        self.evidence
    }
}
