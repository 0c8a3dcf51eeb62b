//! Append-only audit trail for the mutable parts of an Evidence record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::Evidence;
use super::types::VerificationStatus;
use crate::errors::{AssessError, AssessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    VerificationChanged,
    ContradictionLinked,
    ContradictionUnlinked,
}

/// One recorded mutation. Entries are immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceAudit {
    pub id: String,
    pub evidence_id: String,
    pub action: AuditAction,
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
    pub previous_value: serde_json::Value,
    pub new_value: serde_json::Value,
}

/// Append-only log of evidence mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditTrail {
    entries: Vec<EvidenceAudit>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: EvidenceAudit) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[EvidenceAudit] {
        &self.entries
    }

    /// Entries for a single evidence item, oldest first.
    pub fn for_evidence<'a>(&'a self, evidence_id: &'a str) -> impl Iterator<Item = &'a EvidenceAudit> + 'a {
        self.entries.iter().filter(move |e| e.evidence_id == evidence_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    evidence_id: &str,
    action: AuditAction,
    performed_by: &str,
    previous_value: serde_json::Value,
    new_value: serde_json::Value,
) -> EvidenceAudit {
    EvidenceAudit {
        id: uuid::Uuid::new_v4().to_string(),
        evidence_id: evidence_id.to_string(),
        action,
        performed_by: performed_by.to_string(),
        performed_at: Utc::now(),
        previous_value,
        new_value,
    }
}

impl Evidence {
    /// Change the verification status. Returns false (and records nothing)
    /// when the status is unchanged.
    pub fn set_verification_status(
        &mut self,
        status: VerificationStatus,
        performed_by: &str,
        trail: &mut AuditTrail,
    ) -> AssessResult<bool> {
        if self.verification_status == Some(status) {
            return Ok(false);
        }
        let previous = serde_json::to_value(self.verification_status)?;
        let new = serde_json::to_value(status)?;
        self.verification_status = Some(status);
        trail.record(entry(&self.id, AuditAction::VerificationChanged, performed_by, previous, new));
        debug!(evidence_id = %self.id, ?status, performed_by, "verification status changed");
        Ok(true)
    }

    /// Declare that this item contradicts `other_id`. Returns false when the
    /// link already exists.
    pub fn link_contradiction(
        &mut self,
        other_id: &str,
        performed_by: &str,
        trail: &mut AuditTrail,
    ) -> AssessResult<bool> {
        if other_id == self.id {
            return Err(AssessError::InvalidInput(format!(
                "evidence {} cannot contradict itself",
                self.id
            )));
        }
        if self.contradicting_evidence_ids.contains(other_id) {
            return Ok(false);
        }
        let previous = serde_json::to_value(&self.contradicting_evidence_ids)?;
        self.contradicting_evidence_ids.insert(other_id.to_string());
        let new = serde_json::to_value(&self.contradicting_evidence_ids)?;
        trail.record(entry(&self.id, AuditAction::ContradictionLinked, performed_by, previous, new));
        debug!(evidence_id = %self.id, other_id, performed_by, "contradiction linked");
        Ok(true)
    }

    /// Remove a declared contradiction. Returns false when no such link existed.
    pub fn unlink_contradiction(
        &mut self,
        other_id: &str,
        performed_by: &str,
        trail: &mut AuditTrail,
    ) -> AssessResult<bool> {
        if !self.contradicting_evidence_ids.contains(other_id) {
            return Ok(false);
        }
        let previous = serde_json::to_value(&self.contradicting_evidence_ids)?;
        self.contradicting_evidence_ids.remove(other_id);
        let new = serde_json::to_value(&self.contradicting_evidence_ids)?;
        trail.record(entry(&self.id, AuditAction::ContradictionUnlinked, performed_by, previous, new));
        debug!(evidence_id = %self.id, other_id, performed_by, "contradiction unlinked");
        Ok(true)
    }
}

/// Link two items to each other, recording one entry per side that changed.
pub fn link_contradicting_pair(
    a: &mut Evidence,
    b: &mut Evidence,
    performed_by: &str,
    trail: &mut AuditTrail,
) -> AssessResult<()> {
    let b_id = b.id.clone();
    let a_id = a.id.clone();
    a.link_contradiction(&b_id, performed_by, trail)?;
    b.link_contradiction(&a_id, performed_by, trail)?;
    Ok(())
}
