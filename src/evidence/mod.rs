//! Evidence: sourced, strength-rated facts, their audit trail, contradiction
//! detection and summaries.

pub mod audit;
pub mod contradiction;
pub mod record;
pub mod summary;
pub mod types;

pub use audit::{link_contradicting_pair, AuditAction, AuditTrail, EvidenceAudit};
pub use contradiction::{contradicts, find_contradictions, EvidenceIndex};
pub use record::{Evidence, EvidenceBuilder};
pub use summary::{average_confidence, generate_evidence_summary, SummaryLocale};
pub use types::{Confidence, EvidenceSource, EvidenceStrength, SourceDetail, VerificationStatus};
