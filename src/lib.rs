//! # assessment-core
//!
//! Evidence-backed claim assessment and interview stage progression for
//! candidate evaluation.
//!
//! ## Modules
//! - `evidence` — Evidence records, audit trail, contradiction detection, summaries
//! - `claim` — Claims with cached confidence score and evidence summary
//! - `chain` — EvidenceChain partitioning, strength aggregation, graph export
//! - `validation` — EvidenceValidationRule set and the claim validator
//! - `interview` — stage id codec, templates, dependency gating, next-stage suggestion
//! - `config` — AssessmentConfig (TOML), loaded once and read-only afterwards
//! - `errors` — AssessError, AssessResult
//! - `logging` — tracing subscriber setup
//!
//! Every scoring, validation and suggestion operation is a pure function of
//! its inputs and safe to call from many threads at once.

pub mod chain;
pub mod claim;
pub mod config;
pub mod errors;
pub mod evidence;
pub mod interview;
pub mod logging;
pub mod validation;

pub use config::AssessmentConfig;
pub use errors::{AssessError, AssessResult};
