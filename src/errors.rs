//! Assessment error types (thiserror).
//!
//! Scoring, contradiction detection, validation and next-stage suggestion are
//! total and never return these. Errors only arise at the boundary: loading
//! configuration, decoding stage identifiers, and mutating snapshots.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid stage identifier '{value}': {reason}")]
    InvalidStageId { value: String, reason: String },

    #[error("Template {template_id} has no stages")]
    EmptyTemplate { template_id: String },

    #[error("Template {template_id} lists stage {stage} more than once")]
    DuplicateStage { template_id: String, stage: String },

    #[error("Template {template_id}: stage {stage} depends on unknown stage {dependency}")]
    UnknownDependency {
        template_id: String,
        stage: String,
        dependency: String,
    },

    #[error("Template {template_id} has a dependency cycle: {}", members.join(" -> "))]
    DependencyCycle {
        template_id: String,
        members: Vec<String>,
    },

    #[error("Stage {stage} cannot be entered, unmet dependencies: {}", missing.join(", "))]
    UnmetDependencies { stage: String, missing: Vec<String> },

    #[error("Stage {stage} is already completed")]
    StageAlreadyCompleted { stage: String },

    #[error("Invalid process transition: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AssessResult<T> = Result<T, AssessError>;
