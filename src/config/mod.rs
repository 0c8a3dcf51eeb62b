pub mod evidence_config;
pub mod interview_config;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use evidence_config::EvidenceConfig;
pub use interview_config::InterviewConfig;

use crate::errors::{AssessError, AssessResult};
use crate::interview::{validate_templates, InterviewStageEngine};
use crate::validation::ClaimValidator;

/// Top-level configuration, loaded once at process start.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssessmentConfig {
    pub evidence: EvidenceConfig,
    pub interview: InterviewConfig,
}

impl AssessmentConfig {
    /// Parse from a TOML string, falling back to defaults for missing fields,
    /// then validate.
    pub fn from_toml(toml_str: &str) -> AssessResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> AssessResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AssessError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        tracing::info!(
            path = %path.display(),
            rules = config.evidence.validation_rules.len(),
            templates = config.interview.templates.len(),
            "assessment config loaded"
        );
        Ok(config)
    }

    /// Reject duplicate rule ids and any template that fails validation.
    pub fn validate(&self) -> AssessResult<()> {
        let mut rule_ids = HashSet::new();
        for rule in &self.evidence.validation_rules {
            if !rule_ids.insert(rule.id.as_str()) {
                return Err(AssessError::Config(format!("duplicate validation rule id '{}'", rule.id)));
            }
            if rule.applicable_to_types.is_empty() {
                tracing::warn!(rule_id = %rule.id, "validation rule applies to no claim types");
            }
        }
        validate_templates(&self.interview.templates)
    }

    pub fn claim_validator(&self) -> ClaimValidator {
        ClaimValidator::new(self.evidence.validation_rules.clone())
    }

    pub fn stage_engine(&self) -> AssessResult<InterviewStageEngine> {
        InterviewStageEngine::new(self.interview.templates.clone(), self.interview.fallback_stage_type)
    }
}
