//! Interview subsystem configuration.

use serde::{Deserialize, Serialize};

use crate::interview::{default_template, InterviewProcessTemplate, InterviewType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    pub templates: Vec<InterviewProcessTemplate>,
    /// Stage type proposed when a process has no template.
    pub fallback_stage_type: InterviewType,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            templates: vec![default_template()],
            fallback_stage_type: InterviewType::Technical,
        }
    }
}
