//! Evidence subsystem configuration.

use serde::{Deserialize, Serialize};

use crate::evidence::SummaryLocale;
use crate::validation::{default_rules, EvidenceValidationRule};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Locale for claim evidence summaries.
    pub summary_locale: SummaryLocale,
    /// Process-wide rule set. Read-only after load.
    pub validation_rules: Vec<EvidenceValidationRule>,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            summary_locale: SummaryLocale::En,
            validation_rules: default_rules(),
        }
    }
}
