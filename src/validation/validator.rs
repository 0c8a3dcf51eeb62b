//! Claim validator: checks a claim's evidence against the rules that apply to its type.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rule::EvidenceValidationRule;
use crate::claim::Claim;
use crate::evidence::{EvidenceSource, EvidenceStrength};

/// What a rule found lacking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    MissingSources { missing: Vec<EvidenceSource> },
    InsufficientEvidence { required: usize, actual: usize },
    InsufficientStrength {
        required: EvidenceStrength,
        strongest: Option<EvidenceStrength>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule_id: String,
    pub rule_name: String,
    pub kind: ViolationKind,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule '{}': ", self.rule_name)?;
        match &self.kind {
            ViolationKind::MissingSources { missing } => {
                let names: Vec<&str> = missing.iter().map(EvidenceSource::as_str).collect();
                write!(f, "missing required evidence sources: {}", names.join(", "))
            }
            ViolationKind::InsufficientEvidence { required, actual } => {
                write!(f, "requires at least {} pieces of evidence, found {}", required, actual)
            }
            ViolationKind::InsufficientStrength { required, strongest } => match strongest {
                Some(s) => write!(f, "requires evidence of at least {} strength, strongest is {}", required, s),
                None => write!(f, "requires evidence of at least {} strength, none provided", required),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<RuleViolation>,
    /// Ids of the rules that applied, in evaluation order.
    pub rules_applied: Vec<String>,
}

impl ValidationResult {
    /// Human-readable violation messages, in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Evaluate one rule against a claim, appending any violations.
fn check_rule(claim: &Claim, rule: &EvidenceValidationRule, out: &mut Vec<RuleViolation>) {
    let evidence = claim.evidence();
    let violation = |kind| RuleViolation {
        rule_id: rule.id.clone(),
        rule_name: rule.name.clone(),
        kind,
    };

    let present: BTreeSet<EvidenceSource> = evidence.iter().map(|e| e.source).collect();
    let missing: Vec<EvidenceSource> = rule.required_sources.difference(&present).copied().collect();
    if !missing.is_empty() {
        out.push(violation(ViolationKind::MissingSources { missing }));
    }

    if evidence.len() < rule.minimum_evidence {
        out.push(violation(ViolationKind::InsufficientEvidence {
            required: rule.minimum_evidence,
            actual: evidence.len(),
        }));
    }

    let strongest = evidence.iter().map(|e| e.strength).min();
    if !strongest.is_some_and(|s| s.meets(rule.minimum_strength)) {
        out.push(violation(ViolationKind::InsufficientStrength {
            required: rule.minimum_strength,
            strongest,
        }));
    }
}

/// Validate `claim` against every rule that applies to its type.
///
/// Applicable rules run in descending priority (ties keep input order); every
/// rule is evaluated and all violations accumulate. No applicable rule means
/// the claim is valid.
pub fn validate_claim(claim: &Claim, rules: &[EvidenceValidationRule]) -> ValidationResult {
    let mut applicable: Vec<&EvidenceValidationRule> =
        rules.iter().filter(|r| r.applies_to(claim.claim_type)).collect();
    applicable.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut violations = Vec::new();
    for rule in &applicable {
        check_rule(claim, rule, &mut violations);
    }

    let result = ValidationResult {
        is_valid: violations.is_empty(),
        violations,
        rules_applied: applicable.iter().map(|r| r.id.clone()).collect(),
    };

    tracing::debug!(
        claim_id = %claim.id,
        claim_type = %claim.claim_type,
        rules = result.rules_applied.len(),
        violations = result.violations.len(),
        "claim validated"
    );

    result
}

/// Validator bound to a process-wide rule set.
#[derive(Debug, Clone)]
pub struct ClaimValidator {
    rules: Vec<EvidenceValidationRule>,
}

impl ClaimValidator {
    pub fn new(rules: Vec<EvidenceValidationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[EvidenceValidationRule] {
        &self.rules
    }

    pub fn validate(&self, claim: &Claim) -> ValidationResult {
        validate_claim(claim, &self.rules)
    }
}

impl Default for ClaimValidator {
    fn default() -> Self {
        Self::new(super::rule::default_rules())
    }
}
