//! Rule-based gating of claims.

pub mod rule;
pub mod validator;

pub use rule::{default_rules, EvidenceValidationRule};
pub use validator::{validate_claim, ClaimValidator, RuleViolation, ValidationResult, ViolationKind};
