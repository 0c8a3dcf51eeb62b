//! Closed enumerations and small value types shared by every evidence record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a piece of evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    Resume,
    InterviewFeedback,
    BehavioralObservation,
    TestResult,
    ReferenceCheck,
    WorkSample,
    AiAnalysis,
    PublicProfile,
    Certification,
    Portfolio,
}

impl EvidenceSource {
    /// All 10 evidence sources.
    pub const ALL: [EvidenceSource; 10] = [
        Self::Resume,
        Self::InterviewFeedback,
        Self::BehavioralObservation,
        Self::TestResult,
        Self::ReferenceCheck,
        Self::WorkSample,
        Self::AiAnalysis,
        Self::PublicProfile,
        Self::Certification,
        Self::Portfolio,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::InterviewFeedback => "interview_feedback",
            Self::BehavioralObservation => "behavioral_observation",
            Self::TestResult => "test_result",
            Self::ReferenceCheck => "reference_check",
            Self::WorkSample => "work_sample",
            Self::AiAnalysis => "ai_analysis",
            Self::PublicProfile => "public_profile",
            Self::Certification => "certification",
            Self::Portfolio => "portfolio",
        }
    }
}

impl fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How directly a piece of evidence supports its claim.
///
/// Variant order is the strength order: `Direct` is the strongest and compares
/// as the smallest, so "at or above moderate" is `strength <= Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    Direct,
    Strong,
    Moderate,
    Weak,
    Inferential,
}

impl EvidenceStrength {
    /// Strongest first.
    pub const ORDERED: [EvidenceStrength; 5] = [
        Self::Direct,
        Self::Strong,
        Self::Moderate,
        Self::Weak,
        Self::Inferential,
    ];

    /// Fixed numeric weight used by chain aggregation and claim scoring.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Direct => 100.0,
            Self::Strong => 80.0,
            Self::Moderate => 60.0,
            Self::Weak => 40.0,
            Self::Inferential => 30.0,
        }
    }

    /// Position on the strength ladder, 0 = direct.
    pub fn rank(&self) -> usize {
        match self {
            Self::Direct => 0,
            Self::Strong => 1,
            Self::Moderate => 2,
            Self::Weak => 3,
            Self::Inferential => 4,
        }
    }

    /// True when `self` is at least as strong as `minimum`.
    pub fn meets(&self, minimum: EvidenceStrength) -> bool {
        self.rank() <= minimum.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Inferential => "inferential",
        }
    }
}

impl fmt::Display for EvidenceStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Unverified,
    Disputed,
}

/// Reliability estimate as an integer percentage in `0..=100`.
///
/// Out-of-range values cannot be constructed: `new` clamps, and
/// deserialization rejects anything above 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: Confidence = Confidence(100);

    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Confidence as a fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for Confidence {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            Err(format!("confidence must be within 0..=100, got {}", value))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Confidence> for u8 {
    fn from(c: Confidence) -> u8 {
        c.0
    }
}

/// Where exactly the evidence was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl SourceDetail {
    /// Detail carrying only a capture timestamp.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            document_id: None,
            interview_id: None,
            interviewer_id: None,
            timestamp,
            page: None,
            section: None,
            line: None,
        }
    }
}
