//! Claim classification: types, families, importance, reasoning traces.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of evaluative claim types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    TechnicalSkill,
    SoftSkill,
    LanguageProficiency,
    ExperienceDuration,
    ExperienceRelevance,
    LeadershipExperience,
    ProblemSolving,
    Communication,
    Teamwork,
    CultureFit,
    ValuesAlignment,
    GrowthPotential,
    LearningAgility,
    FlightRisk,
    RedFlag,
}

/// Grouping of claim types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimFamily {
    Skill,
    Experience,
    Competency,
    CultureFit,
    Potential,
    Risk,
}

impl ClaimType {
    /// All 15 claim types.
    pub const ALL: [ClaimType; 15] = [
        Self::TechnicalSkill,
        Self::SoftSkill,
        Self::LanguageProficiency,
        Self::ExperienceDuration,
        Self::ExperienceRelevance,
        Self::LeadershipExperience,
        Self::ProblemSolving,
        Self::Communication,
        Self::Teamwork,
        Self::CultureFit,
        Self::ValuesAlignment,
        Self::GrowthPotential,
        Self::LearningAgility,
        Self::FlightRisk,
        Self::RedFlag,
    ];

    pub fn family(&self) -> ClaimFamily {
        match self {
            Self::TechnicalSkill | Self::SoftSkill | Self::LanguageProficiency => ClaimFamily::Skill,
            Self::ExperienceDuration | Self::ExperienceRelevance | Self::LeadershipExperience => {
                ClaimFamily::Experience
            }
            Self::ProblemSolving | Self::Communication | Self::Teamwork => ClaimFamily::Competency,
            Self::CultureFit | Self::ValuesAlignment => ClaimFamily::CultureFit,
            Self::GrowthPotential | Self::LearningAgility => ClaimFamily::Potential,
            Self::FlightRisk | Self::RedFlag => ClaimFamily::Risk,
        }
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TechnicalSkill => "technical_skill",
            Self::SoftSkill => "soft_skill",
            Self::LanguageProficiency => "language_proficiency",
            Self::ExperienceDuration => "experience_duration",
            Self::ExperienceRelevance => "experience_relevance",
            Self::LeadershipExperience => "leadership_experience",
            Self::ProblemSolving => "problem_solving",
            Self::Communication => "communication",
            Self::Teamwork => "teamwork",
            Self::CultureFit => "culture_fit",
            Self::ValuesAlignment => "values_alignment",
            Self::GrowthPotential => "growth_potential",
            Self::LearningAgility => "learning_agility",
            Self::FlightRisk => "flight_risk",
            Self::RedFlag => "red_flag",
        }
    }

    /// Claim types belonging to `family`.
    pub fn in_family(family: ClaimFamily) -> Vec<ClaimType> {
        Self::ALL.iter().copied().filter(|t| t.family() == family).collect()
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningMethod {
    Deductive,
    Inductive,
    Abductive,
    Analogical,
}

/// How a claim was reached from its evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTrace {
    pub method: ReasoningMethod,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assumptions: Vec<String>,
}
