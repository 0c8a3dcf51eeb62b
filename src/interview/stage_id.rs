//! Stage identifiers and their string encoding.
//!
//! `resume` is round 0. Interview rounds encode as
//! `interview_<round>[_<type>][_<sub_round>]`, where a `technical` type and an
//! absent sub-round are left out. Decoding restores the elided defaults, so
//! `decode(encode(id)) == id` for every identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AssessError;

const RESUME: &str = "resume";
const INTERVIEW_PREFIX: &str = "interview_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    PhoneScreen,
    Technical,
    Behavioral,
    CultureFit,
    SystemDesign,
    Executive,
    Final,
}

impl InterviewType {
    pub const ALL: [InterviewType; 7] = [
        Self::PhoneScreen,
        Self::Technical,
        Self::Behavioral,
        Self::CultureFit,
        Self::SystemDesign,
        Self::Executive,
        Self::Final,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhoneScreen => "phone_screen",
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::CultureFit => "culture_fit",
            Self::SystemDesign => "system_design",
            Self::Executive => "executive",
            Self::Final => "final",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite stage key `(round, type, sub_round)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StageId {
    /// Round 0, always first.
    Resume,
    Interview {
        round: u32,
        interview_type: InterviewType,
        sub_round: Option<u32>,
    },
}

impl StageId {
    pub fn interview(round: u32, interview_type: InterviewType) -> Self {
        Self::Interview {
            round,
            interview_type,
            sub_round: None,
        }
    }

    pub fn with_sub_round(self, sub: u32) -> Self {
        match self {
            Self::Resume => Self::Resume,
            Self::Interview {
                round, interview_type, ..
            } => Self::Interview {
                round,
                interview_type,
                sub_round: Some(sub),
            },
        }
    }

    pub fn round(&self) -> u32 {
        match self {
            Self::Resume => 0,
            Self::Interview { round, .. } => *round,
        }
    }

    pub fn interview_type(&self) -> Option<InterviewType> {
        match self {
            Self::Resume => None,
            Self::Interview { interview_type, .. } => Some(*interview_type),
        }
    }

    pub fn sub_round(&self) -> Option<u32> {
        match self {
            Self::Resume => None,
            Self::Interview { sub_round, .. } => *sub_round,
        }
    }

    /// Encoded string form.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Inverse of [`encode`](Self::encode).
    pub fn decode(s: &str) -> Result<Self, AssessError> {
        s.parse()
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resume => f.write_str(RESUME),
            Self::Interview {
                round,
                interview_type,
                sub_round,
            } => {
                write!(f, "{}{}", INTERVIEW_PREFIX, round)?;
                if *interview_type != InterviewType::Technical {
                    write!(f, "_{}", interview_type)?;
                }
                if let Some(sub) = sub_round {
                    write!(f, "_{}", sub)?;
                }
                Ok(())
            }
        }
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> AssessError {
    AssessError::InvalidStageId {
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_number(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for StageId {
    type Err = AssessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == RESUME {
            return Ok(Self::Resume);
        }
        let rest = s
            .strip_prefix(INTERVIEW_PREFIX)
            .ok_or_else(|| invalid(s, "expected 'resume' or 'interview_<round>...'"))?;

        let (round_part, tail) = match rest.split_once('_') {
            Some((r, t)) => (r, Some(t)),
            None => (rest, None),
        };
        let round = parse_number(round_part).ok_or_else(|| invalid(s, "round must be a number"))?;
        if round == 0 {
            return Err(invalid(s, "interview rounds start at 1"));
        }

        let Some(tail) = tail else {
            return Ok(Self::interview(round, InterviewType::Technical));
        };

        // Type names never end in a digit, so a trailing numeric segment is the sub-round.
        let (type_part, sub_round) = match tail.rsplit_once('_') {
            Some((head, last)) if parse_number(last).is_some() => (Some(head), parse_number(last)),
            _ => match parse_number(tail) {
                Some(sub) => (None, Some(sub)),
                None => (Some(tail), None),
            },
        };

        let interview_type = match type_part {
            None => InterviewType::Technical,
            Some(name) => InterviewType::parse(name)
                .ok_or_else(|| invalid(s, format!("unknown interview type '{}'", name)))?,
        };

        Ok(Self::Interview {
            round,
            interview_type,
            sub_round,
        })
    }
}

impl Serialize for StageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
