//! Stage configs, templates and candidate process snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stage_id::StageId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewStageConfig {
    pub id: StageId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stages that must be completed before this one may be entered.
    #[serde(default)]
    pub dependencies: Vec<StageId>,
}

impl InterviewStageConfig {
    pub fn new(id: StageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            dependencies: Vec::new(),
        }
    }

    pub fn depends_on(mut self, dependency: StageId) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

/// Ordered, reusable stage sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewProcessTemplate {
    pub id: String,
    pub name: String,
    pub stages: Vec<InterviewStageConfig>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Seniority>,
}

impl InterviewProcessTemplate {
    pub fn stage(&self, id: &StageId) -> Option<&InterviewStageConfig> {
        self.stages.iter().find(|s| s.id == *id)
    }
}

/// What caused a stage to be recorded as completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Manual,
    Auto,
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedStage {
    pub stage: StageId,
    pub completed_at: DateTime<Utc>,
    /// Candidate profile version the stage was completed against.
    pub profile_version: u32,
    pub trigger: TriggerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    InProgress,
    Completed,
    Terminated,
    OnHold,
}

impl ProcessStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Terminated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Terminated => "terminated",
            Self::OnHold => "on_hold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalDecision {
    Hire,
    Reject,
    Pending,
}

/// Snapshot of one candidate's progression for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInterviewProcess {
    pub candidate_id: String,
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub current_round: u32,
    pub current_stage: StageId,
    #[serde(default)]
    pub completed_stages: Vec<CompletedStage>,
    pub status: ProcessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<FinalDecision>,
}

impl CandidateInterviewProcess {
    /// A fresh process sitting at the resume stage.
    pub fn new(candidate_id: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            job_id: job_id.into(),
            template_id: None,
            current_round: 0,
            current_stage: StageId::Resume,
            completed_stages: Vec::new(),
            status: ProcessStatus::InProgress,
            decision: None,
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn is_completed(&self, stage: &StageId) -> bool {
        self.completed_stages.iter().any(|c| c.stage == *stage)
    }

    pub fn completed_ids(&self) -> impl Iterator<Item = &StageId> {
        self.completed_stages.iter().map(|c| &c.stage)
    }
}
