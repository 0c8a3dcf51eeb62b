//! Multi-round interview progression: stage ids, templates, gating, suggestion.

pub mod engine;
pub mod process;
pub mod stage_id;
pub mod template;
pub mod types;

pub use engine::{
    available_next_stages, can_enter_stage, complete_stage, fallback_stage, missing_dependencies, suggest_next_stage,
    InterviewStageEngine,
};
pub use stage_id::{InterviewType, StageId};
pub use template::{default_template, select_template, validate_template, validate_templates};
pub use types::{
    CandidateInterviewProcess, CompletedStage, FinalDecision, InterviewProcessTemplate, InterviewStageConfig,
    ProcessStatus, Seniority, TriggerType,
};
