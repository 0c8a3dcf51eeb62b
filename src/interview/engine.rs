//! Interview stage engine: dependency gating and next-stage suggestion.

use chrono::Utc;
use tracing::{debug, info, warn};

use super::stage_id::{InterviewType, StageId};
use super::template::{select_template, validate_templates};
use super::types::{
    CandidateInterviewProcess, CompletedStage, InterviewProcessTemplate, InterviewStageConfig, ProcessStatus,
    Seniority, TriggerType,
};
use crate::errors::{AssessError, AssessResult};

/// Dependencies of `stage` that the process has not completed, in declared order.
pub fn missing_dependencies(process: &CandidateInterviewProcess, stage: &InterviewStageConfig) -> Vec<StageId> {
    stage
        .dependencies
        .iter()
        .filter(|dep| !process.is_completed(dep))
        .copied()
        .collect()
}

/// A stage may be entered only when every dependency is already completed.
pub fn can_enter_stage(process: &CandidateInterviewProcess, stage: &InterviewStageConfig) -> bool {
    stage.dependencies.iter().all(|dep| process.is_completed(dep))
}

/// Template stages, in template order, that are not completed and whose
/// dependencies are all met.
pub fn available_next_stages<'t>(
    process: &CandidateInterviewProcess,
    template: &'t InterviewProcessTemplate,
) -> Vec<&'t InterviewStageConfig> {
    template
        .stages
        .iter()
        .filter(|stage| !process.is_completed(&stage.id) && can_enter_stage(process, stage))
        .collect()
}

/// Generic stage proposed when no template applies: `current_round + 1`, no gating.
///
/// `None` when the next round number does not fit in a `u32`.
pub fn fallback_stage(
    process: &CandidateInterviewProcess,
    interview_type: InterviewType,
) -> Option<InterviewStageConfig> {
    let round = process.current_round.checked_add(1)?;
    Some(InterviewStageConfig::new(
        StageId::interview(round, interview_type),
        format!("Round {} {} interview", round, interview_type),
    ))
}

/// Suggest the next stage without touching the process.
///
/// With a template: the first available stage, or `None` once the template is
/// exhausted. Without one: a `technical` stage at the next round, or `None`
/// when the round counter is already at its maximum. Terminal processes get
/// `None`.
pub fn suggest_next_stage(
    process: &CandidateInterviewProcess,
    template: Option<&InterviewProcessTemplate>,
) -> Option<InterviewStageConfig> {
    suggest_with_fallback(process, template, InterviewType::Technical)
}

fn suggest_with_fallback(
    process: &CandidateInterviewProcess,
    template: Option<&InterviewProcessTemplate>,
    fallback_type: InterviewType,
) -> Option<InterviewStageConfig> {
    if process.status.is_terminal() {
        return None;
    }
    match template {
        Some(template) => available_next_stages(process, template).first().map(|s| (*s).clone()),
        None => fallback_stage(process, fallback_type),
    }
}

/// Record `stage` as completed on a process snapshot.
///
/// Fails if the process is not in progress, the stage is already completed,
/// or any dependency is unmet. On success the current stage and round move to
/// the completed stage.
pub fn complete_stage(
    process: &mut CandidateInterviewProcess,
    stage: &InterviewStageConfig,
    trigger: TriggerType,
    profile_version: u32,
) -> AssessResult<()> {
    if process.status != ProcessStatus::InProgress {
        return Err(AssessError::InvalidTransition {
            from: process.status.as_str().to_string(),
            to: format!("complete {}", stage.id),
        });
    }
    if process.is_completed(&stage.id) {
        return Err(AssessError::StageAlreadyCompleted {
            stage: stage.id.to_string(),
        });
    }
    let missing = missing_dependencies(process, stage);
    if !missing.is_empty() {
        return Err(AssessError::UnmetDependencies {
            stage: stage.id.to_string(),
            missing: missing.iter().map(ToString::to_string).collect(),
        });
    }

    process.completed_stages.push(CompletedStage {
        stage: stage.id,
        completed_at: Utc::now(),
        profile_version,
        trigger,
    });
    process.current_stage = stage.id;
    process.current_round = stage.id.round();

    debug!(
        candidate_id = %process.candidate_id,
        job_id = %process.job_id,
        stage = %stage.id,
        ?trigger,
        profile_version,
        "stage completed"
    );
    Ok(())
}

/// Stage engine bound to the configured templates.
#[derive(Debug, Clone)]
pub struct InterviewStageEngine {
    templates: Vec<InterviewProcessTemplate>,
    fallback_type: InterviewType,
}

impl InterviewStageEngine {
    /// Build an engine, rejecting invalid templates up front.
    pub fn new(templates: Vec<InterviewProcessTemplate>, fallback_type: InterviewType) -> AssessResult<Self> {
        validate_templates(&templates)?;
        info!(templates = templates.len(), fallback = %fallback_type, "interview stage engine ready");
        Ok(Self {
            templates,
            fallback_type,
        })
    }

    pub fn templates(&self) -> &[InterviewProcessTemplate] {
        &self.templates
    }

    pub fn template(&self, id: &str) -> Option<&InterviewProcessTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn select_template(&self, job_type: Option<&str>, seniority: Option<Seniority>) -> Option<&InterviewProcessTemplate> {
        select_template(&self.templates, job_type, seniority)
    }

    /// The template a process is bound to, if it names one this engine knows.
    ///
    /// A process bound to an unknown template id is logged and treated as unbound.
    pub fn template_for(&self, process: &CandidateInterviewProcess) -> Option<&InterviewProcessTemplate> {
        let id = process.template_id.as_deref()?;
        let template = self.template(id);
        if template.is_none() {
            warn!(
                candidate_id = %process.candidate_id,
                job_id = %process.job_id,
                template_id = id,
                "process bound to unknown template, using fallback stage"
            );
        }
        template
    }

    /// Next stage for a process, using its bound template or the configured fallback.
    pub fn suggest_next_stage(&self, process: &CandidateInterviewProcess) -> Option<InterviewStageConfig> {
        suggest_with_fallback(process, self.template_for(process), self.fallback_type)
    }
}
