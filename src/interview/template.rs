//! Template validation, selection and the built-in default template.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

use super::stage_id::{InterviewType, StageId};
use super::types::{InterviewProcessTemplate, InterviewStageConfig, Seniority};
use crate::errors::{AssessError, AssessResult};

/// Check a template before it is used.
///
/// Rejects empty templates, duplicate stage ids, dependencies on stages the
/// template does not contain, and dependency cycles (including self-loops).
pub fn validate_template(template: &InterviewProcessTemplate) -> AssessResult<()> {
    if template.stages.is_empty() {
        return Err(AssessError::EmptyTemplate {
            template_id: template.id.clone(),
        });
    }

    let mut graph: DiGraph<StageId, ()> = DiGraph::new();
    let mut nodes: HashMap<StageId, NodeIndex> = HashMap::new();
    for stage in &template.stages {
        if nodes.contains_key(&stage.id) {
            return Err(AssessError::DuplicateStage {
                template_id: template.id.clone(),
                stage: stage.id.to_string(),
            });
        }
        nodes.insert(stage.id, graph.add_node(stage.id));
    }

    for stage in &template.stages {
        let target = nodes[&stage.id];
        for dependency in &stage.dependencies {
            let Some(&source) = nodes.get(dependency) else {
                return Err(AssessError::UnknownDependency {
                    template_id: template.id.clone(),
                    stage: stage.id.to_string(),
                    dependency: dependency.to_string(),
                });
            };
            if source == target {
                return Err(AssessError::DependencyCycle {
                    template_id: template.id.clone(),
                    members: vec![stage.id.to_string()],
                });
            }
            graph.add_edge(source, target, ());
        }
    }

    if let Some(scc) = petgraph::algo::tarjan_scc(&graph).into_iter().find(|scc| scc.len() > 1) {
        let mut members: Vec<String> = scc.iter().map(|idx| graph[*idx].to_string()).collect();
        members.sort();
        return Err(AssessError::DependencyCycle {
            template_id: template.id.clone(),
            members,
        });
    }

    Ok(())
}

/// Validate every template and reject duplicate template ids.
pub fn validate_templates(templates: &[InterviewProcessTemplate]) -> AssessResult<()> {
    let mut seen = HashSet::new();
    for template in templates {
        if !seen.insert(template.id.as_str()) {
            return Err(AssessError::Config(format!("duplicate template id '{}'", template.id)));
        }
        validate_template(template)?;
    }
    Ok(())
}

/// Pick the template for a job.
///
/// Precedence: job type and seniority both match, then job type alone, then
/// seniority alone, then the default template. Within a tier, the first
/// matching template in configuration order wins.
pub fn select_template<'a>(
    templates: &'a [InterviewProcessTemplate],
    job_type: Option<&str>,
    seniority: Option<Seniority>,
) -> Option<&'a InterviewProcessTemplate> {
    let job_matches = |t: &InterviewProcessTemplate| job_type.is_some() && t.job_type.as_deref() == job_type;
    let seniority_matches = |t: &InterviewProcessTemplate| seniority.is_some() && t.seniority == seniority;

    templates
        .iter()
        .find(|t| job_matches(*t) && seniority_matches(*t))
        .or_else(|| templates.iter().find(|t| job_matches(*t) && t.seniority.is_none()))
        .or_else(|| templates.iter().find(|t| seniority_matches(*t) && t.job_type.is_none()))
        .or_else(|| templates.iter().find(|t| t.is_default))
}

/// resume → phone screen → technical → behavioral, each gated on the previous.
pub fn default_template() -> InterviewProcessTemplate {
    let phone = StageId::interview(1, InterviewType::PhoneScreen);
    let technical = StageId::interview(2, InterviewType::Technical);
    let behavioral = StageId::interview(3, InterviewType::Behavioral);

    InterviewProcessTemplate {
        id: "default".to_string(),
        name: "Standard interview process".to_string(),
        stages: vec![
            InterviewStageConfig::new(StageId::Resume, "Resume screening"),
            InterviewStageConfig::new(phone, "Phone screen").depends_on(StageId::Resume),
            InterviewStageConfig::new(technical, "Technical interview").depends_on(phone),
            InterviewStageConfig::new(behavioral, "Behavioral interview").depends_on(technical),
        ],
        is_default: true,
        job_type: None,
        seniority: None,
    }
}
