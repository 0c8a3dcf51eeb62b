//! One-line, localized evidence summaries.

use serde::{Deserialize, Serialize};

use super::record::Evidence;
use super::types::EvidenceSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLocale {
    #[default]
    En,
    Ko,
}

impl SummaryLocale {
    /// Sentinel returned for an empty evidence list.
    pub fn no_evidence(&self) -> &'static str {
        match self {
            Self::En => "No evidence available",
            Self::Ko => "근거 없음",
        }
    }

    pub fn source_label(&self, source: EvidenceSource) -> &'static str {
        match self {
            Self::En => match source {
                EvidenceSource::Resume => "resume",
                EvidenceSource::InterviewFeedback => "interview feedback",
                EvidenceSource::BehavioralObservation => "behavioral observation",
                EvidenceSource::TestResult => "test result",
                EvidenceSource::ReferenceCheck => "reference check",
                EvidenceSource::WorkSample => "work sample",
                EvidenceSource::AiAnalysis => "AI analysis",
                EvidenceSource::PublicProfile => "public profile",
                EvidenceSource::Certification => "certification",
                EvidenceSource::Portfolio => "portfolio",
            },
            Self::Ko => match source {
                EvidenceSource::Resume => "이력서",
                EvidenceSource::InterviewFeedback => "면접 피드백",
                EvidenceSource::BehavioralObservation => "행동 관찰",
                EvidenceSource::TestResult => "테스트 결과",
                EvidenceSource::ReferenceCheck => "평판 조회",
                EvidenceSource::WorkSample => "업무 샘플",
                EvidenceSource::AiAnalysis => "AI 분석",
                EvidenceSource::PublicProfile => "공개 프로필",
                EvidenceSource::Certification => "자격증",
                EvidenceSource::Portfolio => "포트폴리오",
            },
        }
    }

    fn render_group(&self, count: usize, source: EvidenceSource) -> String {
        match self {
            Self::En => format!("{} of {}", count, self.source_label(source)),
            Self::Ko => format!("{} {}건", self.source_label(source), count),
        }
    }

    fn render_average(&self, average: u8) -> String {
        match self {
            Self::En => format!("average confidence {}%", average),
            Self::Ko => format!("평균 신뢰도 {}%", average),
        }
    }
}

/// Mean confidence over `evidence`, rounded to the nearest integer. `None` when empty.
pub fn average_confidence(evidence: &[Evidence]) -> Option<u8> {
    if evidence.is_empty() {
        return None;
    }
    let total: u32 = evidence.iter().map(|e| u32::from(e.confidence.value())).sum();
    let mean = f64::from(total) / evidence.len() as f64;
    Some(mean.round() as u8)
}

/// Group by source in first-seen order, render `"<count> of <source>"` joined
/// by `", "`, then append the rounded mean confidence.
pub fn generate_evidence_summary(evidence: &[Evidence], locale: SummaryLocale) -> String {
    let Some(average) = average_confidence(evidence) else {
        return locale.no_evidence().to_string();
    };

    let mut groups: Vec<(EvidenceSource, usize)> = Vec::new();
    for e in evidence {
        match groups.iter_mut().find(|(source, _)| *source == e.source) {
            Some((_, count)) => *count += 1,
            None => groups.push((e.source, 1)),
        }
    }

    let parts: Vec<String> = groups
        .iter()
        .map(|(source, count)| locale.render_group(*count, *source))
        .collect();

    format!("{} ({})", parts.join(", "), locale.render_average(average))
}
