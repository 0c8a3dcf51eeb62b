//! Process status lifecycle.
//!
//! in_progress ⇄ on_hold; in_progress | on_hold → completed | terminated.
//! completed and terminated accept no further transitions.

use super::types::{CandidateInterviewProcess, FinalDecision, ProcessStatus};
use crate::errors::{AssessError, AssessResult};

impl CandidateInterviewProcess {
    fn transition(&mut self, to: ProcessStatus) -> AssessResult<()> {
        let allowed = match (self.status, to) {
            (ProcessStatus::InProgress, ProcessStatus::OnHold) => true,
            (ProcessStatus::OnHold, ProcessStatus::InProgress) => true,
            (ProcessStatus::InProgress | ProcessStatus::OnHold, ProcessStatus::Completed | ProcessStatus::Terminated) => {
                true
            }
            _ => false,
        };
        if !allowed {
            return Err(AssessError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        tracing::debug!(
            candidate_id = %self.candidate_id,
            job_id = %self.job_id,
            from = self.status.as_str(),
            to = to.as_str(),
            "process status changed"
        );
        self.status = to;
        Ok(())
    }

    pub fn hold(&mut self) -> AssessResult<()> {
        self.transition(ProcessStatus::OnHold)
    }

    pub fn resume(&mut self) -> AssessResult<()> {
        self.transition(ProcessStatus::InProgress)
    }

    /// Stop the process early, e.g. a rejection after a failed round.
    pub fn terminate(&mut self, decision: FinalDecision) -> AssessResult<()> {
        self.transition(ProcessStatus::Terminated)?;
        self.decision = Some(decision);
        Ok(())
    }

    /// Close the process after its last stage.
    pub fn finish(&mut self, decision: FinalDecision) -> AssessResult<()> {
        self.transition(ProcessStatus::Completed)?;
        self.decision = Some(decision);
        Ok(())
    }
}
