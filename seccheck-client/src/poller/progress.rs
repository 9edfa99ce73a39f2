//! What a status check reports, and what observers of a poll see

use seccheck_core::domain::job::JobStatus;
use seccheck_core::dto::status::StatusReport;
use serde_json::Value;

/// One status check, as seen by the poller
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<T> {
    pub status: JobStatus<T>,
    /// Completion percentage, when the backend reports one
    pub progress: Option<u32>,
}

/// Anything a status check may return
pub trait Observable {
    type Payload;

    fn into_observation(self) -> Observation<Self::Payload>;
}

impl<T> Observable for JobStatus<T> {
    type Payload = T;

    fn into_observation(self) -> Observation<T> {
        Observation {
            status: self,
            progress: None,
        }
    }
}

impl<T> Observable for Observation<T> {
    type Payload = T;

    fn into_observation(self) -> Observation<T> {
        self
    }
}

impl Observable for StatusReport {
    type Payload = Value;

    fn into_observation(self) -> Observation<Value> {
        Observation {
            status: self.to_status(),
            progress: self.progress,
        }
    }
}

/// Snapshot published after every status check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollProgress {
    /// Checks issued so far
    pub attempts: u32,
    /// Last percentage the backend reported
    pub progress: Option<u32>,
    /// Set once the poll has settled or been cancelled
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use seccheck_core::domain::job::JobState;

    #[test]
    fn test_report_keeps_progress() {
        let report = StatusReport {
            status: JobState::Running,
            progress: Some(55),
            result: None,
            error: None,
        };
        let observation = report.into_observation();
        assert_eq!(observation.status, JobStatus::Pending);
        assert_eq!(observation.progress, Some(55));
    }

    #[test]
    fn test_bare_status_has_no_progress() {
        let observation = JobStatus::Completed(3).into_observation();
        assert_eq!(observation.status, JobStatus::Completed(3));
        assert!(observation.progress.is_none());
    }
}
