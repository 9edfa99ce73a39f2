//! Job status reports

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::job::{JobState, JobStatus};

/// Reason used when the backend marks a job failed without saying why
pub const DEFAULT_FAILURE_REASON: &str = "job failed";

/// Body of a `.../status` endpoint
///
/// `{ "status": "pending" | "running" | "completed" | "failed", "progress"?,
/// "result"?, "error"? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: JobState,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusReport {
    /// Collapse the report into the tri-state the poller consumes
    pub fn to_status(&self) -> JobStatus<Value> {
        match self.status {
            JobState::Pending | JobState::Running => JobStatus::Pending,
            JobState::Completed => JobStatus::Completed(self.result.clone().unwrap_or(Value::Null)),
            JobState::Failed => JobStatus::Failed(
                self.error
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(body: Value) -> StatusReport {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_running_is_pending() {
        let r = report(json!({"success": true, "status": "running", "progress": 40}));
        assert_eq!(r.progress, Some(40));
        assert_eq!(r.to_status(), JobStatus::Pending);
    }

    #[test]
    fn test_completed_carries_result() {
        let r = report(json!({"status": "completed", "result": {"score": 92}}));
        assert_eq!(r.to_status(), JobStatus::Completed(json!({"score": 92})));

        let bare = report(json!({"status": "completed", "progress": 100}));
        assert_eq!(bare.to_status(), JobStatus::Completed(Value::Null));
    }

    #[test]
    fn test_failed_reason_defaults() {
        let r = report(json!({"status": "failed", "error": "scan engine crashed"}));
        assert_eq!(r.to_status(), JobStatus::Failed("scan engine crashed".to_string()));

        let bare = report(json!({"status": "failed"}));
        assert_eq!(bare.to_status(), JobStatus::Failed(DEFAULT_FAILURE_REASON.to_string()));
    }
}
