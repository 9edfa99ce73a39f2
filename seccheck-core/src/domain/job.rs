//! Job domain types
//!
//! A job is a long-running backend operation (web scan, file analysis) that
//! is started with one request and observed through a status endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a started job
///
/// Issued by the backend when a job starts and never modified afterwards.
/// Serialized as the bare backend id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobHandle(u64);

impl JobHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The backend id this handle wraps
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl From<u64> for JobHandle {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job state as reported on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Running,
    Completed,
    Failed,
}

impl JobState {
    /// `Completed` and `Failed` never transition further
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Result of one status check
///
/// `Running` on the wire collapses into `Pending` here: both mean "ask again".
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus<T = serde_json::Value> {
    Pending,
    Completed(T),
    Failed(String),
}

impl<T> JobStatus<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Transform the completion payload, leaving the other variants as-is
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> JobStatus<U> {
        match self {
            Self::Pending => JobStatus::Pending,
            Self::Completed(result) => JobStatus::Completed(f(result)),
            Self::Failed(reason) => JobStatus::Failed(reason),
        }
    }
}
