//! File analysis domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::job::{JobHandle, JobState};

/// Analysis record for an uploaded file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub id: JobHandle,
    #[serde(default)]
    pub filename: Option<String>,
    pub status: JobState,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
