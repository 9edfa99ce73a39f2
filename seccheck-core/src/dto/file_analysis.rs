//! File analysis DTOs

use serde::{Deserialize, Serialize};

use crate::domain::file::FileAnalysis;
use crate::domain::job::JobHandle;

/// Response to a multipart upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploaded {
    pub analysis_id: JobHandle,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileAnalysisEnvelope {
    pub analysis: FileAnalysis,
}
