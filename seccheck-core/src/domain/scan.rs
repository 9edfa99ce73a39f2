//! Web scan domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::job::{JobHandle, JobState};

/// Web scan record
///
/// `results` is only populated when the scan is fetched individually; history
/// listings leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebScan {
    pub id: JobHandle,
    pub target_url: String,
    pub target_domain: String,
    pub status: JobState,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub security_score: Option<u32>,
    #[serde(default)]
    pub total_issues: u32,
    #[serde(default)]
    pub critical_issues: u32,
    #[serde(default)]
    pub high_issues: u32,
    #[serde(default)]
    pub medium_issues: u32,
    #[serde(default)]
    pub low_issues: u32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub results: Vec<ScanFinding>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One issue found by a web scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFinding {
    pub id: u64,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub severity: Severity,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Finding severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}
