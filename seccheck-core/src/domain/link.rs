//! Link check domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of checking a single URL against reputation sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheck {
    pub id: u64,
    pub original_url: String,
    #[serde(default)]
    pub final_url: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    pub threat_level: String,
    #[serde(default)]
    pub confidence_score: Option<u32>,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
