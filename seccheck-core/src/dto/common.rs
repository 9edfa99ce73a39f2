//! Shapes shared by several endpoints

use serde::{Deserialize, Serialize};

/// Page metadata attached to history listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

/// Acknowledgement carrying an optional human-readable message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body the backend sends with non-success status codes
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
