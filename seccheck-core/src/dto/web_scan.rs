//! Web scan DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobHandle;
use crate::domain::scan::{ScanFinding, WebScan};
use crate::dto::common::Pagination;

/// Request to start scanning a site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartWebScan {
    pub url: String,
}

/// Response to a started scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStarted {
    pub scan_id: JobHandle,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebScanEnvelope {
    pub scan: WebScan,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebScanHistory {
    pub scans: Vec<WebScan>,
    pub pagination: Pagination,
}

/// Upload forms discovered on the scanned site
#[derive(Debug, Clone, Deserialize)]
pub struct ScanForms {
    pub forms: Vec<ScanFinding>,
}
