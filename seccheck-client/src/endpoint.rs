//! Named API capabilities
//!
//! Every backend operation the client knows about, with its HTTP method,
//! path (relative to `/api`) and query string.

use reqwest::Method;
use seccheck_core::domain::job::JobHandle;
use seccheck_core::dto::dashboard::HistoryQuery;

/// Default page size for history listings
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default number of entries in the recent-scans widget
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// A named backend capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    StartWebScan,
    WebScan(JobHandle),
    WebScanStatus(JobHandle),
    WebScanForms(JobHandle),
    WebScanHistory { page: u32, limit: u32 },
    DeleteWebScan(JobHandle),

    CheckLink,
    LinkCheck(u64),
    LinkCheckHistory { page: u32, limit: u32 },

    UploadFile,
    FileAnalysis(JobHandle),
    FileAnalysisStatus(JobHandle),

    LookupDomain,
    DomainIntel(u64),
    DnsRecords(u64),

    CurrentSubscription,
    SubscriptionPlans,
    UpgradeSubscription,
    CancelSubscription,

    UserStats,
    RecentScans { limit: u32 },
    History(HistoryQuery),
}

impl Endpoint {
    /// HTTP method used unless the caller overrides it
    pub fn method(&self) -> Method {
        match self {
            Self::StartWebScan
            | Self::CheckLink
            | Self::UploadFile
            | Self::LookupDomain
            | Self::UpgradeSubscription
            | Self::CancelSubscription => Method::POST,
            Self::DeleteWebScan(_) => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Path below the `/api` prefix
    pub fn path(&self) -> String {
        match self {
            Self::StartWebScan => "/web-scans/start".to_string(),
            Self::WebScan(id) | Self::DeleteWebScan(id) => format!("/web-scans/{}", id),
            Self::WebScanStatus(id) => format!("/web-scans/{}/status", id),
            Self::WebScanForms(id) => format!("/web-scans/{}/forms", id),
            Self::WebScanHistory { .. } => "/web-scans/history".to_string(),

            Self::CheckLink => "/link-checks/check".to_string(),
            Self::LinkCheck(id) => format!("/link-checks/{}", id),
            Self::LinkCheckHistory { .. } => "/link-checks/history".to_string(),

            Self::UploadFile => "/file-analysis/upload".to_string(),
            Self::FileAnalysis(id) => format!("/file-analysis/{}", id),
            Self::FileAnalysisStatus(id) => format!("/file-analysis/{}/status", id),

            Self::LookupDomain => "/domain-intel/lookup".to_string(),
            Self::DomainIntel(id) => format!("/domain-intel/{}", id),
            Self::DnsRecords(id) => format!("/domain-intel/{}/dns-records", id),

            Self::CurrentSubscription => "/subscription/current".to_string(),
            Self::SubscriptionPlans => "/subscription/plans".to_string(),
            Self::UpgradeSubscription => "/subscription/upgrade".to_string(),
            Self::CancelSubscription => "/subscription/cancel".to_string(),

            Self::UserStats => "/dashboard/stats".to_string(),
            Self::RecentScans { .. } => "/dashboard/recent".to_string(),
            Self::History(_) => "/dashboard/history".to_string(),
        }
    }

    /// Query-string pairs, empty for most endpoints
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::WebScanHistory { page, limit } | Self::LinkCheckHistory { page, limit } => {
                vec![("page", page.to_string()), ("limit", limit.to_string())]
            }
            Self::RecentScans { limit } => vec![("limit", limit.to_string())],
            Self::History(query) => query.pairs(),
            _ => Vec::new(),
        }
    }
}
