//! Dashboard DTOs

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct StatsEnvelope {
    pub stats: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentScans {
    pub scans: Vec<Value>,
}

/// Filters for the combined history listing
///
/// Unset fields are left out of the query string and the backend applies
/// its own defaults (all types, last 7 days, any status).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub kind: Option<String>,
    pub period: Option<String>,
    pub status: Option<String>,
}

impl HistoryQuery {
    /// Query-string pairs for the fields that are set
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }
        if let Some(period) = &self.period {
            pairs.push(("period", period.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

/// One page of the combined history
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPage {
    pub items: Vec<Value>,
    #[serde(default)]
    pub statistics: Option<Value>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_query_skips_unset_fields() {
        assert!(HistoryQuery::default().pairs().is_empty());

        let query = HistoryQuery {
            page: Some(2),
            kind: Some("web_scan".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![("page", "2".to_string()), ("type", "web_scan".to_string())]
        );
    }
}
