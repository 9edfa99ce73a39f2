//! Dashboard API endpoints

use seccheck_core::dto::dashboard::{HistoryPage, HistoryQuery, RecentScans, StatsEnvelope};
use serde_json::{Map, Value};

use crate::SecurityCheckClient;
use crate::endpoint::{DEFAULT_RECENT_LIMIT, Endpoint};
use crate::error::Result;

impl SecurityCheckClient {
    /// Get usage statistics for the current user
    pub async fn user_stats(&self) -> Result<Map<String, Value>> {
        let envelope: StatsEnvelope = self.call(Endpoint::UserStats).await?;
        Ok(envelope.stats)
    }

    /// Get the most recent scans of any type
    ///
    /// # Arguments
    /// * `limit` - Number of entries; `None` uses the default of 10
    pub async fn recent_scans(&self, limit: Option<u32>) -> Result<Vec<Value>> {
        let recent: RecentScans = self
            .call(Endpoint::RecentScans {
                limit: limit.unwrap_or(DEFAULT_RECENT_LIMIT),
            })
            .await?;
        Ok(recent.scans)
    }

    /// Get one page of the combined history
    pub async fn history(&self, query: HistoryQuery) -> Result<HistoryPage> {
        self.call(Endpoint::History(query)).await
    }
}
