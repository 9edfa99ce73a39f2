//! Web scan API endpoints

use std::sync::Arc;

use seccheck_core::domain::job::JobHandle;
use seccheck_core::domain::scan::{ScanFinding, WebScan};
use seccheck_core::dto::common::MessageResponse;
use seccheck_core::dto::status::StatusReport;
use seccheck_core::dto::web_scan::{
    ScanForms, ScanStarted, StartWebScan, WebScanEnvelope, WebScanHistory,
};
use serde_json::Value;
use tracing::info;

use crate::SecurityCheckClient;
use crate::config::PollConfig;
use crate::endpoint::{DEFAULT_PAGE_SIZE, Endpoint};
use crate::error::Result;
use crate::poller::{PollHandle, StatusPoller, WebScanStatusSource};

impl SecurityCheckClient {
    // =============================================================================
    // Scan Lifecycle
    // =============================================================================

    /// Start scanning a website
    ///
    /// # Arguments
    /// * `url` - The site to scan; the backend adds `https://` when the scheme is missing
    ///
    /// # Returns
    /// The handle of the started scan
    ///
    /// # Example
    /// ```no_run
    /// # use seccheck_client::SecurityCheckClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = SecurityCheckClient::new("http://localhost:5000");
    /// let started = client.start_web_scan("example.com").await?;
    /// println!("scan {} started", started.scan_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn start_web_scan(&self, url: &str) -> Result<ScanStarted> {
        self.send(
            Endpoint::StartWebScan,
            &StartWebScan {
                url: url.to_string(),
            },
        )
        .await
    }

    /// Get a scan with its findings
    pub async fn get_web_scan(&self, scan: JobHandle) -> Result<WebScan> {
        let envelope: WebScanEnvelope = self.call(Endpoint::WebScan(scan)).await?;
        Ok(envelope.scan)
    }

    /// Get the current status of a scan
    pub async fn web_scan_status(&self, scan: JobHandle) -> Result<StatusReport> {
        self.call(Endpoint::WebScanStatus(scan)).await
    }

    /// Get the upload forms a scan discovered
    pub async fn get_scan_forms(&self, scan: JobHandle) -> Result<Vec<ScanFinding>> {
        let forms: ScanForms = self.call(Endpoint::WebScanForms(scan)).await?;
        Ok(forms.forms)
    }

    /// List past scans, newest first
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `limit` - Page size; `None` uses the default of 20
    pub async fn web_scan_history(&self, page: u32, limit: Option<u32>) -> Result<WebScanHistory> {
        self.call(Endpoint::WebScanHistory {
            page,
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE),
        })
        .await
    }

    /// Delete a scan and its findings
    pub async fn delete_web_scan(&self, scan: JobHandle) -> Result<()> {
        let _: MessageResponse = self.call(Endpoint::DeleteWebScan(scan)).await?;
        Ok(())
    }

    // =============================================================================
    // Waiting
    // =============================================================================

    /// Poll a scan's status until it completes
    ///
    /// # Returns
    /// The `result` payload of the final status report (`null` when the
    /// backend sends none)
    pub async fn wait_for_web_scan(&self, scan: JobHandle, config: PollConfig) -> Result<Value> {
        StatusPoller::new(config)?
            .poll(scan, |scan| self.web_scan_status(scan))
            .await
    }

    /// Start a scan, wait for it, and fetch the finished record
    pub async fn scan_and_wait(&self, url: &str, config: PollConfig) -> Result<WebScan> {
        let poller = StatusPoller::new(config)?;

        let started = self.start_web_scan(url).await?;
        info!(scan = %started.scan_id, url, "Web scan started");

        poller
            .poll(started.scan_id, |scan| self.web_scan_status(scan))
            .await?;

        self.get_web_scan(started.scan_id).await
    }

    /// Poll a scan on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_web_scan_watch(
        &self,
        scan: JobHandle,
        config: PollConfig,
    ) -> Result<PollHandle<Value>> {
        let source = Arc::new(WebScanStatusSource::new(self.clone()));
        Ok(StatusPoller::new(config)?.spawn_source(scan, source))
    }
}
