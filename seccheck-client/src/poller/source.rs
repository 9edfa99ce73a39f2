//! Status sources backed by the API

use async_trait::async_trait;
use seccheck_core::domain::job::JobHandle;
use seccheck_core::dto::status::StatusReport;

use crate::SecurityCheckClient;
use crate::error::Result;

/// Something that can report the status of a job
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the current status of `job`
    async fn check_status(&self, job: JobHandle) -> Result<StatusReport>;
}

/// Web scan status endpoint
#[derive(Debug, Clone)]
pub struct WebScanStatusSource {
    client: SecurityCheckClient,
}

impl WebScanStatusSource {
    pub fn new(client: SecurityCheckClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusSource for WebScanStatusSource {
    async fn check_status(&self, job: JobHandle) -> Result<StatusReport> {
        self.client.web_scan_status(job).await
    }
}

/// File analysis status endpoint
#[derive(Debug, Clone)]
pub struct FileAnalysisStatusSource {
    client: SecurityCheckClient,
}

impl FileAnalysisStatusSource {
    pub fn new(client: SecurityCheckClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusSource for FileAnalysisStatusSource {
    async fn check_status(&self, job: JobHandle) -> Result<StatusReport> {
        self.client.file_analysis_status(job).await
    }
}
