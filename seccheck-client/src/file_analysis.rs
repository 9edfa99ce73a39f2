//! File analysis API endpoints

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use seccheck_core::domain::file::FileAnalysis;
use seccheck_core::domain::job::JobHandle;
use seccheck_core::dto::file_analysis::{FileAnalysisEnvelope, FileUploaded};
use seccheck_core::dto::status::StatusReport;
use serde_json::Value;

use crate::SecurityCheckClient;
use crate::config::PollConfig;
use crate::endpoint::Endpoint;
use crate::error::{ClientError, Result};
use crate::poller::{FileAnalysisStatusSource, PollHandle, StatusPoller};

impl SecurityCheckClient {
    /// Upload a file for analysis
    ///
    /// The file is sent as the `file` part of a multipart form.
    ///
    /// # Arguments
    /// * `file_name` - Name reported to the backend
    /// * `contents` - Raw file bytes
    pub async fn upload_file(
        &self,
        file_name: impl Into<String>,
        contents: Vec<u8>,
    ) -> Result<FileUploaded> {
        let part = Part::bytes(contents).file_name(file_name.into());
        let form = Form::new().part("file", part);

        self.upload(&Endpoint::UploadFile, form).await
    }

    /// Read a file from disk and upload it under its own name
    pub async fn upload_file_path(&self, path: impl AsRef<Path>) -> Result<FileUploaded> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ClientError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no usable file name", path.display()),
                ))
            })?
            .to_string();

        let contents = tokio::fs::read(path).await?;

        self.upload_file(file_name, contents).await
    }

    /// Get the analysis record of an uploaded file
    pub async fn get_file_analysis(&self, analysis: JobHandle) -> Result<FileAnalysis> {
        let envelope: FileAnalysisEnvelope = self.call(Endpoint::FileAnalysis(analysis)).await?;
        Ok(envelope.analysis)
    }

    /// Get the current status of a file analysis
    pub async fn file_analysis_status(&self, analysis: JobHandle) -> Result<StatusReport> {
        self.call(Endpoint::FileAnalysisStatus(analysis)).await
    }

    /// Poll a file analysis until it completes
    pub async fn wait_for_file_analysis(
        &self,
        analysis: JobHandle,
        config: PollConfig,
    ) -> Result<Value> {
        StatusPoller::new(config)?
            .poll(analysis, |analysis| self.file_analysis_status(analysis))
            .await
    }

    /// Poll a file analysis on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_file_analysis_watch(
        &self,
        analysis: JobHandle,
        config: PollConfig,
    ) -> Result<PollHandle<Value>> {
        let source = Arc::new(FileAnalysisStatusSource::new(self.clone()));
        Ok(StatusPoller::new(config)?.spawn_source(analysis, source))
    }
}
