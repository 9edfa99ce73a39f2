//! SecurityCheck HTTP Client
//!
//! A type-safe client for the SecurityCheck REST API, plus the status poller
//! that turns asynchronous backend jobs (web scans, file analyses) into a
//! single awaited outcome.
//!
//! # Example
//!
//! ```no_run
//! use seccheck_client::{PollConfig, SecurityCheckClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SecurityCheckClient::new("http://localhost:5000");
//!
//!     // Start a scan and wait for the backend to finish it
//!     let scan = client
//!         .scan_and_wait("https://example.com", PollConfig::default())
//!         .await?;
//!
//!     println!("Security score: {:?}", scan.security_score);
//!     Ok(())
//! }
//! ```

pub mod config;
mod dashboard;
mod domain_intel;
pub mod endpoint;
pub mod error;
mod file_analysis;
mod link_checks;
pub mod poller;
mod subscription;
mod web_scans;

// Re-export commonly used types
pub use config::{ClientConfig, PollConfig};
pub use endpoint::Endpoint;
pub use error::{ClientError, Result};
pub use poller::{PollHandle, PollProgress, StatusPoller, StatusSource, poll_status};
pub use seccheck_core::domain::job::{JobHandle, JobState, JobStatus};
pub use seccheck_core::dto::status::StatusReport;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use seccheck_core::dto::common::ErrorBody;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Error message used when a failed JSON request carries no usable reason
pub const REQUEST_FAILED: &str = "request failed";

/// Error message used when a failed upload carries no usable reason
pub const UPLOAD_FAILED: &str = "upload failed";

/// Per-request transport overrides
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Replaces the endpoint's default method
    pub method: Option<Method>,
    /// Sent in addition to the client's default headers
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client for the SecurityCheck API
///
/// Holds no mutable state: clones share the underlying connection pool and
/// any number of requests may run concurrently. Operations are grouped by
/// area:
/// - Web scans (start, status, results, history)
/// - Link checks
/// - File analysis (multipart upload, status, results)
/// - Domain intel
/// - Subscription and dashboard
#[derive(Debug, Clone)]
pub struct SecurityCheckClient {
    /// Base URL of the application (e.g., "http://localhost:5000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SecurityCheckClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the application, without the `/api` suffix
    ///
    /// # Example
    /// ```
    /// use seccheck_client::SecurityCheckClient;
    ///
    /// let client = SecurityCheckClient::new("http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, cookie stores, etc.
    ///
    /// # Example
    /// ```
    /// use seccheck_client::SecurityCheckClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = SecurityCheckClient::with_client("http://localhost:5000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Get the base URL of the application
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint, without its query string
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> String {
        format!("{}/api{}", self.base_url, endpoint.path())
    }

    // =============================================================================
    // Request Gateway
    // =============================================================================

    /// Perform one request/response cycle against a named endpoint
    ///
    /// The payload, when present, is sent as JSON. Failures are classified as
    /// [`ClientError::Transport`], [`ClientError::Api`] or
    /// [`ClientError::Decode`].
    pub async fn request<T, B>(
        &self,
        endpoint: &Endpoint,
        payload: Option<&B>,
        options: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let method = options.method.unwrap_or_else(|| endpoint.method());
        let url = self.endpoint_url(endpoint);
        debug!(%method, %url, "Sending API request");

        let mut builder = self.client.request(method, &url).headers(options.headers);

        let query = endpoint.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        if let Some(payload) = payload {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;

        self.handle_response(response, REQUEST_FAILED).await
    }

    /// Upload a multipart form to a named endpoint
    ///
    /// Same error taxonomy as [`request`](Self::request), with
    /// [`UPLOAD_FAILED`] as the fallback message.
    pub async fn upload<T: DeserializeOwned>(&self, endpoint: &Endpoint, form: Form) -> Result<T> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, "Uploading multipart form");

        let response = self.client.post(&url).multipart(form).send().await?;

        self.handle_response(response, UPLOAD_FAILED).await
    }

    pub(crate) async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.request::<T, ()>(&endpoint, None, RequestOptions::default()).await
    }

    pub(crate) async fn send<T, B>(&self, endpoint: Endpoint, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(&endpoint, Some(payload), RequestOptions::default()).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success responses become [`ClientError::Api`] carrying the body's
    /// `error` field, or `fallback` when the body has none or is not JSON.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
                .and_then(|body| body.error)
                .unwrap_or_else(|| fallback.to_string());
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| ClientError::Decode(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SecurityCheckClient::new("http://localhost:5000");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = SecurityCheckClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_endpoint_url() {
        let client = SecurityCheckClient::new("https://scanner.example/");
        assert_eq!(
            client.endpoint_url(&Endpoint::WebScanStatus(JobHandle::new(9))),
            "https://scanner.example/api/web-scans/9/status"
        );
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = ClientConfig::new("ftp://scanner.example");
        assert!(matches!(
            SecurityCheckClient::from_config(&config),
            Err(ClientError::Config(_))
        ));

        let client = SecurityCheckClient::from_config(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::default()
            .with_method(Method::PUT)
            .with_header(
                HeaderName::from_static("x-csrf-token"),
                HeaderValue::from_static("abc"),
            );
        assert_eq!(options.method, Some(Method::PUT));
        assert_eq!(options.headers.get("x-csrf-token").unwrap(), "abc");
    }
}
