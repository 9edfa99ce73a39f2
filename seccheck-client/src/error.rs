//! Error types for the SecurityCheck client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the SecurityCheck client
///
/// `JobFailed` and `PollTimeout` describe the job, every other variant
/// describes why the client could not learn anything about it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS or timeout failure below the application layer
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// API rejected the request
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The backend job itself failed
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// The job was still pending after the last permitted status check
    #[error("Job still pending after {attempts} status checks")]
    PollTimeout {
        /// Number of status checks issued
        attempts: u32,
    },

    /// Invalid client or poll configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A local file could not be read for upload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Background poll task died
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if the request never got an application-level answer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a terminal state of the job rather than a
    /// failure to observe it
    pub fn is_job_outcome(&self) -> bool {
        matches!(self, Self::JobFailed(_) | Self::PollTimeout { .. })
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if the backend refused because a usage limit was reached
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api { status: 429, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let not_found = ClientError::api_error(404, "missing");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let limited = ClientError::api_error(429, "limit reached");
        assert!(limited.is_rate_limited());

        let server = ClientError::api_error(503, "down");
        assert!(server.is_server_error());
        assert!(!server.is_job_outcome());
    }

    #[test]
    fn test_job_outcomes_are_distinguishable() {
        assert!(ClientError::JobFailed("scan engine crashed".into()).is_job_outcome());
        assert!(ClientError::PollTimeout { attempts: 3 }.is_job_outcome());
        assert!(!ClientError::Decode("bad".into()).is_job_outcome());
        assert!(!ClientError::config("nope").is_transport());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ClientError::api_error(400, "URL required").to_string(),
            "API error (status 400): URL required"
        );
        assert_eq!(
            ClientError::PollTimeout { attempts: 2 }.to_string(),
            "Job still pending after 2 status checks"
        );
    }
}
