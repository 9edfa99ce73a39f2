//! Client configuration
//!
//! Defines the connection settings for the SecurityCheck API and the cadence
//! used when polling long-running jobs.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default delay between two status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Default upper bound on status checks per poll
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default API location
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Polling cadence for one poll operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between consecutive status checks
    pub interval: Duration,

    /// Maximum number of status checks, including the first
    pub max_attempts: u32,
}

impl PollConfig {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Builds a configuration from raw numbers, rejecting non-positive values
    pub fn from_millis(interval_ms: i64, max_attempts: i64) -> Result<Self> {
        if interval_ms <= 0 {
            return Err(ClientError::config(format!(
                "poll interval must be positive, got {}ms",
                interval_ms
            )));
        }
        let max_attempts = u32::try_from(max_attempts)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ClientError::config(format!(
                    "max_attempts must be between 1 and {}, got {}",
                    u32::MAX,
                    max_attempts
                ))
            })?;

        Ok(Self::new(
            Duration::from_millis(interval_ms as u64),
            max_attempts,
        ))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ClientError::config("poll interval must be greater than 0"));
        }

        if self.max_attempts == 0 {
            return Err(ClientError::config("max_attempts must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without the `/api` suffix (e.g., "https://securitycheck.example")
    pub base_url: String,

    /// Transport-level timeout for a single request
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Cadence for waiting on long-running jobs
    pub poll: PollConfig,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: concat!("seccheck-client/", env!("CARGO_PKG_VERSION")).to_string(),
            poll: PollConfig::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables:
    /// - SECCHECK_API_URL (optional, default: http://localhost:5000)
    /// - SECCHECK_REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - SECCHECK_POLL_INTERVAL_MS (optional, milliseconds, default: 2000)
    /// - SECCHECK_POLL_MAX_ATTEMPTS (optional, default: 60)
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("SECCHECK_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = lookup("SECCHECK_REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let interval = lookup("SECCHECK_POLL_INTERVAL_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        let max_attempts = lookup("SECCHECK_POLL_MAX_ATTEMPTS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let config = Self {
            request_timeout,
            poll: PollConfig::new(interval, max_attempts),
            ..Self::new(base_url)
        };
        config.validate()?;

        Ok(config)
    }

    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ClientError::config("request_timeout must be greater than 0"));
        }

        self.poll.validate()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.poll.interval, Duration::from_millis(2000));
        assert_eq!(config.poll.max_attempts, 60);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("seccheck-client/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://scanner.example".to_string();
        assert!(config.validate().is_ok());

        config.poll.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_poll_config_from_millis() {
        let config = PollConfig::from_millis(10, 3).unwrap();
        assert_eq!(config.interval, Duration::from_millis(10));
        assert_eq!(config.max_attempts, 3);

        assert!(PollConfig::from_millis(0, 3).is_err());
        assert!(PollConfig::from_millis(-5, 3).is_err());
        assert!(PollConfig::from_millis(10, 0).is_err());
        assert!(PollConfig::from_millis(10, -1).is_err());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("SECCHECK_API_URL", "https://scanner.example"),
            ("SECCHECK_POLL_INTERVAL_MS", "500"),
            ("SECCHECK_POLL_MAX_ATTEMPTS", "garbage"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url, "https://scanner.example");
        assert_eq!(config.poll.interval, Duration::from_millis(500));
        assert_eq!(config.poll.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_from_lookup_rejects_zero_attempts() {
        let result = ClientConfig::from_lookup(|key| {
            (key == "SECCHECK_POLL_MAX_ATTEMPTS").then(|| "0".to_string())
        });
        assert!(result.is_err());
    }
}
