//! Client configuration.

use std::time::Duration;

/// Default ResilientDB endpoint (public test cluster).
pub const DEFAULT_BASE_URL: &str = "http://54.204.140.141:18000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// ResilientDB client configuration.
///
/// Held once at facade construction; the client owns no other state.
#[derive(Debug, Clone)]
pub struct ResilientDbConfig {
    /// Base URL of the transaction service.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Additional headers to include on every request.
    pub headers: Vec<(String, String)>,
}

impl Default for ResilientDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }
}

impl ResilientDbConfig {
    /// Create config from environment variables.
    ///
    /// - `RESILIENTDB_ENDPOINT`: Optional base URL (default: public test cluster)
    /// - `RESILIENTDB_TIMEOUT_MS`: Optional timeout in milliseconds (default: 5000)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("RESILIENTDB_ENDPOINT").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("RESILIENTDB_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            base_url,
            timeout,
            headers: Vec::new(),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}
