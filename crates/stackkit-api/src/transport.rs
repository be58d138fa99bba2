// Shared transport configuration for building reqwest::Client instances.
//
// The Stack Exchange API is public and unauthenticated; an optional
// application key only raises the request quota. Both the library and the
// CLI build their HTTP clients through this module.

use std::time::Duration;

use crate::error::Error;

/// Default public API root.
pub const DEFAULT_API_URL: &str = "https://api.stackexchange.com/2.3/";

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional application key, sent as the `key` query parameter on
    /// every request to raise the anonymous quota.
    pub api_key: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// Gzip is negotiated automatically (the API compresses every
    /// response).
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("stackkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Transport)
    }

    /// Set the application key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
