//! Codec configuration types

use crate::{CodecError, CodecResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an HTTP JSON-RPC codec
///
/// The transport settings are handed to the HTTP client builder as-is; the
/// codec itself does not interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// URL every request is POSTed to
    pub endpoint: String,

    /// Whole-request timeout in milliseconds (None = no timeout)
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,

    /// Connect timeout in milliseconds (None = client default)
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,

    /// How long idle pooled connections are kept, in milliseconds
    #[serde(default)]
    pub pool_idle_timeout_ms: Option<u64>,

    /// User-Agent header value
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CodecConfig {
    /// Create a configuration for the given endpoint with default settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout_ms: None,
            connect_timeout_ms: None,
            pool_idle_timeout_ms: None,
            user_agent: None,
            log_level: default_log_level(),
        }
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> CodecResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Create configuration from a TOML document
    pub fn from_toml(text: &str) -> CodecResult<Self> {
        toml::from_str(text).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Set the whole-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = Some(duration_to_ms(timeout));
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(duration_to_ms(timeout));
        self
    }

    /// Set the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub fn pool_idle_timeout(&self) -> Option<Duration> {
        self.pool_idle_timeout_ms.map(Duration::from_millis)
    }

    /// Parse the configured log level
    pub fn log_level(&self) -> CodecResult<LogLevel> {
        self.log_level.parse()
    }

    /// Check that the endpoint is an absolute http(s) URL and the log level is known
    pub fn validate(&self) -> CodecResult<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(CodecError::Config("endpoint is empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(CodecError::Config(format!(
                "endpoint '{}' must use the http or https scheme",
                endpoint
            )));
        }
        self.log_level()?;
        Ok(())
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
