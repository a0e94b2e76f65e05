//! Client configuration
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, and `PLUGINDESK_*` environment variables. Binaries apply their
//! own flags on top.
//!
//! ```toml
//! base_url = "https://platform.example.com/api"
//! token = "..."
//! timeout_secs = 30
//! ```

use plugindesk_core::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Base URL of the backend API
pub const ENV_API_URL: &str = "PLUGINDESK_API_URL";

/// Authentication token sent with every request
pub const ENV_TOKEN: &str = "PLUGINDESK_TOKEN";

/// Request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "PLUGINDESK_TIMEOUT_SECS";

/// Default backend location for a local development server
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,

    /// Optional token for authenticated requests.
    ///
    /// When set, requests carry an `Authorization: Bearer <token>` header.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Configuration with defaults and the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    ///
    /// Keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> DeskResult<Self> {
        if !path.exists() {
            return Err(DeskError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| DeskError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content)
            .map_err(|e| DeskError::invalid_config(format!("{}: {}", path.display(), e)))
    }

    /// Defaults overridden by `PLUGINDESK_*` environment variables
    pub fn from_env() -> DeskResult<Self> {
        Self::default().with_env()
    }

    /// Override this configuration with `PLUGINDESK_*` environment variables
    pub fn with_env(self) -> DeskResult<Self> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Override this configuration from an arbitrary variable source
    pub fn with_lookup<F>(mut self, lookup: F) -> DeskResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }

        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.token = Some(token);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse::<u64>().map_err(|_| {
                DeskError::invalid_config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
        }

        Ok(self)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the configuration can be used to build a client
    pub fn validate(&self) -> DeskResult<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            DeskError::invalid_config(format!("base URL '{}' is invalid: {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeskError::invalid_config(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(DeskError::invalid_config("timeout must be at least 1 second"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
