//! Configuration management for docproc-client
//!
//! This module handles loading, parsing and validating the client
//! configuration. A [`ClientConfig`] is built once by the caller and handed
//! to [`crate::api::ApiClient::new`]; the library reads no environment
//! variables and keeps no process-wide state.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Version of the crate, used in the default User-Agent header
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client configuration
///
/// # Examples
///
/// ```
/// use docproc_client::config::ClientConfig;
///
/// let config = ClientConfig {
///     base_url: "https://docs.example.com/api/v1".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional per-request timeout (seconds); no timeout when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Value of the User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra headers attached to every request (e.g. Authorization)
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("docproc-client/{VERSION}")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Configuration with defaults for everything but the base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read and
    /// [`ApiError::Yaml`] if it is not valid YAML for this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded client config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the base URL is empty, not a valid
    /// URL, or not `http`/`https`, when the timeout is zero, or when a
    /// header name or value is empty.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url cannot be empty".to_string()));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base_url {}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "base_url must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.timeout_seconds == Some(0) {
            return Err(ApiError::Config(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        for (name, value) in &self.headers {
            if name.trim().is_empty() {
                return Err(ApiError::Config("header name cannot be empty".to_string()));
            }
            if value.is_empty() {
                return Err(ApiError::Config(format!("header {name} has an empty value")));
            }
        }

        Ok(())
    }
}
