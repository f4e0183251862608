//! Error types for docproc-client
//!
//! This module defines the single error type returned by every client
//! operation, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for client operations
///
/// Failures are surfaced exactly as they happened: the client never
/// retries, and HTTP failures keep the original status code and body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS error, transport timeout)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Raw response body, unmodified
        body: String,
    },

    /// A 2xx response body did not match the expected shape
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        /// Numeric HTTP status code of the response
        status: u16,
        /// Raw response body that failed to decode
        body: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (config files, upload sources)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ApiError {
    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::Decode { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } | ApiError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the server answered with a non-2xx status.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Check if this is a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Check if the response body failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
