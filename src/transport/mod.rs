//! Transport abstraction and implementations
//!
//! This module defines the [`Transport`] trait that sits between
//! [`crate::api::ApiClient`] and the network. Concrete implementations live
//! in submodules:
//!
//! - [`http::HttpTransport`] -- reqwest-backed transport bound to a base URL.
//! - [`fake::FakeTransport`] -- in-process fake used in tests (cfg(test)
//!   only).
//!
//! # Design
//!
//! The trait is intentionally minimal: one [`ApiRequest`] in, one
//! [`ApiResponse`] out. A transport does not interpret status codes or
//! decode bodies; the client does both, so every transport surfaces
//! failures the same way.

use bytes::Bytes;
use reqwest::Method;

use crate::error::Result;
use crate::types::UploadFile;

/// Body of an outbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body (GET requests)
    Empty,
    /// `application/json` body
    Json(serde_json::Value),
    /// `multipart/form-data` body; parts are sent in order
    Multipart(Vec<MultipartPart>),
}

/// A single file part of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    /// Form field name (repeated names are allowed)
    pub name: String,
    /// File carried by this part
    pub file: UploadFile,
}

/// A transport-agnostic HTTP request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path appended to the base URL, starting with `/`
    pub path: String,
    /// Query parameters; only parameters with a value are present
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl ApiRequest {
    /// GET request without query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// POST request with a JSON body.
    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Json(body),
        }
    }

    /// POST request with a multipart body.
    pub fn post_multipart(path: impl Into<String>, parts: Vec<MultipartPart>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Multipart(parts),
        }
    }

    /// Append a query parameter when `value` is present; `None` leaves the
    /// query untouched.
    pub fn with_optional_query(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }
}

/// A raw HTTP response as returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Abstraction over the HTTP layer used by [`crate::api::ApiClient`].
///
/// Implementations must issue exactly one request per call to
/// [`Transport::execute`] and must not retry.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use docproc_client::config::ClientConfig;
/// use docproc_client::transport::{http::HttpTransport, Transport};
///
/// let transport: Arc<dyn Transport> =
///     Arc::new(HttpTransport::new(&ClientConfig::default()).unwrap());
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Send `request` and return the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ApiError::Transport`] if no response could
    /// be obtained.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

pub mod http;

#[cfg(test)]
pub mod fake;
