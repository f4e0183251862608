//! # API Client Core
//!
//! This module contains the [`ApiClient`] structure and the request/decode
//! path shared by every API operation. The operations themselves live in the
//! sibling modules, grouped by domain.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::transport::http::HttpTransport;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Typed client for the document-processing API
///
/// The client holds no per-call state: each operation issues exactly one
/// request and returns the decoded body or the failure as-is. Clones share
/// the same transport, so a client can be handed to several tasks and used
/// concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use docproc_client::api::ApiClient;
/// use docproc_client::config::ClientConfig;
/// use docproc_client::types::NewProject;
///
/// # async fn run() -> docproc_client::Result<()> {
/// let client = ApiClient::new(&ClientConfig::default())?;
/// let project = client
///     .create_project(&NewProject::new("Invoices").with_description("2024 supplier invoices"))
///     .await?;
/// println!("created project {}", project.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client that talks HTTP to `config.base_url`.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, optional timeout, user agent and extra headers
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the configuration is invalid or a
    /// header cannot be encoded, and [`ApiError::Transport`] if the HTTP
    /// client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        tracing::debug!("API client bound to {}", transport.base_url());
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport (mocks, proxies, custom
    /// middleware).
    ///
    /// # Arguments
    ///
    /// * `transport` - Transport every operation is executed on
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Execute `request` and decode a 2xx body as `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.transport.execute(request).await?;
        decode(response)
    }
}

/// Serialize a request body to JSON.
pub(crate) fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(ApiError::Encode)
}

/// Turn a raw response into `T`, or into the matching error.
fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T> {
    if !response.is_success() {
        let body = response.text();
        tracing::warn!("API returned HTTP {}: {}", response.status, body);
        return Err(ApiError::Status {
            status: response.status,
            body,
        });
    }

    serde_json::from_slice(&response.body).map_err(|source| ApiError::Decode {
        status: response.status,
        body: response.text(),
        source,
    })
}

/// Path of a project-scoped resource, e.g. `/projects/7/files`.
pub(crate) fn project_path(project_id: i64, suffix: &str) -> String {
    format!("/projects/{project_id}{suffix}")
}

/// Path of a chat-session-scoped resource.
pub(crate) fn session_path(project_id: i64, session_id: i64, suffix: &str) -> String {
    format!("/projects/{project_id}/chat-sessions/{session_id}{suffix}")
}
