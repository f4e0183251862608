//! reqwest-backed HTTP transport
//!
//! [`HttpTransport`] binds a `reqwest::Client` to the configured base URL.
//! Request paths are appended to the base URL verbatim; JSON bodies are sent
//! with `Content-Type: application/json` and multipart bodies as
//! `multipart/form-data` with one part per file, in order.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::{Form, Part};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, MultipartPart, RequestBody, Transport};

/// HTTP transport over a shared `reqwest::Client`.
///
/// # Examples
///
/// ```no_run
/// use docproc_client::config::ClientConfig;
/// use docproc_client::transport::http::HttpTransport;
///
/// let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
/// assert_eq!(transport.base_url(), "http://localhost:8000/api/v1");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Underlying reqwest HTTP client; clones share the connection pool.
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl HttpTransport {
    /// Construct a transport from `config`.
    ///
    /// The client is configured with:
    /// - User-Agent from `config.user_agent`
    /// - Accept: `application/json`
    /// - every entry of `config.headers`
    /// - `config.timeout_seconds` as the per-request timeout, when set
    ///
    /// No network I/O is performed at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the configuration is invalid or a
    /// header cannot be encoded, and [`ApiError::Transport`] if the reqwest
    /// client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                ApiError::Config(format!("Invalid user_agent {}: {}", config.user_agent, e))
            })?,
        );

        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Config(format!("Invalid header name {name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Config(format!("Invalid value for header {name}: {e}")))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Build a multipart form, one part per file, preserving order.
///
/// # Errors
///
/// Returns [`ApiError::Config`] if a file carries an unparseable MIME type.
fn build_form(parts: Vec<MultipartPart>) -> Result<Form> {
    let mut form = Form::new();
    for MultipartPart { name, file } in parts {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name.clone());
        if let Some(mime) = file.mime_type.as_deref() {
            part = part.mime_str(mime).map_err(|e| {
                ApiError::Config(format!(
                    "Invalid MIME type {} for {}: {}",
                    mime, file.file_name, e
                ))
            })?;
        }
        form = form.part(name, part);
    }
    Ok(form)
}

/// Content type and body of a multipart entity with no parts.
///
/// reqwest emits zero bytes for a `Form` without parts; the entity still
/// needs its close-delimiter to be valid multipart.
fn empty_multipart(boundary: &str) -> (String, String) {
    (
        format!("multipart/form-data; boundary={boundary}"),
        format!("--{boundary}--\r\n"),
    )
}

/// Attach a multipart body to `req`.
fn with_multipart(
    req: reqwest::RequestBuilder,
    parts: Vec<MultipartPart>,
) -> Result<reqwest::RequestBuilder> {
    if parts.is_empty() {
        let form = Form::new();
        let (content_type, body) = empty_multipart(form.boundary());
        return Ok(req.header(CONTENT_TYPE, content_type).body(body));
    }
    Ok(req.multipart(build_form(parts)?))
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        tracing::debug!("Sending {} {}", request.method, url);

        let mut req = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(parts) => with_multipart(req, parts)?,
        };

        let response = req.send().await.map_err(|e| {
            tracing::debug!("{} {} failed: {}", request.method, url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!("{} {} returned {}", request.method, url, status);

        Ok(ApiResponse { status, body })
    }
}
