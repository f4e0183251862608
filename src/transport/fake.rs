//! In-process fake transport for unit tests
//!
//! [`FakeTransport`] replaces network I/O in tests. Every request passed to
//! [`Transport::execute`] is forwarded to the paired
//! [`FakeTransportHandle`] so the test can assert on its exact shape, and
//! the response is taken from a queue filled with
//! [`FakeTransport::inject_response`].
//!
//! ```text
//! client execute() --> outbound_tx --> handle.outbound_rx (test reads)
//! test inject_response() --> queue --> execute() return value
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// In-process fake transport for use in tests.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    /// What the client sends goes here; the handle drains it.
    outbound_tx: mpsc::UnboundedSender<ApiRequest>,
    /// Responses replayed in FIFO order.
    responses: Arc<Mutex<VecDeque<ApiResponse>>>,
}

/// The test-side handle for a [`FakeTransport`].
#[derive(Debug)]
pub struct FakeTransportHandle {
    /// Receives every request the client executed, in order.
    pub outbound_rx: mpsc::UnboundedReceiver<ApiRequest>,
}

impl FakeTransportHandle {
    /// Drain every request recorded so far.
    pub fn drain(&mut self) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = self.outbound_rx.try_recv() {
            requests.push(request);
        }
        requests
    }
}

impl FakeTransport {
    /// Create a new `(FakeTransport, FakeTransportHandle)` pair.
    pub fn new() -> (Self, FakeTransportHandle) {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let transport = Self {
            outbound_tx,
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };
        (transport, FakeTransportHandle { outbound_rx })
    }

    /// Queue a JSON response with the given status.
    pub fn inject_response(&self, status: u16, body: serde_json::Value) {
        let serialized =
            serde_json::to_vec(&body).expect("FakeTransport: failed to serialize response");
        self.inject_raw(status, serialized);
    }

    /// Queue a response with an arbitrary body.
    pub fn inject_raw(&self, status: u16, body: impl Into<bytes::Bytes>) {
        self.responses
            .lock()
            .expect("FakeTransport: response queue poisoned")
            .push_back(ApiResponse::new(status, body));
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    /// Record the request and replay the next queued response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when no response was queued.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let _ = self.outbound_tx.send(request);
        self.responses
            .lock()
            .expect("FakeTransport: response queue poisoned")
            .pop_front()
            .ok_or_else(|| ApiError::Config("FakeTransport: no response queued".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_records_request() {
        let (transport, mut handle) = FakeTransport::new();
        transport.inject_response(200, json!({"ok": true}));

        let response = transport
            .execute(ApiRequest::get("/users/me"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let sent = handle.drain();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/users/me");
    }

    #[tokio::test]
    async fn test_responses_replay_in_order() {
        let (transport, _handle) = FakeTransport::new();
        transport.inject_raw(201, "first");
        transport.inject_raw(500, "second");

        let first = transport.execute(ApiRequest::get("/a")).await.unwrap();
        let second = transport.execute(ApiRequest::get("/b")).await.unwrap();
        assert_eq!((first.status, first.text()), (201, "first".to_string()));
        assert_eq!((second.status, second.text()), (500, "second".to_string()));
    }

    #[tokio::test]
    async fn test_execute_without_response_fails() {
        let (transport, _handle) = FakeTransport::new();
        let result = transport.execute(ApiRequest::get("/projects")).await;
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
