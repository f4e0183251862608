use serde_json::{json, Value};
use wiremock::MockServer;

use docproc_client::{ApiClient, ClientConfig};

/// Client pointed at the mock server, with the API mounted under `/api/v1`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::with_base_url(format!("{}/api/v1", server.uri())))
        .expect("failed to build client for mock server")
}

#[allow(dead_code)]
pub fn project_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "created_at": "2024-05-01T09:30:00.123456"
    })
}

/// Body of the single request the server received.
#[allow(dead_code)]
pub async fn single_request_body(server: &MockServer) -> Vec<u8> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].body.clone()
}
