//! WireMock-based Home Assistant API mocking
//!
//! Simulates the hub's service endpoints so dispatcher behavior can be
//! checked on the wire: paths, headers, bodies and call counts.

use serde_json::Value;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Token the mock hub expects in the `Authorization` header
pub const TEST_TOKEN: &str = "test-long-lived-token";

/// Mock Home Assistant instance
pub struct MockHub {
    pub server: MockServer,
}

impl MockHub {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Expect exactly `times` authorized POSTs of `body` to `service_path`
    pub async fn expect_service(&self, service_path: &str, body: Value, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path(service_path))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .and(header("content-type", "application/json"))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!([])))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far, in order
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}
