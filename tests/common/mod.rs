//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use pushsecure::{Account, PushSecureClient};
use serde_json::{Value, json};
use wiremock::{Match, MockServer, Request};

/// Session token used by armed clients.
pub const TOKEN: &str = "4f1a9c0de2";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

pub fn unarmed(server: &MockServer) -> PushSecureClient {
    PushSecureClient::new(server.uri()).unwrap()
}

pub fn armed(server: &MockServer) -> PushSecureClient {
    PushSecureClient::with_account(server.uri(), Account::new("alice", TOKEN)).unwrap()
}

pub fn device_json(id: u64, registration_id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("device-{}", id),
        "registration_id": registration_id,
        "device_id": null,
        "active": true,
        "date_created": "2015-06-23T21:24:15.123456Z"
    })
}

pub fn page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

/// Matches requests that carry no Authorization header.
pub struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Matches requests whose JSON body has no `key` at the top level.
pub struct BodyLacks(pub &'static str);

impl Match for BodyLacks {
    fn matches(&self, request: &Request) -> bool {
        match serde_json::from_slice::<Value>(&request.body) {
            Ok(Value::Object(map)) => !map.contains_key(self.0),
            _ => false,
        }
    }
}
