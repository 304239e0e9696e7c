//! Shared test helpers

#![allow(dead_code)]

use std::collections::HashMap;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use acme_dns_regru::RegruSolver;

pub const USERNAME: &str = "foo";
pub const PASSWORD: &str = "bar";
pub const DOMAIN: &str = "example.com";
pub const RECORD_NAME: &str = "_acme-challenge.example.com";
pub const VALIDATION: &str = "validation-token";

/// Solver pointed at a mock server.
pub fn solver_for(server: &MockServer) -> RegruSolver {
    RegruSolver::with_api_base(USERNAME.to_string(), PASSWORD.to_string(), server.uri())
}

/// Mounts a mock answering `POST /zone/{action}` with the given JSON body.
pub async fn mount_json(server: &MockServer, action: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(format!("/zone/{action}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub fn success_body() -> serde_json::Value {
    serde_json::json!({"result": "success"})
}

/// Decodes the form-urlencoded body of a captured request.
pub fn form_params(request: &wiremock::Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// Pulls the `input_data` JSON payload out of a captured request body.
pub fn input_data(request: &wiremock::Request) -> serde_json::Value {
    let params = form_params(request);
    let raw = params
        .get("input_data")
        .expect("request body has no input_data field");
    serde_json::from_str(raw).expect("input_data is not valid JSON")
}
