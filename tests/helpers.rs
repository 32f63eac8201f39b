// Shared test helpers for driving the scan controller against a mock classifier.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use std::time::Duration;

use phish_scan::app::SessionOptions;
use phish_scan::{Classifier, Config, ScanController};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a controller whose classifier points at `server`.
pub fn controller_for(server: &MockServer) -> ScanController {
    let config = Config {
        endpoint: server.uri(),
        timeout_seconds: 2,
        ..Default::default()
    };
    ScanController::new(Classifier::from_config(&config).expect("valid mock endpoint"))
}

/// Session options that never sleep.
pub fn instant_options() -> SessionOptions {
    SessionOptions {
        stagger: Duration::from_millis(150),
        animate: false,
    }
}

pub fn phishing_body() -> Value {
    json!({
        "result": "Phishing",
        "url": "http://example-bank-login.com",
        "confidence": 92,
        "https": 0,
        "phishing_prob": 81
    })
}

pub fn safe_body() -> Value {
    json!({
        "result": "Safe",
        "url": "https://example.com",
        "confidence": 97,
        "https": 1,
        "phishing_prob": 3
    })
}

/// Mounts a `/predict` mock that expects exactly `expected_calls` requests
/// for `url` and answers with `response`.
pub async fn mount_predict(
    server: &MockServer,
    url: &str,
    response: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": url })))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mounts a catch-all `/predict` mock that must never be hit.
pub async fn mount_no_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(safe_body()))
        .expect(0)
        .mount(server)
        .await;
}
