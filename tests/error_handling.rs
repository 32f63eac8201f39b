//! Failure paths of a scan.
//!
//! Every transport or contract failure must return the controller to the
//! form with the input untouched, after exactly one request (no retry).

mod helpers;

use std::time::Duration;

use helpers::{controller_for, mount_predict};
use phish_scan::error_handling::ErrorType;
use phish_scan::{
    Classifier, Config, ContractError, ScanController, ScanError, ScanState, TransportError,
};
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

const URL: &str = "http://example-bank-login.com";

/// Submits `URL` against a classifier answering `response` and checks the
/// controller is back at an intact form.
async fn failing_scan(response: ResponseTemplate) -> ScanError {
    let server = MockServer::start().await;
    mount_predict(&server, URL, response, 1).await;

    let mut controller = controller_for(&server);
    let raw = format!("  {}  ", URL);
    let err = controller
        .submit(&raw)
        .await
        .expect_err("scan should fail");

    assert_eq!(controller.state(), &ScanState::Idle);
    assert_eq!(controller.input(), raw);
    assert!(controller.display_model().is_none());
    assert!(err.is_remote());
    err
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let err = failing_scan(ResponseTemplate::new(500).set_body_string("Traceback ...")).await;
    match err {
        ScanError::Transport(TransportError::Status { status, message }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_request_carries_service_message() {
    let err = failing_scan(
        ResponseTemplate::new(400).set_body_json(json!({ "error": "No URL provided" })),
    )
    .await;
    assert_eq!(err.error_type(), Some(ErrorType::HttpRequestBadRequest));
    assert!(err.to_string().contains("No URL provided"));
}

#[tokio::test]
async fn test_invalid_json_is_contract_error() {
    let err = failing_scan(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    assert!(matches!(
        err,
        ScanError::Contract(ContractError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_missing_field_is_contract_error() {
    let err = failing_scan(ResponseTemplate::new(200).set_body_json(json!({
        "result": "Phishing",
        "url": URL,
        "confidence": 92
    })))
    .await;
    assert!(matches!(
        err,
        ScanError::Contract(ContractError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_wrong_type_is_contract_error() {
    let err = failing_scan(ResponseTemplate::new(200).set_body_json(json!({
        "result": "Phishing",
        "url": URL,
        "confidence": "high",
        "https": 0,
        "phishing_prob": 81
    })))
    .await;
    assert_eq!(err.error_type(), Some(ErrorType::ContractViolation));
}

#[tokio::test]
async fn test_invalid_https_flag_is_contract_error() {
    let err = failing_scan(ResponseTemplate::new(200).set_body_json(json!({
        "result": "Phishing",
        "url": URL,
        "confidence": 92,
        "https": 3,
        "phishing_prob": 81
    })))
    .await;
    assert!(matches!(
        err,
        ScanError::Contract(ContractError::InvalidHttpsFlag(3))
    ));
}

#[tokio::test]
async fn test_slow_classifier_times_out() {
    let server = MockServer::start().await;
    mount_predict(
        &server,
        URL,
        ResponseTemplate::new(200)
            .set_body_json(helpers::phishing_body())
            .set_delay(Duration::from_secs(3)),
        1,
    )
    .await;

    let config = Config {
        endpoint: server.uri(),
        timeout_seconds: 1,
        ..Default::default()
    };
    let mut controller = ScanController::new(Classifier::from_config(&config).unwrap());
    let err = controller.submit(URL).await.unwrap_err();

    assert_eq!(err.error_type(), Some(ErrorType::HttpRequestTimeoutError));
    assert_eq!(controller.state(), &ScanState::Idle);
}

#[tokio::test]
async fn test_unreachable_classifier_is_transport_error() {
    // Reserve a port, then free it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = Config {
        endpoint: format!("http://127.0.0.1:{}", port),
        timeout_seconds: 2,
        ..Default::default()
    };
    let mut controller = ScanController::new(Classifier::from_config(&config).unwrap());

    let err = controller.submit(URL).await.unwrap_err();
    assert!(matches!(
        err,
        ScanError::Transport(TransportError::Request { .. })
    ));
    assert_eq!(err.error_type(), Some(ErrorType::HttpRequestConnectError));
    assert_eq!(controller.state(), &ScanState::Idle);
    assert_eq!(controller.input(), URL);
}

#[tokio::test]
async fn test_failure_allows_manual_resubmission() {
    let server = MockServer::start().await;
    mount_predict(&server, URL, ResponseTemplate::new(503), 2).await;

    let mut controller = controller_for(&server);
    assert!(controller.submit(URL).await.is_err());
    // Resubmitting the unchanged input is the only way to retry
    let input = controller.input().to_string();
    assert!(controller.submit(&input).await.is_err());
}
