//! HTTP client initialization.
//!
//! This module builds the shared `reqwest::Client` and resolves the
//! classifier's prediction URL from the configured endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;
use url::Url;

use crate::config::{Config, PREDICT_PATH};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for classifier requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Timeout from config (covers connect, send, and body read)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Resolves `<endpoint>/predict` from the configured base URL.
///
/// Any path already present on the endpoint is kept, so a classifier mounted
/// under a prefix (`http://host/api`) resolves to `http://host/api/predict`.
///
/// # Errors
///
/// Returns `InitializationError::InvalidEndpointError` if the endpoint does not
/// parse or is not http/https.
pub fn predict_url(endpoint: &str) -> Result<Url, InitializationError> {
    let invalid = || InitializationError::InvalidEndpointError(endpoint.to_string());

    let base = Url::parse(endpoint.trim()).map_err(|_| invalid())?;
    match base.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid()),
    }
    if base.cannot_be_a_base() {
        return Err(invalid());
    }

    let joined = format!(
        "{}{}",
        base.as_str().trim_end_matches('/'),
        PREDICT_PATH
    );
    Url::parse(&joined).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_url_from_host() {
        let url = predict_url("http://127.0.0.1:5000").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn test_predict_url_trailing_slash() {
        let url = predict_url("https://classifier.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://classifier.example.com/predict");
    }

    #[test]
    fn test_predict_url_keeps_prefix() {
        let url = predict_url("http://localhost:8080/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/predict");
    }

    #[test]
    fn test_predict_url_rejects_unsupported_scheme() {
        assert!(matches!(
            predict_url("ftp://classifier.example.com"),
            Err(InitializationError::InvalidEndpointError(_))
        ));
    }

    #[test]
    fn test_predict_url_rejects_garbage() {
        assert!(predict_url("not a url at all!!!").is_err());
        assert!(predict_url("").is_err());
    }

    #[test]
    fn test_init_client_with_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }
}
