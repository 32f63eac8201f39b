//! HTTP client for the classifier's prediction endpoint.

use std::sync::Arc;

use log::debug;
use reqwest::StatusCode;
use url::Url;

use super::types::{ErrorBody, ScanRequest, ScanResponse};
use crate::config::{Config, MAX_ERROR_MESSAGE_LENGTH};
use crate::error_handling::{
    categorize_reqwest_error, InitializationError, ScanError, TransportError,
};
use crate::initialization::{init_client, predict_url};

/// Handle on the classifier service.
///
/// Each call to [`Classifier::predict`] makes exactly one request; there is
/// no retry.
#[derive(Debug, Clone)]
pub struct Classifier {
    client: Arc<reqwest::Client>,
    predict_url: Url,
}

impl Classifier {
    pub fn new(client: Arc<reqwest::Client>, predict_url: Url) -> Self {
        Self {
            client,
            predict_url,
        }
    }

    /// Builds the HTTP client and prediction URL from `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the endpoint is invalid or the
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let predict_url = predict_url(&config.endpoint)?;
        let client = init_client(config)?;
        Ok(Self::new(client, predict_url))
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    /// Sends `request` to `POST /predict` and parses the prediction.
    ///
    /// # Errors
    ///
    /// - `ScanError::Transport` on network failure, timeout, or non-2xx status
    /// - `ScanError::Contract` if a 2xx body is not a valid prediction
    pub async fn predict(&self, request: &ScanRequest) -> Result<ScanResponse, ScanError> {
        debug!("POST {} url={}", self.predict_url, request.url());

        let response = self
            .client
            .post(self.predict_url.clone())
            .json(request)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(request_error)?;
        debug!("Classifier responded {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                message: status_message(status, &body),
            }
            .into());
        }

        Ok(ScanResponse::from_body(&body)?)
    }
}

fn request_error(source: reqwest::Error) -> TransportError {
    TransportError::Request {
        kind: categorize_reqwest_error(&source),
        source,
    }
}

/// Message for a non-2xx response: the service's `error` field if present,
/// otherwise the status reason.
fn status_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { error }) if !error.trim().is_empty() => {
            error.trim().chars().take(MAX_ERROR_MESSAGE_LENGTH).collect()
        }
        _ => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    }
}
