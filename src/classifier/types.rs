//! Classifier request/response types.

use serde::{Deserialize, Serialize};

use crate::error_handling::{ContractError, InputError};

/// Binary classifier outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The classifier considers the URL legitimate.
    // The reference service labels safe URLs "Legitimate".
    #[serde(alias = "Legitimate")]
    Safe,
    /// The classifier considers the URL a phishing attempt.
    Phishing,
}

impl Verdict {
    pub fn is_phishing(self) -> bool {
        matches!(self, Verdict::Phishing)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Safe => f.write_str("Safe"),
            Verdict::Phishing => f.write_str("Phishing"),
        }
    }
}

/// Body of `POST /predict`.
///
/// Only constructible through [`ScanRequest::new`], so a request always
/// carries a trimmed, non-empty URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRequest {
    url: String,
}

impl ScanRequest {
    /// Trims `raw` and builds a request from it.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyUrl` if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, InputError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        Ok(Self {
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Successful prediction returned by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Verdict for the submitted URL
    pub result: Verdict,
    /// URL as seen by the classifier
    pub url: String,
    /// Classifier confidence, nominally 0-100
    pub confidence: f64,
    /// 1 if the URL uses https, 0 otherwise
    pub https: u64,
    /// Phishing probability, nominally 0-100
    pub phishing_prob: f64,
}

impl ScanResponse {
    /// Parses and validates a 2xx response body.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Malformed` for invalid JSON, missing fields, or
    /// wrong types, and `ContractError::InvalidHttpsFlag` if `https` is not 0 or 1.
    pub fn from_body(body: &[u8]) -> Result<Self, ContractError> {
        let response: ScanResponse = serde_json::from_slice(body)?;
        match response.https {
            0 | 1 => Ok(response),
            other => Err(ContractError::InvalidHttpsFlag(other)),
        }
    }

    pub fn uses_https(&self) -> bool {
        self.https == 1
    }
}

/// Error body returned by the classifier on 4xx, e.g. `{"error": "No URL provided"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
