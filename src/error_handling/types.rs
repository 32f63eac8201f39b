//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//! Every scan error leaves the controller in a usable state; none are fatal.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured classifier endpoint is not a usable http(s) URL.
    #[error("Invalid classifier endpoint '{0}'")]
    InvalidEndpointError(String),
}

/// Rejected user input. Recovered locally: the user is warned and the
/// controller state does not change.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The URL field is empty after trimming whitespace.
    #[error("Enter a URL")]
    EmptyUrl,
}

/// The classifier could not be reached or refused the request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network-level failure (connect, timeout, body read, ...).
    #[error("{kind}: {source}")]
    Request {
        /// Category of the failure
        kind: ErrorType,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The classifier answered with a non-2xx status.
    #[error("Classifier responded with {status}: {message}")]
    Status {
        /// HTTP status returned by the classifier
        status: StatusCode,
        /// Error message from the response body, or the status reason
        message: String,
    },
}

impl TransportError {
    /// Category of this failure, for logging.
    pub fn kind(&self) -> ErrorType {
        match self {
            TransportError::Request { kind, .. } => *kind,
            TransportError::Status { status, .. } => {
                super::categorization::categorize_status(*status)
            }
        }
    }
}

/// The classifier answered 2xx but the body breaks the response contract.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Body is not JSON, omits a required field, or has a field of the wrong type.
    #[error("Malformed classifier response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// `https` must be exactly 0 or 1.
    #[error("Malformed classifier response: https flag is {0}, expected 0 or 1")]
    InvalidHttpsFlag(u64),
}

/// Any failure of a `submit` call.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Empty input; nothing was sent.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Network failure or non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Unusable response body.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// A submission arrived while the controller was not idle.
    #[error("A scan is already in progress")]
    Busy,

    /// A completion arrived with no request outstanding.
    #[error("No scan is in progress")]
    NotScanning,
}

impl ScanError {
    /// Whether the failure came from the classifier round trip (as opposed to
    /// a locally rejected submission).
    pub fn is_remote(&self) -> bool {
        matches!(self, ScanError::Transport(_) | ScanError::Contract(_))
    }

    /// Category of this failure, for logging.
    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            ScanError::Transport(e) => Some(e.kind()),
            ScanError::Contract(_) => Some(ErrorType::ContractViolation),
            ScanError::Input(_) | ScanError::Busy | ScanError::NotScanning => None,
        }
    }
}

/// Categories of classifier request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestTooManyRequests,     // 429 Too Many Requests
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    HttpRequestStatusError,         // any other non-2xx
    // Response body errors
    ContractViolation,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request error",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::ContractViolation => "Classifier response contract violation",
        }
    }
}
