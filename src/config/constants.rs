//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the classifier contract, timeouts, and presentation timing.

// Classifier endpoint
/// Default base URL of the classifier service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
/// Path of the prediction route, joined onto the endpoint base.
pub const PREDICT_PATH: &str = "/predict";

// Network operation timeouts
/// Per-request timeout in seconds.
/// A single attempt is made per user action, so this bounds the time spent
/// in the scanning state.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for classifier requests.
pub const DEFAULT_USER_AGENT: &str = concat!("phish_scan/", env!("CARGO_PKG_VERSION"));

// Risk factor derivation
/// `phishing_prob` strictly above this value flags the domain as suspicious.
pub const SUSPICIOUS_DOMAIN_THRESHOLD: f64 = 60.0;

// Presentation
/// Delay between consecutive risk-factor entries, in milliseconds.
pub const DEFAULT_STAGGER_MS: u64 = 150;
/// Upper bound of the confidence bar fill.
pub const MAX_FILL_PERCENT: f64 = 100.0;

// Error message limits
/// Maximum length of a service-provided error message carried into a
/// `TransportError`. Longer messages are truncated.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;
