//! Classifier service contract.
//!
//! `POST /predict` with `{"url": ...}` returns
//! `{"result", "url", "confidence", "https", "phishing_prob"}`.

mod client;
mod types;

pub use client::Classifier;
pub use types::{ScanRequest, ScanResponse, Verdict};
