//! phish_scan library: phishing risk assessment client
//!
//! This library submits a URL to a remote phishing classifier and turns its
//! verdict into a structured risk assessment: a confidence bar, a binary
//! verdict, and an ordered list of risk factors.
//!
//! # Example
//!
//! ```no_run
//! use phish_scan::{render, Classifier, Config, ScanController};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     endpoint: "http://127.0.0.1:5000".to_string(),
//!     ..Default::default()
//! };
//! let mut controller = ScanController::new(Classifier::from_config(&config)?);
//!
//! let model = controller.submit("http://example-bank-login.com").await?;
//! let view = render(&model, Duration::from_millis(150));
//! println!("{} ({})", view.title, view.confidence_label);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Scanning requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or call the async functions from within an async context.

pub mod app;
pub mod classifier;
pub mod config;
pub mod controller;
pub mod error_handling;
pub mod initialization;
pub mod render;

// Re-export public API
pub use classifier::{Classifier, ScanRequest, ScanResponse, Verdict};
pub use config::{Config, LogFormat, LogLevel};
pub use controller::{DisplayModel, RiskFactorFlags, ScanController, ScanState, View};
pub use error_handling::{ContractError, InputError, ScanError, TransportError};
pub use render::{render, ResultView, RiskEntry, RiskFactor, Severity, Tone};
