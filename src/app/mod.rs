//! Terminal application.
//!
//! This module provides the interactive session, its terminal rendering, and
//! session logging used by the binary.

pub mod display;
pub mod logging;
pub mod session;

// Re-export public API
pub use logging::log_session_summary;
pub use session::{run_session, scan_and_show, ScanOutcome, SessionOptions, SessionSummary};
