//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client and the classifier prediction URL
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, predict_url};
pub use logger::init_logger_with;
