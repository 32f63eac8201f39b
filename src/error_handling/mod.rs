//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and scanning
//! - Categorization of classifier request failures
//!
//! Scan errors fall into three groups:
//! - **Input**: empty URL, rejected before any network activity
//! - **Transport**: network failure, timeout, or non-2xx status
//! - **Contract**: 2xx response whose body is not a valid prediction

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use types::{
    ContractError, ErrorType, InitializationError, InputError, ScanError, TransportError,
};
