//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ENDPOINT, DEFAULT_STAGGER_MS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scanner configuration.
///
/// Usable both as the CLI definition (via `clap`) and programmatically.
///
/// # Examples
///
/// ```no_run
/// use phish_scan::Config;
///
/// let config = Config {
///     endpoint: "http://localhost:5000".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phish_scan",
    version,
    about = "Check URLs against a phishing classifier",
    long_about = None
)]
pub struct Config {
    /// Scan a single URL and exit instead of starting an interactive session
    #[arg(long)]
    pub url: Option<String>,

    /// Base URL of the classifier service (the request goes to `<endpoint>/predict`)
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Delay between risk-factor entries in milliseconds
    #[arg(long, default_value_t = DEFAULT_STAGGER_MS)]
    pub stagger_ms: u64,

    /// Print risk-factor entries without the stagger delay
    #[arg(long)]
    pub no_animation: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Stagger delay between rendered risk-factor entries.
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            stagger_ms: DEFAULT_STAGGER_MS,
            no_animation: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
