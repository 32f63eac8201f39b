//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_scan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Running an interactive session or a one-shot scan
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use phish_scan::app::{
    log_session_summary, run_session, scan_and_show, ScanOutcome, SessionOptions,
};
use phish_scan::initialization::init_logger_with;
use phish_scan::{Classifier, Config, ScanController};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let classifier =
        Classifier::from_config(&config).context("Failed to initialize classifier client")?;
    log::info!("Using classifier at {}", classifier.predict_url());

    let mut controller = ScanController::new(classifier);
    let options = SessionOptions::from_config(&config);
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    if let Some(url) = config.url.as_deref() {
        // One-shot: exit non-zero on any failure
        match scan_and_show(&mut controller, url, &mut stdout, &mut stderr, &options).await? {
            ScanOutcome::Shown(_) => Ok(()),
            ScanOutcome::Failed(_) => process::exit(1),
        }
    } else {
        let start_time = std::time::Instant::now();
        let stdin = BufReader::new(tokio::io::stdin());
        let summary = run_session(&mut controller, stdin, &mut stdout, &mut stderr, &options).await?;
        log_session_summary(start_time, &summary);
        Ok(())
    }
}
