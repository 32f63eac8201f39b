//! Interactive scan session.
//!
//! Maps terminal input onto the page's affordances: a line typed at the form
//! prompt is a submission (Enter), and any line while a result is shown is
//! "scan another".
//!
//! Result views and prompts go to `out`; warnings and failure notifications go
//! to `err`, so redirecting one stream does not mix the two.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::display;
use crate::config::Config;
use crate::controller::{DisplayModel, ScanController, View};
use crate::error_handling::ScanError;
use crate::render::render;

/// Presentation settings for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Delay between risk-factor entries
    pub stagger: Duration,
    /// Whether to actually wait out the stagger delay
    pub animate: bool,
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            stagger: config.stagger(),
            animate: !config.no_animation,
        }
    }
}

/// Result of one submission.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The result view is shown.
    Shown(DisplayModel),
    /// The submission was rejected or the scan failed; the form is shown.
    Failed(ScanError),
}

/// Counts of what happened during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Scans that produced a result
    pub completed: usize,
    /// Scans that reached the classifier and failed
    pub failed: usize,
    /// Submissions rejected before any request
    pub rejected: usize,
}

/// Submits `raw_input` and writes the scanning indicator, then the result
/// view to `out` or the failure notification to `err`.
///
/// # Errors
///
/// Only write failures are returned as errors; scan failures are reported
/// through [`ScanOutcome::Failed`].
pub async fn scan_and_show<W: Write, E: Write>(
    controller: &mut ScanController,
    raw_input: &str,
    out: &mut W,
    err: &mut E,
    options: &SessionOptions,
) -> Result<ScanOutcome> {
    let request = match controller.begin(raw_input) {
        Ok(request) => request,
        Err(e) => {
            display::write_warning(err, &e)?;
            return Ok(ScanOutcome::Failed(e));
        }
    };
    display::write_scanning(out, &request)?;

    let outcome = controller.classifier().predict(&request).await;
    match controller.complete(outcome) {
        Ok(model) => {
            let view = render(&model, options.stagger);
            display::write_result_view(out, &view, options.animate).await?;
            Ok(ScanOutcome::Shown(model))
        }
        Err(e) => {
            display::write_error(err, &e)?;
            Ok(ScanOutcome::Failed(e))
        }
    }
}

/// Runs the interactive loop until `input` is exhausted.
///
/// # Errors
///
/// Returns an error if reading `input` or writing either stream fails.
pub async fn run_session<R, W, E>(
    controller: &mut ScanController,
    input: R,
    out: &mut W,
    err: &mut E,
    options: &SessionOptions,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    display::write_prompt(out)?;
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read URL input")?
    {
        match controller.view() {
            View::Form => match scan_and_show(controller, &line, out, err, options).await? {
                ScanOutcome::Shown(_) => {
                    summary.completed += 1;
                    display::write_scan_another_prompt(out)?;
                }
                ScanOutcome::Failed(e) => {
                    if e.is_remote() {
                        summary.failed += 1;
                    } else {
                        summary.rejected += 1;
                    }
                    display::write_prompt(out)?;
                }
            },
            View::Result => {
                controller.reset();
                display::write_prompt(out)?;
            }
            View::ScanningIndicator => debug!("Input ignored while scanning"),
        }
    }

    Ok(summary)
}
