//! Scan orchestration.
//!
//! [`ScanController`] owns the UI state machine:
//!
//! ```text
//! Idle --submit(url)--> Scanning --success--> ResultShown --reset--> Idle
//!                          |
//!                          +--failure--> Idle
//! ```
//!
//! The state is a single tagged enum, so the form, the scanning indicator and
//! the result view can never be visible at the same time.

mod model;

use std::time::Instant;

use log::{debug, info, warn};

use crate::classifier::{Classifier, ScanRequest, ScanResponse};
use crate::error_handling::ScanError;

pub use model::{format_duration, DisplayModel, RiskFactorFlags};

/// Current state of the scan workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    /// Waiting for input; the form is shown.
    Idle,
    /// One request is outstanding.
    Scanning {
        request: ScanRequest,
        started: Instant,
    },
    /// The last scan completed and its result is shown.
    ResultShown(DisplayModel),
}

/// The one part of the page that is visible in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    ScanningIndicator,
    Result,
}

/// Drives a scan from user input to a [`DisplayModel`].
#[derive(Debug)]
pub struct ScanController {
    classifier: Classifier,
    state: ScanState,
    input: String,
}

impl ScanController {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            state: ScanState::Idle,
            input: String::new(),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn view(&self) -> View {
        match self.state {
            ScanState::Idle => View::Form,
            ScanState::Scanning { .. } => View::ScanningIndicator,
            ScanState::ResultShown(_) => View::Result,
        }
    }

    /// Current value of the URL input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The result being shown, if any.
    pub fn display_model(&self) -> Option<&DisplayModel> {
        match &self.state {
            ScanState::ResultShown(model) => Some(model),
            _ => None,
        }
    }

    /// Validates `raw_input` and enters `Scanning`.
    ///
    /// Returns the request the caller must send. Nothing is sent here.
    ///
    /// # Errors
    ///
    /// - `ScanError::Busy` if the controller is not idle (state unchanged)
    /// - `ScanError::Input` if the input is blank (state unchanged)
    pub fn begin(&mut self, raw_input: &str) -> Result<ScanRequest, ScanError> {
        if !matches!(self.state, ScanState::Idle) {
            debug!("Ignoring submission while {:?}", self.view());
            return Err(ScanError::Busy);
        }

        self.input = raw_input.to_string();
        let request = ScanRequest::new(raw_input).inspect_err(|e| warn!("{}", e))?;

        info!("Scanning {}", request.url());
        self.state = ScanState::Scanning {
            request: request.clone(),
            started: Instant::now(),
        };
        Ok(request)
    }

    /// Applies the outcome of the outstanding request.
    ///
    /// On success the display model is built (elapsed time measured from
    /// [`begin`](Self::begin)) and the result view is shown. On failure the
    /// controller returns to `Idle` with the input field untouched.
    ///
    /// # Errors
    ///
    /// Returns the failure unchanged, or `ScanError::NotScanning` if no
    /// request is outstanding.
    pub fn complete(
        &mut self,
        outcome: Result<ScanResponse, ScanError>,
    ) -> Result<DisplayModel, ScanError> {
        let started = match &self.state {
            ScanState::Scanning { started, .. } => *started,
            _ => {
                debug!("Ignoring scan completion while {:?}", self.view());
                return Err(ScanError::NotScanning);
            }
        };

        match outcome {
            Ok(response) => {
                let model = DisplayModel::from_response(&response, started.elapsed());
                info!(
                    "{} -> {} ({}% confidence) in {}s",
                    model.scanned_url,
                    model.verdict,
                    model.confidence_percent,
                    model.duration_seconds
                );
                self.state = ScanState::ResultShown(model.clone());
                Ok(model)
            }
            Err(e) => {
                match e.error_type() {
                    Some(kind) => warn!("Scan failed ({}): {}", kind, e),
                    None => warn!("Scan failed: {}", e),
                }
                self.state = ScanState::Idle;
                Err(e)
            }
        }
    }

    /// Submits `raw_input`: one request to the classifier, then the result.
    ///
    /// # Errors
    ///
    /// See [`begin`](Self::begin) and [`complete`](Self::complete).
    pub async fn submit(&mut self, raw_input: &str) -> Result<DisplayModel, ScanError> {
        let request = self.begin(raw_input)?;
        let outcome = self.classifier.predict(&request).await;
        self.complete(outcome)
    }

    /// Leaves the result view: clears the model and the input field.
    ///
    /// No-op when idle. Refused while a request is outstanding.
    pub fn reset(&mut self) {
        match self.state {
            ScanState::ResultShown(_) => {
                debug!("Resetting to form");
                self.state = ScanState::Idle;
                self.input.clear();
            }
            ScanState::Idle => {}
            ScanState::Scanning { .. } => debug!("Ignoring reset while scanning"),
        }
    }
}
