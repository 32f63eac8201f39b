//! Session logging utilities.

use log::info;

use super::session::SessionSummary;

/// Logs what a finished session did.
///
/// # Arguments
///
/// * `start_time` - When the session started
/// * `summary` - Counters collected during the session
pub fn log_session_summary(start_time: std::time::Instant, summary: &SessionSummary) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Session ended after {:.2} seconds: {} scanned, {} failed, {} rejected",
        elapsed_secs, summary.completed, summary.failed, summary.rejected
    );
}
