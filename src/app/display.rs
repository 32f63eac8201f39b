//! Terminal presentation of the scan workflow.
//!
//! Each function writes one part of the page (form prompt, scanning
//! indicator, result view, notifications) to the given writer.

use std::io::{self, Write};

use colored::*;

use crate::classifier::ScanRequest;
use crate::error_handling::ScanError;
use crate::render::{ResultView, Severity, Tone};

/// Width of the confidence bar in cells.
const BAR_WIDTH: usize = 30;

/// Terminal stand-in for an icon name.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "fa-exclamation-triangle" => "⚠",
        "fa-check-circle" => "✔",
        "fa-unlock" => "🔓",
        "fa-file-signature" => "✎",
        _ => "•",
    }
}

/// Draws a bar with `fill_percent` (0..=100) of its cells filled.
pub fn confidence_bar(fill_percent: f64) -> String {
    let filled = ((fill_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn tone_paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Safe => text.green(),
        Tone::Danger => text.red(),
    }
}

fn severity_paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Danger => text.red(),
        Severity::Warning => text.yellow(),
    }
}

pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Enter a URL to scan:".bold())?;
    out.flush()
}

pub fn write_scan_another_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Press Enter to scan another URL".dimmed())?;
    out.flush()
}

pub fn write_scanning<W: Write>(out: &mut W, request: &ScanRequest) -> io::Result<()> {
    writeln!(out, "{} {}", "Scanning".cyan().bold(), request.url())?;
    out.flush()
}

/// Warning for a locally rejected submission. Callers pass stderr.
pub fn write_warning<W: Write>(out: &mut W, error: &ScanError) -> io::Result<()> {
    writeln!(out, "{} {}", "⚠".yellow(), error.to_string().yellow())?;
    out.flush()
}

/// Notification for a failed scan.
pub fn write_error<W: Write>(out: &mut W, error: &ScanError) -> io::Result<()> {
    writeln!(out, "{} {}", "✖ Error:".red().bold(), error)?;
    out.flush()
}

/// Writes the result view. With `animate`, each risk entry is held back
/// until its delay has elapsed.
pub async fn write_result_view<W: Write>(
    out: &mut W,
    view: &ResultView,
    animate: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        tone_paint(glyph(view.icon), view.tone),
        tone_paint(view.title, view.tone).bold()
    )?;
    writeln!(out, "  URL:      {}", view.scanned_url)?;
    writeln!(out, "  Duration: {}", view.duration_label)?;
    writeln!(
        out,
        "  {} {}",
        tone_paint(&confidence_bar(view.fill_percent), view.tone),
        view.confidence_label
    )?;

    if let Some(entries) = &view.risk_section {
        writeln!(out, "  {}", "Risk Assessment".bold())?;
        out.flush()?;

        let mut shown_at = std::time::Duration::ZERO;
        for entry in entries {
            if animate && entry.delay > shown_at {
                tokio::time::sleep(entry.delay - shown_at).await;
                shown_at = entry.delay;
            }
            writeln!(
                out,
                "    {} {}",
                severity_paint(glyph(entry.icon), entry.severity),
                entry.label
            )?;
            out.flush()?;
        }
    }

    out.flush()
}
