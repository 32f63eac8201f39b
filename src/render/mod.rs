//! Result rendering.
//!
//! Pure mapping from a [`DisplayModel`] to a [`ResultView`]: verdict chrome,
//! confidence bar, and the ordered list of raised risk factors.

mod risk;

use std::time::Duration;

use strum::IntoEnumIterator;

use crate::config::MAX_FILL_PERCENT;
use crate::controller::DisplayModel;

pub use risk::{RiskFactor, RiskFactorDescriptor, Severity};

/// Verdict-dependent color scheme. `as_str` is the color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Safe,
    Danger,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Safe => "safe",
            Tone::Danger => "danger",
        }
    }
}

/// One line of the risk-factor section.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskEntry {
    pub factor: RiskFactor,
    pub icon: &'static str,
    pub label: &'static str,
    pub severity: Severity,
    /// Highlight class, from the severity.
    pub color_class: &'static str,
    /// Offset from the start of the section at which this entry appears.
    pub delay: Duration,
}

/// Everything the result view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub tone: Tone,
    /// Color class of the verdict chrome, from the tone.
    pub color_class: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub scanned_url: String,
    /// e.g. `"0.42s"`
    pub duration_label: String,
    /// e.g. `"92% Confidence"`
    pub confidence_label: String,
    /// Confidence bar width, always within 0..=100.
    pub fill_percent: f64,
    /// `None` for a safe verdict; `Some` (possibly empty) for phishing.
    pub risk_section: Option<Vec<RiskEntry>>,
}

/// Renders `model`, spacing risk entries `stagger` apart.
pub fn render(model: &DisplayModel, stagger: Duration) -> ResultView {
    let fill_percent = clamp_fill(model.confidence_percent);

    let (tone, icon, title, risk_section) = if model.verdict.is_phishing() {
        (
            Tone::Danger,
            "fa-exclamation-triangle",
            "Potential Risk Detected",
            Some(risk_entries(model, stagger)),
        )
    } else {
        (Tone::Safe, "fa-check-circle", "URL is Safe", None)
    };

    ResultView {
        tone,
        color_class: tone.as_str(),
        icon,
        title,
        scanned_url: model.scanned_url.clone(),
        duration_label: format!("{}s", model.duration_seconds),
        confidence_label: format!("{}% Confidence", fill_percent),
        fill_percent,
        risk_section,
    }
}

fn risk_entries(model: &DisplayModel, stagger: Duration) -> Vec<RiskEntry> {
    RiskFactor::iter()
        .filter(|factor| factor.is_flagged(&model.risk_factors))
        .zip(0u32..)
        .map(|(factor, index)| {
            let descriptor = factor.descriptor();
            RiskEntry {
                factor,
                icon: descriptor.icon,
                label: descriptor.label,
                severity: descriptor.severity,
                color_class: descriptor.severity.as_str(),
                delay: stagger * index,
            }
        })
        .collect()
}

/// Clamps a confidence value to the bar's 0..=100 range. NaN renders empty.
pub fn clamp_fill(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, MAX_FILL_PERCENT)
    }
}
