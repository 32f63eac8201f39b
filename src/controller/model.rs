//! Display model built from a completed scan.

use std::time::Duration;

use crate::classifier::{ScanResponse, Verdict};
use crate::config::SUSPICIOUS_DOMAIN_THRESHOLD;

/// Risk conditions derived from a classifier response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskFactorFlags {
    /// The URL was fetched over plain HTTP (`https == 0`).
    pub unencrypted_http: bool,
    /// `phishing_prob` is strictly above the suspicious-domain threshold.
    pub suspicious_domain: bool,
}

impl RiskFactorFlags {
    pub fn from_response(response: &ScanResponse) -> Self {
        Self {
            unencrypted_http: !response.uses_https(),
            suspicious_domain: response.phishing_prob > SUSPICIOUS_DOMAIN_THRESHOLD,
        }
    }
}

/// Snapshot shown in the result view.
///
/// Built once per completed scan and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub verdict: Verdict,
    pub scanned_url: String,
    /// Elapsed time of the scan in seconds, two decimal places (e.g. `"0.42"`).
    pub duration_seconds: String,
    pub confidence_percent: f64,
    pub risk_factors: RiskFactorFlags,
}

impl DisplayModel {
    /// Builds the model from a classifier response and the time the request took.
    pub fn from_response(response: &ScanResponse, elapsed: Duration) -> Self {
        Self {
            verdict: response.result,
            scanned_url: response.url.clone(),
            duration_seconds: format_duration(elapsed),
            confidence_percent: response.confidence,
            risk_factors: RiskFactorFlags::from_response(response),
        }
    }
}

/// Formats `elapsed` as seconds with two decimal places.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(https: u64, phishing_prob: f64) -> ScanResponse {
        ScanResponse {
            result: Verdict::Phishing,
            url: "http://example-bank-login.com".to_string(),
            confidence: 92.0,
            https,
            phishing_prob,
        }
    }

    #[test]
    fn test_format_duration_two_decimals() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0.00");
        assert_eq!(format_duration(Duration::from_millis(1234)), "1.23");
        assert_eq!(format_duration(Duration::from_millis(999)), "1.00");
        assert_eq!(format_duration(Duration::from_secs(12)), "12.00");
    }

    #[test]
    fn test_unencrypted_http_flag() {
        assert!(RiskFactorFlags::from_response(&response(0, 10.0)).unencrypted_http);
        assert!(!RiskFactorFlags::from_response(&response(1, 10.0)).unencrypted_http);
    }

    #[test]
    fn test_suspicious_domain_threshold_is_strict() {
        assert!(!RiskFactorFlags::from_response(&response(1, 60.0)).suspicious_domain);
        assert!(RiskFactorFlags::from_response(&response(1, 60.01)).suspicious_domain);
        assert!(RiskFactorFlags::from_response(&response(1, 75.0)).suspicious_domain);
        assert!(!RiskFactorFlags::from_response(&response(1, 3.0)).suspicious_domain);
    }

    #[test]
    fn test_display_model_from_response() {
        let model =
            DisplayModel::from_response(&response(0, 81.0), Duration::from_millis(420));
        assert_eq!(model.verdict, Verdict::Phishing);
        assert_eq!(model.scanned_url, "http://example-bank-login.com");
        assert_eq!(model.duration_seconds, "0.42");
        assert_eq!(model.confidence_percent, 92.0);
        assert_eq!(
            model.risk_factors,
            RiskFactorFlags {
                unencrypted_http: true,
                suspicious_domain: true,
            }
        );
    }
}
