//! Risk factor catalogue.

use strum_macros::EnumIter as EnumIterMacro;

use crate::controller::RiskFactorFlags;

/// How a risk factor is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Danger,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
        }
    }
}

/// Static presentation data for one risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactorDescriptor {
    pub icon: &'static str,
    pub label: &'static str,
    pub severity: Severity,
}

const UNENCRYPTED_HTTP: RiskFactorDescriptor = RiskFactorDescriptor {
    icon: "fa-unlock",
    label: "Unencrypted HTTP",
    severity: Severity::Danger,
};

const SUSPICIOUS_DOMAIN: RiskFactorDescriptor = RiskFactorDescriptor {
    icon: "fa-file-signature",
    label: "Suspicious Domain",
    severity: Severity::Warning,
};

/// Displayable risk conditions.
///
/// Declaration order is display order; iterate with `RiskFactor::iter()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RiskFactor {
    UnencryptedHttp,
    SuspiciousDomain,
}

impl RiskFactor {
    pub fn descriptor(self) -> &'static RiskFactorDescriptor {
        match self {
            RiskFactor::UnencryptedHttp => &UNENCRYPTED_HTTP,
            RiskFactor::SuspiciousDomain => &SUSPICIOUS_DOMAIN,
        }
    }

    /// Whether this factor is raised in `flags`.
    pub fn is_flagged(self, flags: &RiskFactorFlags) -> bool {
        match self {
            RiskFactor::UnencryptedHttp => flags.unencrypted_http,
            RiskFactor::SuspiciousDomain => flags.suspicious_domain,
        }
    }
}
