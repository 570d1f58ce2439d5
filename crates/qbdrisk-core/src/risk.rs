//! Risk Priority Number computation and tier classification.

use serde::{Deserialize, Serialize};

/// RPN at or above this is High risk.
pub const RPN_HIGH_THRESHOLD: u16 = 120;
/// RPN at or above this (and below [`RPN_HIGH_THRESHOLD`]) is Medium risk.
pub const RPN_MEDIUM_THRESHOLD: u16 = 60;

/// Risk tier derived from an RPN.
///
/// The serialized form is the glyph-prefixed label written by earlier
/// versions of the tool ("🔴 High" etc.) so existing session files
/// round-trip; plain labels are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "🟢 Low", alias = "Low")]
    Low,
    #[serde(rename = "🟠 Medium", alias = "Medium")]
    Medium,
    #[serde(rename = "🔴 High", alias = "High")]
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟠",
            Self::High => "🔴",
        }
    }

    /// Glyph-prefixed label, as stored in session files.
    pub fn label(&self) -> String {
        format!("{} {}", self.glyph(), self.as_str())
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk Priority Number: Severity × Occurrence × Detectability.
pub fn compute_rpn(severity: u8, occurrence: u8, detectability: u8) -> u16 {
    severity as u16 * occurrence as u16 * detectability as u16
}

/// Classify an RPN into a risk tier.
pub fn classify(rpn: u16) -> RiskTier {
    if rpn >= RPN_HIGH_THRESHOLD {
        RiskTier::High
    } else if rpn >= RPN_MEDIUM_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
