//! Severity/Occurrence/Detectability scoring for CPP–CQA pairs.
//!
//! Two modes: rule-based (a fixed heuristic over substring matches in the
//! CPP/CQA names) and manual (caller-supplied triples at full pair
//! granularity). Both are pure functions of their inputs; the same process,
//! mode, and manual values always produce the same scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

// ── Rule-based scoring policy ──
//
// Fixed policy constants, not runtime-configurable. Swap the heuristic here
// without touching call sites.

/// Severity for CQAs naming a critical attribute (content, dissolution).
pub const SEVERITY_CRITICAL_CQA: u8 = 9;
/// Severity for all other CQAs.
pub const SEVERITY_BASELINE: u8 = 6;
/// Occurrence for CPPs prone to variability (mixing, roller steps).
pub const OCCURRENCE_HIGH_RISK_CPP: u8 = 7;
/// Occurrence for all other CPPs.
pub const OCCURRENCE_BASELINE: u8 = 4;
/// Detectability for CQAs with routine in-line measurement.
pub const DETECTABILITY_INLINE_CQA: u8 = 4;
/// Detectability for all other CQAs.
pub const DETECTABILITY_BASELINE: u8 = 5;

/// CQA substrings that raise severity. Matched case-insensitively.
pub const CRITICAL_CQA_TERMS: &[&str] = &["content", "dissolution"];
/// CPP substrings that raise occurrence. Matched case-sensitively.
pub const HIGH_OCCURRENCE_CPP_TERMS: &[&str] = &["Mixing", "Roll"];
/// CQA substrings that lower the detectability score. Matched case-sensitively.
pub const INLINE_CQA_TERMS: &[&str] = &["Granule Size", "Tablet Hardness"];

/// Valid range for each score factor.
pub const SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// How scores are produced for an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Caller supplies one [`Sod`] per CPP×CQA pair.
    Manual,
    /// The fixed rule table above.
    RuleBased,
}

/// One of the three FMEA score factors, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFactor {
    Severity,
    Occurrence,
    Detectability,
}

impl std::fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Severity => write!(f, "severity"),
            Self::Occurrence => write!(f, "occurrence"),
            Self::Detectability => write!(f, "detectability"),
        }
    }
}

/// A Severity/Occurrence/Detectability triple, each factor in 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sod {
    #[serde(rename = "Severity")]
    pub severity: u8,
    #[serde(rename = "Occurrence")]
    pub occurrence: u8,
    #[serde(rename = "Detectability")]
    pub detectability: u8,
}

impl Sod {
    pub fn new(severity: u8, occurrence: u8, detectability: u8) -> Self {
        Self {
            severity,
            occurrence,
            detectability,
        }
    }

    /// Check every factor against [`SCORE_RANGE`].
    pub fn validate(&self) -> Result<(), EvalError> {
        for (factor, value) in [
            (ScoreFactor::Severity, self.severity),
            (ScoreFactor::Occurrence, self.occurrence),
            (ScoreFactor::Detectability, self.detectability),
        ] {
            if !SCORE_RANGE.contains(&value) {
                return Err(EvalError::InvalidScore { factor, value });
            }
        }
        Ok(())
    }
}

impl Default for Sod {
    /// Scale midpoint for every factor.
    fn default() -> Self {
        Self::new(5, 5, 5)
    }
}

/// Manual score triples keyed by (CPP, CQA) pair.
#[derive(Debug, Clone, Default)]
pub struct ManualScores(HashMap<(String, String), Sod>);

impl ManualScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cpp: impl Into<String>, cqa: impl Into<String>, sod: Sod) {
        self.0.insert((cpp.into(), cqa.into()), sod);
    }

    pub fn get(&self, cpp: &str, cqa: &str) -> Option<&Sod> {
        self.0.get(&(cpp.to_string(), cqa.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Score one CPP–CQA pair.
///
/// Manual mode requires a triple for the pair and range-checks it; rule-based
/// mode ignores `manual` and applies the fixed policy above.
pub fn score(
    cpp: &str,
    cqa: &str,
    mode: ScoringMode,
    manual: Option<&Sod>,
) -> Result<Sod, EvalError> {
    match mode {
        ScoringMode::Manual => {
            let sod = manual.ok_or_else(|| EvalError::MissingManualInput {
                cpp: cpp.to_string(),
                cqa: cqa.to_string(),
            })?;
            sod.validate()?;
            Ok(*sod)
        }
        ScoringMode::RuleBased => Ok(rule_scores(cpp, cqa)),
    }
}

/// The fixed rule table.
///
/// The severity check matches case-insensitively; the occurrence and
/// detectability checks are case-sensitive. The asymmetry is deliberate —
/// scores for existing session files depend on it.
pub fn rule_scores(cpp: &str, cqa: &str) -> Sod {
    let cqa_lower = cqa.to_lowercase();

    let severity = if CRITICAL_CQA_TERMS.iter().any(|t| cqa_lower.contains(t)) {
        SEVERITY_CRITICAL_CQA
    } else {
        SEVERITY_BASELINE
    };

    let occurrence = if HIGH_OCCURRENCE_CPP_TERMS.iter().any(|t| cpp.contains(t)) {
        OCCURRENCE_HIGH_RISK_CPP
    } else {
        OCCURRENCE_BASELINE
    };

    let detectability = if INLINE_CQA_TERMS.iter().any(|t| cqa.contains(t)) {
        DETECTABILITY_INLINE_CQA
    } else {
        DETECTABILITY_BASELINE
    };

    Sod::new(severity, occurrence, detectability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_scores_critical_cqa_and_mixing_cpp() {
        // Direct Compression, ("Mixing Speed", "Content Uniformity").
        let sod = rule_scores("Mixing Speed", "Content Uniformity");
        assert_eq!(sod, Sod::new(9, 7, 5));
    }

    #[test]
    fn rule_scores_baseline_cpp_inline_cqa() {
        // Direct Compression, ("Blending Time", "Tablet Hardness").
        let sod = rule_scores("Blending Time", "Tablet Hardness");
        assert_eq!(sod, Sod::new(6, 4, 4));
    }

    #[test]
    fn severity_match_is_case_insensitive() {
        assert_eq!(rule_scores("Drying Time", "CONTENT UNIFORMITY").severity, 9);
        assert_eq!(rule_scores("Drying Time", "dissolution").severity, 9);
        assert_eq!(rule_scores("Drying Time", "Moisture Content").severity, 9);
    }

    #[test]
    fn occurrence_match_is_case_sensitive() {
        assert_eq!(rule_scores("Mixing Time", "Dissolution").occurrence, 7);
        assert_eq!(rule_scores("mixing time", "Dissolution").occurrence, 4);
        assert_eq!(rule_scores("Roll Pressure", "Dissolution").occurrence, 7);
        assert_eq!(rule_scores("roll pressure", "Dissolution").occurrence, 4);
    }

    #[test]
    fn detectability_match_is_case_sensitive() {
        assert_eq!(rule_scores("Drying Time", "Granule Size").detectability, 4);
        assert_eq!(rule_scores("Drying Time", "granule size").detectability, 5);
        assert_eq!(rule_scores("Drying Time", "Tablet Hardness").detectability, 4);
    }

    #[test]
    fn manual_mode_passes_through() {
        let sod = Sod::new(3, 8, 2);
        let out = score("Mixing Time", "Dissolution", ScoringMode::Manual, Some(&sod)).unwrap();
        assert_eq!(out, sod);
    }

    #[test]
    fn manual_mode_requires_input() {
        let err = score("Mixing Time", "Dissolution", ScoringMode::Manual, None).unwrap_err();
        assert!(matches!(
            err,
            EvalError::MissingManualInput { cpp, cqa }
                if cpp == "Mixing Time" && cqa == "Dissolution"
        ));
    }

    #[test]
    fn manual_mode_rejects_out_of_range() {
        let err = score(
            "Mixing Time",
            "Dissolution",
            ScoringMode::Manual,
            Some(&Sod::new(5, 11, 5)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EvalError::InvalidScore {
                factor: ScoreFactor::Occurrence,
                value: 11,
            }
        ));

        let err = score(
            "Mixing Time",
            "Dissolution",
            ScoringMode::Manual,
            Some(&Sod::new(0, 5, 5)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EvalError::InvalidScore {
                factor: ScoreFactor::Severity,
                value: 0,
            }
        ));
    }

    #[test]
    fn rule_based_ignores_manual() {
        let manual = Sod::new(1, 1, 1);
        let out = score(
            "Mixing Speed",
            "Content Uniformity",
            ScoringMode::RuleBased,
            Some(&manual),
        )
        .unwrap();
        assert_eq!(out, Sod::new(9, 7, 5));
    }

    #[test]
    fn default_is_midpoint() {
        assert_eq!(Sod::default(), Sod::new(5, 5, 5));
    }

    #[test]
    fn manual_scores_pair_granularity() {
        let mut scores = ManualScores::new();
        scores.insert("Mixing Time", "Dissolution", Sod::new(2, 3, 4));
        scores.insert("Mixing Time", "Granule Size", Sod::new(9, 9, 9));

        assert_eq!(scores.len(), 2);
        assert_eq!(
            scores.get("Mixing Time", "Dissolution"),
            Some(&Sod::new(2, 3, 4))
        );
        assert_eq!(scores.get("Drying Time", "Dissolution"), None);
    }
}
