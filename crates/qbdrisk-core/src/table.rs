//! Risk table assembly: one record per CPP×CQA pair.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProcessDefinition;
use crate::error::EvalError;
use crate::risk::{self, RiskTier};
use crate::scoring::{self, ManualScores, ScoringMode, Sod};

/// One row of an FMEA risk table.
///
/// Field names in the serialized form match the session file format
/// ("CPP", "CQA", ..., "Risk Level").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    #[serde(rename = "CPP")]
    pub cpp: String,
    #[serde(rename = "CQA")]
    pub cqa: String,
    #[serde(rename = "Severity")]
    pub severity: u8,
    #[serde(rename = "Occurrence")]
    pub occurrence: u8,
    #[serde(rename = "Detectability")]
    pub detectability: u8,
    #[serde(rename = "RPN")]
    pub rpn: u16,
    #[serde(rename = "Risk Level")]
    pub tier: RiskTier,
}

/// An ordered FMEA risk table, CPP-major / CQA-minor in catalog order.
pub type RiskTable = Vec<RiskRecord>;

/// Build the full risk table for a process definition.
///
/// All-or-nothing: the first scoring failure aborts the build and no
/// partial table is returned.
pub fn build(
    definition: &ProcessDefinition,
    mode: ScoringMode,
    manual: Option<&ManualScores>,
) -> Result<RiskTable, EvalError> {
    let mut table = Vec::with_capacity(definition.cpps.len() * definition.cqas.len());

    for cpp in definition.cpps {
        for cqa in definition.cqas {
            let manual_sod = manual.and_then(|m| m.get(cpp, cqa));
            let Sod {
                severity,
                occurrence,
                detectability,
            } = scoring::score(cpp, cqa, mode, manual_sod)?;

            let rpn = risk::compute_rpn(severity, occurrence, detectability);
            let tier = risk::classify(rpn);
            debug!(cpp, cqa, rpn, tier = tier.as_str(), "scored pair");

            table.push(RiskRecord {
                cpp: cpp.to_string(),
                cqa: cqa.to_string(),
                severity,
                occurrence,
                detectability,
                rpn,
                tier,
            });
        }
    }

    Ok(table)
}
