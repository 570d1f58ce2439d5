//! Save/load of the session file.
//!
//! The on-disk format is a JSON array of records with the fields
//! `CPP`, `CQA`, `Severity`, `Occurrence`, `Detectability`, `RPN`, and
//! `Risk Level` (glyph-prefixed tier label). Files written by earlier
//! versions of the tool parse unchanged.
//!
//! No locking: concurrent save/load against the same path is last-writer-wins
//! and a torn read surfaces as [`StoreError::Parse`].

use std::fs;
use std::path::Path;

use qbdrisk_core::scoring::SCORE_RANGE;
use qbdrisk_core::{RiskRecord, RiskTable, compute_rpn};
use tracing::info;

use crate::StoreError;

/// Session filename used when the caller does not supply one.
pub const DEFAULT_SESSION_FILE: &str = "risk_session.json";

/// Serialize a risk table to `path`, overwriting any existing file.
pub fn save(path: &Path, table: &[RiskRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = table.len(), "saved session");
    Ok(())
}

/// Load a risk table from `path`.
///
/// Every record is re-validated: factors must be in range and the stored RPN
/// must equal the factor product. A file that parses but violates either
/// fails with [`StoreError::CorruptSession`].
pub fn load(path: &Path) -> Result<RiskTable, StoreError> {
    if !path.exists() {
        return Err(StoreError::SessionNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let table: RiskTable = serde_json::from_str(&content)?;
    for (i, record) in table.iter().enumerate() {
        validate_record(record).map_err(|detail| {
            StoreError::CorruptSession(format!(
                "record {i} ({:?}, {:?}): {detail}",
                record.cpp, record.cqa
            ))
        })?;
    }

    info!(path = %path.display(), records = table.len(), "loaded session");
    Ok(table)
}

fn validate_record(record: &RiskRecord) -> Result<(), String> {
    for (name, value) in [
        ("Severity", record.severity),
        ("Occurrence", record.occurrence),
        ("Detectability", record.detectability),
    ] {
        if !SCORE_RANGE.contains(&value) {
            return Err(format!("{name} {value} outside valid range 1..=10"));
        }
    }

    let expected = compute_rpn(record.severity, record.occurrence, record.detectability);
    if record.rpn != expected {
        return Err(format!(
            "RPN {} does not equal factor product {expected}",
            record.rpn
        ));
    }

    Ok(())
}
