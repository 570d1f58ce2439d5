//! FMEA risk scoring core: process catalog, S/O/D scoring, RPN
//! classification, and risk table assembly.

pub mod catalog;
pub mod error;
pub mod risk;
pub mod scoring;
pub mod table;

pub use catalog::{ProcessDefinition, definition, process_names};
pub use error::EvalError;
pub use risk::{RiskTier, classify, compute_rpn};
pub use scoring::{ManualScores, ScoringMode, Sod};
pub use table::{RiskRecord, RiskTable};

use tracing::info;

/// Build the risk table for a named process.
///
/// Catalog lookup followed by [`table::build`] — the single entry point the
/// presentation layer calls per interaction. Stateless; nothing is cached
/// between invocations.
pub fn evaluate(
    process_name: &str,
    mode: ScoringMode,
    manual: Option<&ManualScores>,
) -> Result<RiskTable, EvalError> {
    let def = catalog::definition(process_name)?;
    let table = table::build(def, mode, manual)?;
    info!(
        process = process_name,
        mode = ?mode,
        pairs = table.len(),
        "built risk table"
    );
    Ok(table)
}
