use thiserror::Error;

use crate::scoring::ScoreFactor;

/// Errors from catalog lookup and table evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown process: {0:?}")]
    UnknownProcess(String),

    #[error("{factor} score {value} outside valid range 1..=10")]
    InvalidScore { factor: ScoreFactor, value: u8 },

    #[error("no manual scores supplied for pair ({cpp:?}, {cqa:?})")]
    MissingManualInput { cpp: String, cqa: String },
}
