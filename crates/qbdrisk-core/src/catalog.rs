//! Built-in process catalog mapping each manufacturing process to its
//! Critical Process Parameters and Critical Quality Attributes.
//!
//! The catalog is fixed data embedded at compile time — there is no external
//! source to refresh from. Extend by adding a [`ProcessDefinition`] entry to
//! [`PROCESSES`]; the CPP/CQA lists follow ICH Q8(R2)/Q9 convention for each
//! granulation route.

use crate::error::EvalError;

/// A manufacturing process and its CPP/CQA lists.
///
/// Lists are ordered and duplicate-free; the cross product CPP × CQA in this
/// order defines the row order of every risk table built for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessDefinition {
    pub name: &'static str,
    pub cpps: &'static [&'static str],
    pub cqas: &'static [&'static str],
}

/// The built-in processes, in presentation order.
pub const PROCESSES: &[ProcessDefinition] = &[
    ProcessDefinition {
        name: "Wet Granulation",
        cpps: &[
            "Binder Addition Rate",
            "Mixing Time",
            "Granulation Time",
            "Inlet Temperature",
            "Impeller Speed",
            "Drying Time",
        ],
        cqas: &[
            "Granule Size",
            "Moisture Content",
            "Tablet Hardness",
            "Content Uniformity",
            "Dissolution",
        ],
    },
    ProcessDefinition {
        name: "Dry Granulation (Roller Compaction)",
        cpps: &[
            "Roll Pressure",
            "Feed Screw Speed",
            "Roll Speed",
            "Milling Speed",
        ],
        cqas: &[
            "Ribbon Density",
            "Granule Size",
            "Tablet Friability",
            "Tablet Hardness",
            "Content Uniformity",
        ],
    },
    ProcessDefinition {
        name: "Direct Compression",
        cpps: &["Blending Time", "Lubrication Time", "Mixing Speed"],
        cqas: &[
            "Content Uniformity",
            "Tablet Weight Variation",
            "Dissolution",
            "Tablet Hardness",
        ],
    },
];

/// Names of all catalog processes, in catalog order.
pub fn process_names() -> Vec<&'static str> {
    PROCESSES.iter().map(|p| p.name).collect()
}

/// Look up a process definition by exact name.
pub fn definition(name: &str) -> Result<&'static ProcessDefinition, EvalError> {
    PROCESSES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| EvalError::UnknownProcess(name.to_string()))
}
