//! Data models for the report toolkit.
//!
//! This module contains the core data structures used throughout
//! the application for representing report files, extracted summary
//! rows, and flow-stage ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Field value recorded when a section or numeric value is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Field value recorded for every section when a file cannot be read.
pub const READ_ERROR: &str = "Error";

/// The four report sections extracted in summary mode, in column order.
pub const SECTION_LABELS: [&str; 4] = [
    "report_tns",
    "report_wns",
    "report_worst_slack -max",
    "report_worst_slack -min",
];

/// A report file discovered under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// Absolute path on disk.
    pub absolute_path: PathBuf,
    /// Path relative to the base directory.
    pub relative_path: PathBuf,
}

impl ReportFile {
    /// Returns the relative path as a displayable string.
    pub fn relative_str(&self) -> String {
        self.relative_path.to_string_lossy().to_string()
    }
}

/// Flow stage of the implementation pipeline.
///
/// Used only as a sort key for summary rows: rows whose top-level
/// directory names an earlier stage sort first. Unknown directories
/// rank after all known stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStage {
    Synthesis,
    Cts,
    Placement,
    Routing,
    Signoff,
}

impl FlowStage {
    /// All stages in pipeline order.
    pub const ALL: [FlowStage; 5] = [
        FlowStage::Synthesis,
        FlowStage::Cts,
        FlowStage::Placement,
        FlowStage::Routing,
        FlowStage::Signoff,
    ];

    /// Parse a directory name into a flow stage.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "synthesis" => Some(FlowStage::Synthesis),
            "cts" => Some(FlowStage::Cts),
            "placement" => Some(FlowStage::Placement),
            "routing" => Some(FlowStage::Routing),
            "signoff" => Some(FlowStage::Signoff),
            _ => None,
        }
    }

    /// Sort rank of a relative path's top-level directory.
    ///
    /// Known stages rank 0..=4 in pipeline order; anything else ranks 5
    /// so unrecognized directories sort after every listed stage.
    pub fn rank_of(relative_path: &Path) -> usize {
        let first = relative_path.components().find_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        });

        first
            .and_then(Self::from_dir_name)
            .map(|stage| stage as usize)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowStage::Synthesis => write!(f, "synthesis"),
            FlowStage::Cts => write!(f, "cts"),
            FlowStage::Placement => write!(f, "placement"),
            FlowStage::Routing => write!(f, "routing"),
            FlowStage::Signoff => write!(f, "signoff"),
        }
    }
}

/// One extracted summary row: a file path and its four field values.
///
/// Each value is either a numeric literal recorded verbatim from the
/// report, [`NOT_AVAILABLE`] when the section or number is missing, or
/// [`READ_ERROR`] when the whole file could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Path relative to the base directory.
    pub path: String,
    /// Extracted values, one per entry of [`SECTION_LABELS`], in order.
    pub values: [String; 4],
}

impl SummaryRow {
    /// Creates a row with every field set to the same sentinel.
    pub fn all(path: String, sentinel: &str) -> Self {
        Self {
            path,
            values: std::array::from_fn(|_| sentinel.to_string()),
        }
    }

    /// Sort key: (flow-stage rank of the top-level directory, full path).
    pub fn sort_key(&self) -> (usize, String) {
        (FlowStage::rank_of(Path::new(&self.path)), self.path.clone())
    }
}

/// Sort summary rows by flow stage, ties broken by relative path.
pub fn sort_rows(rows: &mut [SummaryRow]) {
    rows.sort_by_key(|row| row.sort_key());
}
