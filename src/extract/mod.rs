//! Numeric extraction from summary reports.
//!
//! Each `.summary.rpt` file contains labeled sections separated by
//! rules of `=` characters. For every section label we locate the
//! section body after its 75-character `=` separator line and record
//! the first numeric literal found in it.

use crate::models::{ReportFile, SummaryRow, NOT_AVAILABLE, READ_ERROR, SECTION_LABELS};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use tracing::{debug, warn};

/// Length of the `=` separator line that opens a section body.
///
/// Report files with a different run length intentionally fail to
/// match and yield "N/A", mirroring the upstream report format.
const SEPARATOR_LEN: usize = 75;

/// Pattern for a numeric literal: optional sign, optional decimal
/// point, at least one digit.
const NUMBER_PATTERN: &str = r"[-+]?\d*\.?\d+";

/// Extracts the four summary fields from report text.
pub struct SectionExtractor {
    /// One compiled pattern per entry of [`SECTION_LABELS`], in order.
    sections: Vec<Regex>,
    number: Regex,
}

impl SectionExtractor {
    /// Compile the section and numeric patterns.
    pub fn new() -> Result<Self> {
        let separator = "=".repeat(SEPARATOR_LEN);
        let mut sections = Vec::with_capacity(SECTION_LABELS.len());

        for label in SECTION_LABELS {
            // Label, lazy gap, a line of exactly 75 '=', then the body
            // captured up to the next '='-led line or end of input.
            let pattern = format!(
                r"(?s){}.*?\n{}\n(.*?)(?:\n=|\z)",
                regex::escape(label),
                separator
            );
            let re = Regex::new(&pattern)
                .with_context(|| format!("invalid section pattern for label '{label}'"))?;
            sections.push(re);
        }

        let number = Regex::new(NUMBER_PATTERN).context("invalid numeric pattern")?;

        Ok(Self { sections, number })
    }

    /// Extract the four field values from report text, in label order.
    ///
    /// A missing section or a section body without a numeric literal
    /// yields "N/A" for that field.
    pub fn extract_text(&self, text: &str) -> [String; 4] {
        std::array::from_fn(|i| {
            let body = self.sections[i]
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str());

            match body.and_then(|b| self.number.find(b)) {
                Some(m) => m.as_str().to_string(),
                None => NOT_AVAILABLE.to_string(),
            }
        })
    }

    /// Extract a summary row from a report file.
    ///
    /// An unreadable file still produces a row, with "Error" in every
    /// field.
    pub fn extract_file(&self, file: &ReportFile) -> SummaryRow {
        let path = file.relative_str();

        match fs::read_to_string(&file.absolute_path) {
            Ok(text) => {
                debug!("Extracting sections from {}", path);
                SummaryRow {
                    path,
                    values: self.extract_text(&text),
                }
            }
            Err(e) => {
                warn!("Failed to read {}: {}", file.absolute_path.display(), e);
                SummaryRow::all(path, READ_ERROR)
            }
        }
    }
}
