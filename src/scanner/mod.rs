//! File scanner for discovering report files.
//!
//! This module provides a scanner that walks a report tree and
//! collects files matching the configured name suffixes.

use crate::models::ReportFile;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Suffixes matched in collect mode (`.summary.rpt` also ends in `.rpt`).
pub const REPORT_SUFFIXES: [&str; 2] = [".rpt", ".summary.rpt"];

/// Suffix matched in summary (extraction) mode.
pub const SUMMARY_SUFFIX: &str = ".summary.rpt";

/// Configuration for report scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File name suffixes to include (e.g., [".rpt", ".summary.rpt"]).
    pub suffixes: Vec<String>,
}

impl ScanConfig {
    /// Config matching every report file (collect mode).
    pub fn reports() -> Self {
        Self {
            suffixes: REPORT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Config matching only summary reports (extraction mode).
    pub fn summaries() -> Self {
        Self {
            suffixes: vec![SUMMARY_SUFFIX.to_string()],
        }
    }
}

/// Scanner for report files under a base directory.
pub struct ReportScanner {
    base_dir: PathBuf,
    config: ScanConfig,
}

impl ReportScanner {
    /// Create a new scanner rooted at `base_dir`.
    pub fn new(base_dir: PathBuf, config: ScanConfig) -> Self {
        Self { base_dir, config }
    }

    /// Walk the tree and collect all matching report files.
    ///
    /// Entries are visited in sorted-by-name order within each directory.
    /// Unreadable directory entries are logged and skipped; only a missing
    /// or non-directory base path is an error.
    pub fn scan(&self) -> Result<Vec<ReportFile>> {
        if !self.base_dir.is_dir() {
            anyhow::bail!(
                "base directory does not exist or is not a directory: {}",
                self.base_dir.display()
            );
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(&self.base_dir).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.matches(&name) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.base_dir)
                .with_context(|| {
                    format!("path escaped base directory: {}", entry.path().display())
                })?
                .to_path_buf();

            files.push(ReportFile {
                absolute_path: entry.path().to_path_buf(),
                relative_path: relative,
            });
        }

        debug!(
            "Found {} report files under {}",
            files.len(),
            self.base_dir.display()
        );
        Ok(files)
    }

    /// Check whether a file name matches any configured suffix.
    fn matches(&self, name: &str) -> bool {
        self.config.suffixes.iter().any(|s| name.ends_with(s))
    }
}
