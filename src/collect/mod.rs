//! Report concatenation.
//!
//! Collects every report file under the base directory into a single
//! output file, each body preceded by a header block naming its path.

use crate::models::ReportFile;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Width of the `=` rules framing each file header.
const HEADER_RULE_LEN: usize = 80;

/// Write all report files into one concatenated output file.
///
/// Returns the number of files written. A file that cannot be read is
/// represented by an inline error line instead of its content; the run
/// never aborts on a per-file failure.
pub fn collect_reports(files: &[ReportFile], output: &Path) -> Result<usize> {
    let out = File::create(output)
        .with_context(|| format!("failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(out);

    for file in files {
        write_report(&mut writer, file)
            .with_context(|| format!("failed to write output file: {}", output.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write output file: {}", output.display()))?;

    Ok(files.len())
}

/// Append one report's header block and body to the output stream.
fn write_report<W: Write>(writer: &mut W, file: &ReportFile) -> Result<()> {
    let rule = "=".repeat(HEADER_RULE_LEN);
    let path = file.absolute_path.display();

    writeln!(writer)?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "FILE: {path}")?;
    writeln!(writer, "{rule}")?;

    match fs::read_to_string(&file.absolute_path) {
        Ok(content) => {
            debug!("Collected {}", path);
            writer.write_all(content.as_bytes())?;
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path, e);
            writeln!(writer, "[Error reading {path}: {e}]")?;
        }
    }

    Ok(())
}
