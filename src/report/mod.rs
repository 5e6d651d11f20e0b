//! Summary report generation.
//!
//! This module renders extracted summary rows either as a fixed-width
//! text table (the stable on-disk format) or as pretty-printed JSON.

use crate::models::{SummaryRow, SECTION_LABELS};
use anyhow::{Context, Result};
use std::path::Path;

/// Width of the left-justified path column.
const PATH_COL_WIDTH: usize = 50;

/// Width of each left-justified section column.
const SECTION_COL_WIDTH: usize = 25;

/// Total table width: path column plus the four section columns.
const TABLE_WIDTH: usize = PATH_COL_WIDTH + SECTION_LABELS.len() * SECTION_COL_WIDTH;

/// Generate the complete fixed-width summary table.
///
/// The layout is a stable contract: a header line naming the base
/// directory, a blank line, the column header row, a dash rule of the
/// table's full width, then one row per file.
pub fn generate_table(base_dir: &Path, rows: &[SummaryRow]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary of reports under: {}\n\n", base_dir.display()));
    output.push_str(&generate_header_row());
    output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

    for row in rows {
        output.push_str(&generate_row(row));
    }

    output
}

/// Generate the column header row.
fn generate_header_row() -> String {
    let mut header = format!("{:<PATH_COL_WIDTH$}", "File");
    for label in SECTION_LABELS {
        header.push_str(&format!("{label:<SECTION_COL_WIDTH$}"));
    }
    header.push('\n');
    header
}

/// Generate one data row, every cell left-justified to its column.
fn generate_row(row: &SummaryRow) -> String {
    let mut line = format!("{:<PATH_COL_WIDTH$}", row.path);
    for value in &row.values {
        line.push_str(&format!("{value:<SECTION_COL_WIDTH$}"));
    }
    line.push('\n');
    line
}

/// Generate a JSON rendition of the summary rows.
pub fn generate_json(rows: &[SummaryRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("failed to serialize summary rows")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_AVAILABLE;
    use std::path::PathBuf;

    fn sample_row() -> SummaryRow {
        SummaryRow {
            path: "synthesis/top.summary.rpt".to_string(),
            values: [
                "-3.25".to_string(),
                "-0.17".to_string(),
                "1.75".to_string(),
                NOT_AVAILABLE.to_string(),
            ],
        }
    }

    #[test]
    fn test_table_structure() {
        let table = generate_table(&PathBuf::from("runs/myrun/reports"), &[sample_row()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Summary of reports under: runs/myrun/reports");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("File"));
        assert_eq!(lines[3], "-".repeat(150));
        assert!(lines[4].starts_with("synthesis/top.summary.rpt"));
    }

    #[test]
    fn test_header_column_offsets() {
        let header = generate_header_row();
        assert_eq!(&header[..4], "File");
        assert_eq!(&header[50..50 + "report_tns".len()], "report_tns");
        assert_eq!(&header[75..75 + "report_wns".len()], "report_wns");
        assert_eq!(
            &header[100..100 + "report_worst_slack -max".len()],
            "report_worst_slack -max"
        );
        assert_eq!(
            &header[125..125 + "report_worst_slack -min".len()],
            "report_worst_slack -min"
        );
        assert_eq!(header.len(), 150 + 1);
    }

    #[test]
    fn test_row_cell_justification() {
        let line = generate_row(&sample_row());
        assert_eq!(line.len(), 150 + 1);
        assert_eq!(&line[50..55], "-3.25");
        assert_eq!(&line[75..80], "-0.17");
        assert_eq!(&line[100..104], "1.75");
        assert_eq!(&line[125..128], "N/A");
        assert!(line.ends_with(&format!("{:<25}\n", "N/A")));
    }

    #[test]
    fn test_long_path_is_not_truncated() {
        let mut row = sample_row();
        row.path = format!("signoff/{}.summary.rpt", "x".repeat(60));
        let line = generate_row(&row);
        assert!(line.contains(&row.path));
    }

    #[test]
    fn test_json_output() {
        let json = generate_json(&[sample_row()]).unwrap();
        assert!(json.contains("\"path\": \"synthesis/top.summary.rpt\""));
        assert!(json.contains("\"-3.25\""));
        assert!(json.contains("\"N/A\""));
    }
}
