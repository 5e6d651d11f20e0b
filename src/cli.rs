//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RptFlow - EDA report collection and summary extraction
///
/// Collect flow reports into one file, extract timing numbers from
/// summary reports into a fixed-width table, or render an SVG report
/// figure to PNG.
///
/// Examples:
///   rptflow collect --dir runs/myrun/reports
///   rptflow summary --dir runs/myrun/reports --output slack_summary.txt
///   rptflow summary --format json
///   rptflow convert yosys-reports/inverter_synth.svg
///   rptflow init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    ///
    /// If not specified, looks for .rptflow.toml in the current directory
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Concatenate all .rpt/.summary.rpt files into one text file
    Collect {
        /// Base reports directory to walk
        #[arg(short, long, value_name = "DIR", env = "RPTFLOW_REPORTS_DIR")]
        dir: Option<PathBuf>,

        /// Output file path for the combined reports
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract timing numbers from .summary.rpt files into a table
    Summary {
        /// Base reports directory to walk
        #[arg(short, long, value_name = "DIR", env = "RPTFLOW_REPORTS_DIR")]
        dir: Option<PathBuf>,

        /// Output file path for the summary table
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (table, json)
        #[arg(long, default_value = "table", value_name = "FORMAT")]
        format: OutputFormat,
    },

    /// Render an SVG file to PNG
    Convert {
        /// Input SVG file
        #[arg(value_name = "INPUT.svg")]
        input: PathBuf,

        /// Output PNG file (defaults to the input path with a .png extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render resolution in dots per inch
        #[arg(long, value_name = "DPI")]
        dpi: Option<f32>,
    },

    /// Generate a default .rptflow.toml configuration file
    InitConfig,
}

/// Output format for the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text table (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match &self.command {
            Command::Convert { input, dpi, .. } => {
                if input.extension().and_then(|e| e.to_str()) != Some("svg") {
                    return Err(format!(
                        "Input file must have a .svg extension: {}",
                        input.display()
                    ));
                }
                if let Some(dpi) = dpi {
                    if !dpi.is_finite() || *dpi <= 0.0 {
                        return Err("DPI must be a positive number".to_string());
                    }
                }
            }
            Command::Collect { .. } | Command::Summary { .. } | Command::InitConfig => {}
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
