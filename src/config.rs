//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.rptflow.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".rptflow.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Collect (concatenation) settings.
    #[serde(default)]
    pub collect: CollectConfig,

    /// Summary (extraction) settings.
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Convert (SVG rendering) settings.
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Settings for the collect subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Base reports directory to walk.
    #[serde(default = "default_reports_dir")]
    pub dir: PathBuf,

    /// Output file for the combined reports.
    #[serde(default = "default_collect_output")]
    pub output: PathBuf,

    /// File name suffixes to include.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            dir: default_reports_dir(),
            output: default_collect_output(),
            suffixes: default_suffixes(),
        }
    }
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("runs/myrun/reports")
}

fn default_collect_output() -> PathBuf {
    PathBuf::from("all_reports_summary.txt")
}

fn default_suffixes() -> Vec<String> {
    crate::scanner::REPORT_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Settings for the summary subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Base reports directory to walk.
    #[serde(default = "default_reports_dir")]
    pub dir: PathBuf,

    /// Output file for the summary table.
    #[serde(default = "default_summary_output")]
    pub output: PathBuf,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            dir: default_reports_dir(),
            output: default_summary_output(),
        }
    }
}

fn default_summary_output() -> PathBuf {
    PathBuf::from("slack_summary.txt")
}

/// Settings for the convert subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Render resolution in dots per inch.
    #[serde(default = "default_dpi")]
    pub dpi: f32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { dpi: default_dpi() }
    }
}

fn default_dpi() -> f32 {
    300.0
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        use crate::cli::Command;

        match &args.command {
            Command::Collect { dir, output } => {
                if let Some(dir) = dir {
                    self.collect.dir = dir.clone();
                }
                if let Some(output) = output {
                    self.collect.output = output.clone();
                }
            }
            Command::Summary { dir, output, .. } => {
                if let Some(dir) = dir {
                    self.summary.dir = dir.clone();
                }
                if let Some(output) = output {
                    self.summary.output = output.clone();
                }
            }
            Command::Convert { dpi, .. } => {
                if let Some(dpi) = dpi {
                    self.convert.dpi = *dpi;
                }
            }
            Command::InitConfig => {}
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command, OutputFormat};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.collect.dir, PathBuf::from("runs/myrun/reports"));
        assert_eq!(
            config.collect.output,
            PathBuf::from("all_reports_summary.txt")
        );
        assert_eq!(config.summary.output, PathBuf::from("slack_summary.txt"));
        assert_eq!(config.convert.dpi, 300.0);
        assert!(config.collect.suffixes.contains(&".rpt".to_string()));
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[collect]
dir = "runs/other/reports"
suffixes = [".rpt"]

[summary]
output = "custom_summary.txt"

[convert]
dpi = 150.0
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.collect.dir, PathBuf::from("runs/other/reports"));
        assert_eq!(config.collect.suffixes, vec![".rpt"]);
        assert_eq!(config.summary.output, PathBuf::from("custom_summary.txt"));
        assert_eq!(config.convert.dpi, 150.0);
        // Unset fields keep their defaults
        assert_eq!(config.summary.dir, PathBuf::from("runs/myrun/reports"));
    }

    #[test]
    fn test_merge_with_args_cli_precedence() {
        let mut config = Config::default();
        let args = Args {
            command: Command::Summary {
                dir: Some(PathBuf::from("runs/cli/reports")),
                output: None,
                format: OutputFormat::Table,
            },
            config: None,
            verbose: true,
            quiet: false,
        };

        config.merge_with_args(&args);
        assert_eq!(config.summary.dir, PathBuf::from("runs/cli/reports"));
        assert_eq!(config.summary.output, PathBuf::from("slack_summary.txt"));
        assert!(config.general.verbose);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[collect]"));
        assert!(toml_str.contains("[summary]"));
        assert!(toml_str.contains("[convert]"));
    }
}
