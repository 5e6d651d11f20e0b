//! RptFlow - EDA report collection and summary extraction
//!
//! A CLI tool for post-processing the report tree produced by an EDA
//! implementation flow: concatenate raw reports, extract timing
//! numbers from summary reports into a fixed-width table, and render
//! SVG report figures to PNG.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, I/O failure, render failure)

mod cli;
mod collect;
mod config;
mod extract;
mod models;
mod render;
mod report;
mod scanner;

use anyhow::{Context, Result};
use cli::{Args, Command, OutputFormat};
use config::Config;
use extract::SectionExtractor;
use models::SummaryRow;
use scanner::{ReportScanner, ScanConfig};
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle init-config early (no logging needed)
    if matches!(args.command, Command::InitConfig) {
        match handle_init_config() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging(&args);

    info!("RptFlow v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(()) => {}
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle init-config: generate a default .rptflow.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(config::CONFIG_FILE_NAME);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            config::CONFIG_FILE_NAME
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", config::CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", config::CONFIG_FILE_NAME);
    println!("   Edit it to customize directories, outputs, and DPI.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration and dispatch the selected subcommand.
fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    match args.command {
        Command::Collect { .. } => run_collect(&config),
        Command::Summary { format, .. } => run_summary(&config, format),
        Command::Convert {
            ref input,
            ref output,
            ..
        } => run_convert(&config, input, output.as_deref()),
        Command::InitConfig => unreachable!("handled before logging init"),
    }
}

/// Concatenate every matching report under the base directory.
fn run_collect(config: &Config) -> Result<()> {
    println!("📥 Collecting reports under: {}", config.collect.dir.display());

    let scan_config = ScanConfig {
        suffixes: config.collect.suffixes.clone(),
    };
    let scanner = ReportScanner::new(config.collect.dir.clone(), scan_config);
    let files = scanner.scan()?;

    if files.is_empty() {
        warn!("No report files found under {}", config.collect.dir.display());
    }

    let count = collect::collect_reports(&files, &config.collect.output)?;

    println!(
        "\n✅ All {} reports collected into {}",
        count,
        config.collect.output.display()
    );
    Ok(())
}

/// Extract timing numbers from every summary report into one table.
fn run_summary(config: &Config, format: OutputFormat) -> Result<()> {
    println!("🔍 Scanning summary reports under: {}", config.summary.dir.display());

    let scanner = ReportScanner::new(config.summary.dir.clone(), ScanConfig::summaries());
    let files = scanner.scan()?;

    let extractor = SectionExtractor::new()?;
    let mut rows: Vec<SummaryRow> = files.iter().map(|f| extractor.extract_file(f)).collect();
    models::sort_rows(&mut rows);

    // Diagnostic listing of the files that made it into the table
    println!("\nFiles included in the summary:");
    for row in &rows {
        println!("  📄 {}", row.path);
    }

    let output = match format {
        OutputFormat::Table => report::generate_table(&config.summary.dir, &rows),
        OutputFormat::Json => report::generate_json(&rows)?,
    };

    std::fs::write(&config.summary.output, &output).with_context(|| {
        format!(
            "Failed to write summary to {}",
            config.summary.output.display()
        )
    })?;

    println!(
        "\n✅ Summary of {} files written to {}",
        rows.len(),
        config.summary.output.display()
    );
    Ok(())
}

/// Render one SVG file to PNG.
fn run_convert(config: &Config, input: &Path, output: Option<&Path>) -> Result<()> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("png"),
    };

    println!(
        "🖼️  Rendering {} at {} DPI...",
        input.display(),
        config.convert.dpi
    );

    render::svg_to_png(input, &output, config.convert.dpi)?;

    println!("\n✅ PNG written to {}", output.display());
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", config::CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
