//! CLI entry point for dataset analysis.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use polars::prelude::DataFrame;
use price_analysis::{
    AnalysisConfig, AnalysisReport, ColorMode, CorrelationMatrix, ReportWriter,
    SimpleMissingValuesAnalysis, SvgHeatmap, analyze, load_csv,
};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// CLI-compatible color mode enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color; use `##` / `..` glyphs
    Never,
}

impl From<CliColorMode> for ColorMode {
    fn from(cli: CliColorMode) -> Self {
        match cli {
            CliColorMode::Auto => ColorMode::Auto,
            CliColorMode::Always => ColorMode::Always,
            CliColorMode::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author = "Tech-Camp Oriente",
    version,
    about = "Missing-value and correlation analysis for housing price datasets",
    long_about = "Reports missing values per column and draws a missingness heatmap.\n\n\
                  EXAMPLES:\n  \
                  # Report and terminal heatmap\n  \
                  price-analysis -i data/df_model.csv\n\n  \
                  # Also save the heatmap as SVG\n  \
                  price-analysis -i data/df_model.csv --heatmap outputs/missing.svg\n\n  \
                  # Machine-readable output\n  \
                  price-analysis -i data/df_model.csv --json --correlation"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Save the missing-value heatmap as an SVG file
    #[arg(long)]
    heatmap: Option<PathBuf>,

    /// Maximum number of rows in the terminal heatmap
    #[arg(long, default_value = "40")]
    max_rows: usize,

    /// Terminal heatmap coloring
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColorMode,

    /// Print the correlation table between numeric columns
    #[arg(long)]
    correlation: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the JSON report to stdout instead of the text analysis
    ///
    /// Disables all logs and the heatmap; only the report is written.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = AnalysisConfig::builder()
        .max_terminal_rows(args.max_rows)
        .color_mode(args.color.into())
        .output_dir(&args.output)
        .build()?;

    let data = load_csv(&args.input, &config)
        .with_context(|| format!("Failed to load {}", args.input))?;

    let report = if args.json || args.emit_report {
        Some(AnalysisReport::build(&args.input, &data, args.correlation)?)
    } else {
        None
    };

    if args.json {
        if let Some(ref report) = report {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    } else {
        run_analysis(&args, &config, &data)?;
    }

    if let Some(report) = report.filter(|_| args.emit_report) {
        let writer = ReportWriter::new(config.output_dir.clone());
        let path = writer.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Run the missing-value analysis, then the optional correlation section.
fn run_analysis(args: &Args, config: &AnalysisConfig, data: &DataFrame) -> Result<()> {
    let mut analysis = SimpleMissingValuesAnalysis::from_config(config);
    if let Some(ref path) = args.heatmap {
        analysis = analysis.with_renderer(SvgHeatmap::new(path, config.svg_size));
    }

    if let Err(e) = analyze(&analysis, data) {
        error!("Analysis failed: {}", e);
        return Err(e.into());
    }

    if args.correlation {
        print_correlation(data)?;
    }

    Ok(())
}

/// Print the correlation section.
///
/// Uses `println!` intentionally: this is the requested output, not logging.
fn print_correlation(data: &DataFrame) -> Result<()> {
    let matrix = CorrelationMatrix::from_dataframe(data)?;

    println!("\nCorrelation Between Numeric Columns:");
    if matrix.is_empty() {
        println!("(no numeric columns)");
    } else {
        print!("{}", matrix);
    }
    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
