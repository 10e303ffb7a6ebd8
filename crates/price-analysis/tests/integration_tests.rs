//! Integration tests for missing-value analysis.
//!
//! These tests load CSV fixtures and run complete analyses against them.

use polars::prelude::*;
use pretty_assertions::assert_eq;
use price_analysis::{
    AnalysisConfig, AnalysisReport, ColorMode, CorrelationMatrix, HeatmapRenderer,
    MissingValueAnalysis, MissingnessMatrix, MissingnessReport, ReportWriter,
    SimpleMissingValuesAnalysis, SvgHeatmap, analyze, load_csv,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn plain_config() -> AnalysisConfig {
    AnalysisConfig::builder()
        .color_mode(ColorMode::Never)
        .build()
        .expect("valid config")
}

fn load_fixture(filename: &str) -> DataFrame {
    load_csv(fixtures_path().join(filename), &plain_config()).expect("Failed to read CSV fixture")
}

/// Run identification only and return the emitted text.
fn identify_text(df: &DataFrame) -> String {
    let analysis = SimpleMissingValuesAnalysis::bare(Vec::new());
    analysis.identify_missing_values(df).unwrap();
    String::from_utf8(analysis.into_inner()).unwrap()
}

/// Column names listed in an identification report.
fn reported_columns(text: &str) -> Vec<(String, usize)> {
    text.lines()
        .skip_while(|line| *line != "Missing Values Count by Column:")
        .skip(1)
        .take_while(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next().unwrap().to_string();
            let count = parts.next().unwrap().parse().unwrap();
            (name, count)
        })
        .collect()
}

struct CountingRenderer(Arc<AtomicUsize>);

impl HeatmapRenderer for CountingRenderer {
    fn render(
        &self,
        _matrix: &MissingnessMatrix,
        _title: &str,
        _out: &mut dyn Write,
    ) -> price_analysis::AnalysisResult<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Identification Scenarios
// ============================================================================

#[test]
fn test_no_missing_values_reports_nothing_but_still_visualizes() {
    let df = load_fixture("no_missing.csv");
    assert_eq!(df.shape(), (5, 3));

    let renders = Arc::new(AtomicUsize::new(0));
    let analysis = SimpleMissingValuesAnalysis::bare(Vec::new())
        .with_renderer(CountingRenderer(Arc::clone(&renders)));

    analyze(&analysis, &df).unwrap();

    let text = String::from_utf8(analysis.into_inner()).unwrap();
    assert!(reported_columns(&text).is_empty());
    assert!(text.contains("Missing Values Heatmap:"));
    assert_eq!(renders.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fully_missing_column_is_the_only_one_reported() {
    let df = load_fixture("one_column_missing.csv");

    let text = identify_text(&df);
    assert_eq!(reported_columns(&text), vec![("X".to_string(), 5)]);
}

#[test]
fn test_partial_missingness() {
    let df = load_fixture("partial_missing.csv");
    assert_eq!(df.height(), 10);

    let text = identify_text(&df);
    assert_eq!(reported_columns(&text), vec![("A".to_string(), 2)]);
}

#[test]
fn test_counts_match_true_missing_entries() {
    let df = load_fixture("housing_sample.csv");
    let report = MissingnessReport::from_dataframe(&df).unwrap();

    assert_eq!(report.count_for("Area"), Some(1));
    assert_eq!(report.count_for("Habitaciones"), Some(0));
    assert_eq!(report.count_for("Baños"), Some(1));
    assert_eq!(report.count_for("Barrio"), Some(1));
    assert_eq!(report.count_for("Precio"), Some(1));

    let listed: Vec<String> = reported_columns(&identify_text(&df))
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(listed, vec!["Area", "Baños", "Barrio", "Precio"]);
}

#[test]
fn test_nan_counts_as_missing() {
    let df = df![
        "Area" => [Some(1.0), Some(f64::NAN), None],
        "Precio" => [Some(1.0), Some(2.0), Some(3.0)],
    ]
    .unwrap();

    assert_eq!(reported_columns(&identify_text(&df)), vec![("Area".to_string(), 2)]);
}

// ============================================================================
// Boundary Cases
// ============================================================================

#[test]
fn test_zero_rows_reports_zero_for_every_column() {
    let df = load_fixture("header_only.csv");
    assert_eq!(df.height(), 0);

    let report = MissingnessReport::from_dataframe(&df).unwrap();
    assert_eq!(report.columns.len(), 3);
    assert!(report.columns.iter().all(|c| c.missing_count == 0));

    let analysis = SimpleMissingValuesAnalysis::with_writer(Vec::new(), &plain_config());
    analyze(&analysis, &df).unwrap();
    let text = String::from_utf8(analysis.into_inner()).unwrap();
    assert!(reported_columns(&text).is_empty());
    assert!(text.contains("(empty dataset, nothing to render)"));
}

#[test]
fn test_zero_columns_reports_empty_result() {
    let df = DataFrame::empty();

    let report = MissingnessReport::from_dataframe(&df).unwrap();
    assert!(report.columns.is_empty());

    let analysis = SimpleMissingValuesAnalysis::with_writer(Vec::new(), &plain_config());
    analyze(&analysis, &df).unwrap();
    let text = String::from_utf8(analysis.into_inner()).unwrap();
    assert_eq!(
        text,
        "\nMissing Values Count by Column:\n\
         \nMissing Values Heatmap:\n\
         (empty dataset, nothing to render)\n"
    );
}

// ============================================================================
// Orchestration
// ============================================================================

#[test]
fn test_repeated_analysis_is_identical() {
    let df = load_fixture("housing_sample.csv");
    let analysis = SimpleMissingValuesAnalysis::with_writer(Vec::new(), &plain_config());

    analyze(&analysis, &df).unwrap();
    analyze(&analysis, &df).unwrap();

    let text = String::from_utf8(analysis.into_inner()).unwrap();
    let (first, second) = text.split_at(text.len() / 2);
    assert_eq!(first, second);
    assert_eq!(
        MissingnessReport::from_dataframe(&df).unwrap(),
        MissingnessReport::from_dataframe(&df).unwrap()
    );
}

#[test]
fn test_identification_precedes_visualization_in_output() {
    let df = load_fixture("partial_missing.csv");
    let analysis = SimpleMissingValuesAnalysis::with_writer(Vec::new(), &plain_config());

    analyze(&analysis, &df).unwrap();
    let text = String::from_utf8(analysis.into_inner()).unwrap();

    let identify_at = text.find("Missing Values Count by Column:").unwrap();
    let visualize_at = text.find("Missing Values Heatmap:").unwrap();
    assert!(identify_at < visualize_at);
    assert_eq!(text.matches("Missing Values Count by Column:").count(), 1);
    assert_eq!(text.matches("Missing Values Heatmap:").count(), 1);
}

#[test]
fn test_analysis_leaves_dataset_untouched() {
    let df = load_fixture("housing_sample.csv");
    let before = df.clone();

    let analysis = SimpleMissingValuesAnalysis::with_writer(Vec::new(), &plain_config());
    analyze(&analysis, &df).unwrap();

    assert!(df.equals_missing(&before));
}

// ============================================================================
// Rendering, Correlation and Reports
// ============================================================================

#[test]
fn test_svg_heatmap_alongside_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let svg_path = dir.path().join("missing.svg");
    let df = load_fixture("housing_sample.csv");

    let analysis = SimpleMissingValuesAnalysis::with_writer(Vec::new(), &plain_config())
        .with_renderer(SvgHeatmap::new(&svg_path, (600, 400)));
    analyze(&analysis, &df).unwrap();

    let text = String::from_utf8(analysis.into_inner()).unwrap();
    assert!(text.contains("[3] Barrio"));
    assert!(text.contains("Heatmap saved:"));
    assert!(std::fs::read_to_string(&svg_path).unwrap().contains("<svg"));
}

#[test]
fn test_correlation_on_housing_sample() {
    let df = load_fixture("housing_sample.csv");
    let corr = CorrelationMatrix::from_dataframe(&df).unwrap();

    assert_eq!(corr.columns, vec!["Area", "Habitaciones", "Baños", "Precio"]);
    let area_price = corr.get("Area", "Precio").unwrap();
    assert!(area_price > 0.9, "area and price should move together, got {area_price}");
}

#[test]
fn test_report_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let df = load_fixture("housing_sample.csv");

    let report = AnalysisReport::build("housing_sample.csv", &df, true).unwrap();
    let path = ReportWriter::new(dir.path().to_path_buf())
        .write_report_to_file(&report, "housing_sample")
        .unwrap();

    let parsed: AnalysisReport =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(parsed.total_missing, 4);
    assert_eq!(parsed.missing_columns.len(), 4);
    assert!(parsed.correlation.is_some());
}

#[test]
fn test_missing_fixture_is_an_io_error() {
    let err = load_csv(fixtures_path().join("nope.csv"), &plain_config()).unwrap_err();
    assert_eq!(err.error_code(), "IO_ERROR");
}
