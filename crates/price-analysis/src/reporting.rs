//! Serializable analysis reports.
//!
//! An [`AnalysisReport`] collects the missing-value counts (and optionally
//! the correlation matrix) of one dataset. It backs both the `--json` stdout
//! output and the `--emit-report` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use price_analysis::reporting::{AnalysisReport, ReportWriter};
//!
//! let report = AnalysisReport::build("data/df_model.csv", &df, true)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let writer = ReportWriter::new(PathBuf::from("outputs"));
//! writer.write_report_to_file(&report, "df_model")?;
//! ```

use crate::correlation::CorrelationMatrix;
use crate::error::{AnalysisError, Result};
use crate::missing::{ColumnMissing, MissingnessReport};
use crate::utils::dtype_category_str;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Everything known about one analyzed dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// Dataset shape (rows, columns)
    pub shape: (usize, usize),
    /// Number of columns per type category
    pub type_counts: BTreeMap<String, usize>,
    /// Total missing cells across the dataset
    pub total_missing: usize,
    /// Share of all cells that are missing (0.0 - 100.0)
    pub missing_cell_percentage: f64,
    /// Columns with at least one missing value, in dataset order
    pub missing_columns: Vec<ColumnMissing>,
    /// Pearson correlation between numeric columns, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
}

impl AnalysisReport {
    pub fn build(input_file: &str, df: &DataFrame, include_correlation: bool) -> Result<Self> {
        let missing = MissingnessReport::from_dataframe(df)?;

        let mut type_counts = BTreeMap::new();
        for column in df.get_columns() {
            *type_counts
                .entry(dtype_category_str(column.dtype()).to_string())
                .or_insert(0) += 1;
        }

        let cells = df.height() * df.width();
        let total_missing = missing.total_missing();
        let missing_cell_percentage = if cells > 0 {
            total_missing as f64 / cells as f64 * 100.0
        } else {
            0.0
        };

        let correlation = if include_correlation {
            Some(CorrelationMatrix::from_dataframe(df)?)
        } else {
            None
        };

        Ok(Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.to_string(),
            shape: df.shape(),
            type_counts,
            total_missing,
            missing_cell_percentage,
            missing_columns: missing.non_zero().cloned().collect(),
            correlation,
        })
    }
}

/// Writes reports as pretty JSON files.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Write `<output_dir>/<report_base_name>_report.json`, creating the directory.
    pub fn write_report_to_file(
        &self,
        report: &AnalysisReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        if report_base_name.is_empty() {
            return Err(AnalysisError::ReportGenerationFailed(
                "report name must not be empty".to_string(),
            ));
        }

        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
