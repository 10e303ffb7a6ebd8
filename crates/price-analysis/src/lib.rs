//! Exploratory Analysis for Real-Estate Price Datasets
//!
//! A small analysis library built with Rust and Polars for inspecting a
//! housing dataset before a price model is trained on it.
//!
//! # Overview
//!
//! - **Missing-Value Analysis**: a two-step analysis (identify, then
//!   visualize) behind the [`MissingValueAnalysis`] trait, run by [`analyze`]
//! - **Heatmaps**: missingness grids drawn in the terminal or saved as SVG
//! - **Correlation**: Pearson correlation between numeric columns
//! - **Reports**: JSON reports for scripting and archiving
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use price_analysis::{analyze, AnalysisConfig, SimpleMissingValuesAnalysis, SvgHeatmap};
//!
//! let config = AnalysisConfig::default();
//! let df = price_analysis::dataset::load_csv("data/df_model.csv", &config)?;
//!
//! let analysis = SimpleMissingValuesAnalysis::from_config(&config)
//!     .with_renderer(SvgHeatmap::new("missing.svg", config.svg_size));
//! analyze(&analysis, &df)?;
//! ```
//!
//! # Custom analyses
//!
//! Any type implementing both steps of [`MissingValueAnalysis`] can be passed
//! to [`analyze`]; the order of the steps is fixed there, not by the
//! implementation.
//!
//! ```rust,ignore
//! use price_analysis::{AnalysisResult, MissingValueAnalysis, MissingnessReport};
//! use polars::prelude::DataFrame;
//!
//! struct LogOnly;
//!
//! impl MissingValueAnalysis for LogOnly {
//!     fn identify_missing_values(&self, df: &DataFrame) -> AnalysisResult<()> {
//!         let report = MissingnessReport::from_dataframe(df)?;
//!         tracing::info!(total = report.total_missing(), "missing values");
//!         Ok(())
//!     }
//!
//!     fn visualize_missing_values(&self, _df: &DataFrame) -> AnalysisResult<()> {
//!         Ok(())
//!     }
//! }
//! ```

pub mod config;
pub mod correlation;
pub mod dataset;
pub mod error;
pub mod missing;
pub mod render;
pub mod reporting;
pub mod utils;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ColorMode, ConfigValidationError};
pub use correlation::CorrelationMatrix;
pub use dataset::{load_csv, validate_dataset};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use missing::{
    ColumnMissing, MissingValueAnalysis, MissingnessMatrix, MissingnessReport,
    SimpleMissingValuesAnalysis, analyze,
};
pub use render::{HeatmapRenderer, SvgHeatmap, TerminalHeatmap};
pub use reporting::{AnalysisReport, ReportWriter};
pub use utils::{DtypeCategory, dtype_category_str, get_dtype_category, is_numeric_dtype};
