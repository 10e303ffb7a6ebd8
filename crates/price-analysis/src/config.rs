//! Configuration types for dataset analysis.
//!
//! This module provides configuration options using the builder pattern
//! for loading datasets and rendering missing-value heatmaps.

use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Null markers recognised when reading CSV files.
///
/// Mirrors the common spellings tabular tools treat as "no value".
pub const DEFAULT_NULL_VALUES: [&str; 9] = [
    "", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A",
];

/// When the terminal heatmap should use ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorMode {
    /// Color only when the output sink is a terminal
    #[default]
    Auto,
    /// Always emit color escape codes
    Always,
    /// Plain glyphs only
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current stdout.
    pub fn enabled(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    /// Resolve the mode for a sink that is (or is not) a terminal.
    pub fn resolve(self, sink_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => sink_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Configuration for dataset loading and missing-value visualization.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use price_analysis::config::{AnalysisConfig, ColorMode};
///
/// let config = AnalysisConfig::builder()
///     .max_terminal_rows(25)
///     .color_mode(ColorMode::Never)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Title drawn above every heatmap.
    /// Default: "Missing Values Heatmap"
    pub heatmap_title: String,

    /// Maximum number of rows drawn by the terminal heatmap. Taller
    /// datasets are bucketed down to this many rows.
    /// Default: 40
    pub max_terminal_rows: usize,

    /// Color handling for the terminal heatmap.
    /// Default: Auto
    pub color_mode: ColorMode,

    /// SVG canvas size in pixels (width, height).
    /// Default: (1200, 800)
    pub svg_size: (u32, u32),

    /// Strings read as missing when loading CSV files.
    /// Default: [`DEFAULT_NULL_VALUES`]
    pub null_values: Vec<String>,

    /// Number of rows used for CSV schema inference. `None` scans the whole file.
    /// Default: Some(100)
    pub infer_schema_length: Option<usize>,

    /// Output directory for JSON reports.
    /// Default: "outputs"
    pub output_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            heatmap_title: "Missing Values Heatmap".to_string(),
            max_terminal_rows: 40,
            color_mode: ColorMode::default(),
            svg_size: (1200, 800),
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
            infer_schema_length: Some(100),
            output_dir: PathBuf::from("outputs"),
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_terminal_rows == 0 {
            return Err(ConfigValidationError::InvalidMaxRows(self.max_terminal_rows));
        }

        let (width, height) = self.svg_size;
        if width == 0 || height == 0 {
            return Err(ConfigValidationError::InvalidCanvasSize { width, height });
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidInferSchemaLength);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid terminal row limit: {0} (must be at least 1)")]
    InvalidMaxRows(usize),

    #[error("Invalid SVG canvas size: {width}x{height} (both sides must be positive)")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("Invalid schema inference length: 0 (use None to scan the whole file)")]
    InvalidInferSchemaLength,
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    heatmap_title: Option<String>,
    max_terminal_rows: Option<usize>,
    color_mode: Option<ColorMode>,
    svg_size: Option<(u32, u32)>,
    null_values: Option<Vec<String>>,
    infer_schema_length: Option<Option<usize>>,
    output_dir: Option<PathBuf>,
}

impl AnalysisConfigBuilder {
    /// Set the heatmap title.
    pub fn heatmap_title(mut self, title: impl Into<String>) -> Self {
        self.heatmap_title = Some(title.into());
        self
    }

    /// Set the maximum number of rows drawn in the terminal.
    pub fn max_terminal_rows(mut self, rows: usize) -> Self {
        self.max_terminal_rows = Some(rows);
        self
    }

    /// Set the terminal color mode.
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set the SVG canvas size in pixels.
    pub fn svg_size(mut self, width: u32, height: u32) -> Self {
        self.svg_size = Some((width, height));
        self
    }

    /// Replace the CSV null markers.
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set how many rows are scanned for CSV schema inference.
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Set the output directory for reports.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            heatmap_title: self.heatmap_title.unwrap_or(defaults.heatmap_title),
            max_terminal_rows: self.max_terminal_rows.unwrap_or(defaults.max_terminal_rows),
            color_mode: self.color_mode.unwrap_or_default(),
            svg_size: self.svg_size.unwrap_or(defaults.svg_size),
            null_values: self.null_values.unwrap_or(defaults.null_values),
            infer_schema_length: self
                .infer_schema_length
                .unwrap_or(defaults.infer_schema_length),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
        };

        config.validate()?;
        Ok(config)
    }
}
