//! Dataset loading and validation.
//!
//! Datasets are plain polars [`DataFrame`]s. Loading goes through a chain of
//! CSV strategies so that slightly malformed exports still open; validation
//! checks the structural invariant every analysis relies on.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result, ResultExt};
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Load a CSV file with a header row, trying progressively looser strategies.
///
/// Strings listed in [`AnalysisConfig::null_values`] are read as missing.
pub fn load_csv(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file not found: {}", path.display()),
        )));
    }

    info!("Loading dataset from: {}", path.display());

    // Strategy 1: Standard loading with quote handling
    match read_options(config, Some(b'"'))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return loaded(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: Without quote handling
    match read_options(config, None)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return loaded(df),
        Err(e) => debug!("Loading without quotes failed: {}", e),
    }

    // Strategy 3: Pre-clean content
    let content = std::fs::read_to_string(path).map_err(|e| {
        error!("Could not read file: {}", e);
        AnalysisError::Io(e)
    })?;
    let df = read_options(config, Some(b'"'))
        .into_reader_with_file_handle(Cursor::new(clean_csv_content(&content)))
        .finish()
        .context(format!("Failed to parse {}", path.display()))?;
    loaded(df)
}

/// Parse CSV text already held in memory.
pub fn read_csv_str(content: &str, config: &AnalysisConfig) -> Result<DataFrame> {
    let df = read_options(config, Some(b'"'))
        .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
        .finish()?;
    Ok(df)
}

fn loaded(df: DataFrame) -> Result<DataFrame> {
    info!("Dataset loaded successfully: {:?}", df.shape());
    validate_dataset(&df)?;
    Ok(df)
}

fn read_options(config: &AnalysisConfig, quote_char: Option<u8>) -> CsvReadOptions {
    let null_values = NullValues::AllColumns(
        config
            .null_values
            .iter()
            .map(|v| PlSmallStr::from(v.as_str()))
            .collect(),
    );

    CsvReadOptions::default()
        .with_infer_schema_length(config.infer_schema_length)
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(quote_char)
                .with_null_values(Some(null_values)),
        )
}

fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check that every column has exactly one value per row.
pub fn validate_dataset(df: &DataFrame) -> Result<()> {
    let height = df.height();
    for column in df.get_columns() {
        if column.len() != height {
            return Err(AnalysisError::InvalidDataset(format!(
                "column '{}' has {} values but the dataset has {} rows",
                column.name(),
                column.len(),
                height
            )));
        }
    }
    Ok(())
}

/// Per-row missingness of a column.
///
/// Nulls are missing in every column; in float columns `NaN` is a
/// missing-marker as well.
pub fn missing_mask(column: &Column) -> Result<Vec<bool>> {
    let series = column.as_materialized_series();
    let mut mask: Vec<bool> = series
        .is_null()
        .into_iter()
        .map(|v| v.unwrap_or(false))
        .collect();

    if series.dtype().is_float() {
        let nan = series.is_nan()?;
        for (missing, is_nan) in mask.iter_mut().zip(nan.into_iter()) {
            if is_nan.unwrap_or(false) {
                *missing = true;
            }
        }
    }

    Ok(mask)
}

/// Number of missing entries in a column.
pub fn missing_count(column: &Column) -> Result<usize> {
    if !column.dtype().is_float() {
        return Ok(column.null_count());
    }
    Ok(missing_mask(column)?.into_iter().filter(|m| *m).count())
}
