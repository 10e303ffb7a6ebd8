use crate::dataset::{missing_count, validate_dataset};
use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Missing-value count for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing_count: usize,
    /// Share of rows missing, 0.0 - 100.0. Zero for an empty dataset.
    pub missing_percentage: f64,
}

/// Per-column missing counts for one dataset, in column order.
///
/// Every column is present, including those with nothing missing; use
/// [`MissingnessReport::non_zero`] for the columns worth reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingnessReport {
    pub row_count: usize,
    pub columns: Vec<ColumnMissing>,
}

impl MissingnessReport {
    /// Count missing entries in every column of `df`.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        validate_dataset(df)?;

        let row_count = df.height();
        let columns = df
            .get_columns()
            .iter()
            .map(|column| {
                let missing = missing_count(column)?;
                let missing_percentage = if row_count > 0 {
                    missing as f64 / row_count as f64 * 100.0
                } else {
                    0.0
                };
                Ok(ColumnMissing {
                    column: column.name().to_string(),
                    missing_count: missing,
                    missing_percentage,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { row_count, columns })
    }

    /// Columns with at least one missing entry.
    pub fn non_zero(&self) -> impl Iterator<Item = &ColumnMissing> {
        self.columns.iter().filter(|c| c.missing_count > 0)
    }

    /// Missing count for a named column, if the column exists.
    pub fn count_for(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.missing_count)
    }

    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count).sum()
    }

    pub fn has_missing(&self) -> bool {
        self.non_zero().next().is_some()
    }
}

/// One line per affected column, names padded to the widest one.
impl fmt::Display for MissingnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .non_zero()
            .map(|c| c.column.chars().count())
            .max()
            .unwrap_or(0);

        for entry in self.non_zero() {
            writeln!(f, "{:<width$}    {}", entry.column, entry.missing_count)?;
        }
        Ok(())
    }
}
