//! Pearson correlation between the numeric columns of a dataset.
//!
//! Pairs are compared on rows where both values are present, so a gap in
//! one column does not discard the rest of the dataset.

use crate::dataset::validate_dataset;
use crate::error::Result;
use crate::utils::is_numeric_dtype;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Symmetric correlation matrix over numeric columns, in dataset order.
///
/// `None` marks a pair with fewer than two shared observations or a
/// constant side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        validate_dataset(df)?;

        let mut columns = Vec::new();
        let mut data: Vec<Vec<Option<f64>>> = Vec::new();
        for column in df.get_columns() {
            if !is_numeric_dtype(column.dtype()) {
                continue;
            }
            let values = column.as_materialized_series().cast(&DataType::Float64)?;
            let values = values
                .f64()?
                .into_iter()
                .map(|v| v.filter(|x| !x.is_nan()))
                .collect();
            columns.push(column.name().to_string());
            data.push(values);
        }

        debug!(numeric_columns = columns.len(), "Computing correlation matrix");

        let n = columns.len();
        let mut values = vec![vec![None; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = pearson(&data[i], &data[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self { columns, values })
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Aligned table with two decimals; undefined pairs print as `-`.
impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .columns
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        write!(f, "{:<width$}", "")?;
        for name in &self.columns {
            write!(f, " {:>width$}", name)?;
        }
        writeln!(f)?;

        for (name, row) in self.columns.iter().zip(&self.values) {
            write!(f, "{:<width$}", name)?;
            for value in row {
                match value {
                    Some(v) => write!(f, " {:>width$.2}", v)?,
                    None => write!(f, " {:>width$}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
