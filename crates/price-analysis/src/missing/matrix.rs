use crate::dataset::{missing_mask, validate_dataset};
use crate::error::Result;
use polars::prelude::*;

/// Binary missingness grid of a dataset: rows x columns, `true` = missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingnessMatrix {
    columns: Vec<String>,
    rows: usize,
    // row-major
    cells: Vec<bool>,
    // number of source rows folded into each displayed row
    rows_per_bucket: usize,
}

impl MissingnessMatrix {
    /// Build the grid from a dataset without modifying it.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        validate_dataset(df)?;

        let rows = df.height();
        let columns: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let masks = df
            .get_columns()
            .iter()
            .map(missing_mask)
            .collect::<Result<Vec<_>>>()?;

        let mut cells = Vec::with_capacity(rows * columns.len());
        for row in 0..rows {
            cells.extend(masks.iter().map(|mask| mask[row]));
        }

        Ok(Self {
            columns,
            rows,
            cells,
            rows_per_bucket: 1,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Source rows represented by each row of this grid.
    pub fn rows_per_bucket(&self) -> usize {
        self.rows_per_bucket
    }

    /// A grid with no cells has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns.is_empty()
    }

    pub fn is_missing(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.columns.len() + column]
    }

    pub fn row(&self, row: usize) -> &[bool] {
        let width = self.columns.len();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn missing_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Fold rows into at most `max_rows` buckets of consecutive rows.
    ///
    /// A bucket cell is missing when any of its source cells is missing, so
    /// isolated gaps stay visible after shrinking.
    pub fn downsample(&self, max_rows: usize) -> Self {
        if max_rows == 0 || self.rows <= max_rows {
            return self.clone();
        }

        let width = self.columns.len();
        let step = self.rows.div_ceil(max_rows);
        let buckets = self.rows.div_ceil(step);

        let mut cells = vec![false; buckets * width];
        for row in 0..self.rows {
            let bucket = row / step;
            for (col, missing) in self.row(row).iter().enumerate() {
                if *missing {
                    cells[bucket * width + col] = true;
                }
            }
        }

        Self {
            columns: self.columns.clone(),
            rows: buckets,
            cells,
            rows_per_bucket: step * self.rows_per_bucket,
        }
    }
}
