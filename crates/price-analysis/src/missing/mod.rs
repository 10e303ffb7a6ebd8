//! Missing-value analysis.
//!
//! An analysis is anything that can *identify* missing values in a dataset
//! and *visualize* them. [`analyze`] runs the two steps in that fixed order;
//! implementations only supply the steps.
//!
//! # Example
//!
//! ```rust,ignore
//! use price_analysis::missing::{analyze, SimpleMissingValuesAnalysis};
//!
//! let df = price_analysis::dataset::load_csv("data/df_model.csv", &config)?;
//! let analysis = SimpleMissingValuesAnalysis::from_config(&config);
//! analyze(&analysis, &df)?;
//! ```

mod matrix;
mod report;
mod simple;

pub use matrix::MissingnessMatrix;
pub use report::{ColumnMissing, MissingnessReport};
pub use simple::SimpleMissingValuesAnalysis;

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// The two steps of a missing-value analysis.
///
/// Neither step may modify the dataset. Implementations decide where their
/// output goes; nothing is returned.
pub trait MissingValueAnalysis {
    /// Report missing-value counts for the dataset.
    fn identify_missing_values(&self, df: &DataFrame) -> Result<()>;

    /// Produce a visual representation of where values are missing.
    fn visualize_missing_values(&self, df: &DataFrame) -> Result<()>;
}

/// Run a complete analysis: identification, then visualization.
///
/// Both steps run exactly once, even when nothing is missing. An error from
/// identification is returned before visualization starts.
pub fn analyze<A>(analysis: &A, df: &DataFrame) -> Result<()>
where
    A: MissingValueAnalysis + ?Sized,
{
    debug!(shape = ?df.shape(), "Starting missing value analysis");
    analysis.identify_missing_values(df)?;
    analysis.visualize_missing_values(df)
}
