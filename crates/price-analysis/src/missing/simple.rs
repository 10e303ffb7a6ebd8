use super::{MissingValueAnalysis, MissingnessMatrix, MissingnessReport};
use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt};
use crate::render::{HeatmapRenderer, TerminalHeatmap};
use parking_lot::Mutex;
use polars::prelude::*;
use std::io::{Stdout, Write};
use tracing::{debug, info};

/// Count-and-report identification followed by heatmap visualization.
///
/// Text goes to the output sink (stdout by default). Visualization hands the
/// missingness grid to every configured renderer in order; with no renderers
/// only the section header is written.
///
/// An empty dataset (no rows or no columns) is not rendered: the section
/// header is followed by a note and the renderers are skipped.
pub struct SimpleMissingValuesAnalysis<W: Write + Send = Stdout> {
    out: Mutex<W>,
    renderers: Vec<Box<dyn HeatmapRenderer>>,
    title: String,
}

static_assertions::assert_impl_all!(SimpleMissingValuesAnalysis: Send, Sync);

impl SimpleMissingValuesAnalysis<Stdout> {
    /// Stdout analysis with a terminal heatmap and default settings.
    pub fn new() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }

    /// Stdout analysis with a terminal heatmap built from `config`.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            out: Mutex::new(std::io::stdout()),
            renderers: vec![Box::new(TerminalHeatmap::from_config(config))],
            title: config.heatmap_title.clone(),
        }
    }
}

impl Default for SimpleMissingValuesAnalysis<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> SimpleMissingValuesAnalysis<W> {
    /// Write to `out` with a terminal heatmap built from `config`.
    ///
    /// `out` is not assumed to be a terminal, so `ColorMode::Auto` draws
    /// plain glyphs here; use `ColorMode::Always` to force color.
    pub fn with_writer(out: W, config: &AnalysisConfig) -> Self {
        let heatmap =
            TerminalHeatmap::new(config.max_terminal_rows, config.color_mode.resolve(false));
        Self {
            out: Mutex::new(out),
            renderers: vec![Box::new(heatmap)],
            title: config.heatmap_title.clone(),
        }
    }

    /// Write to `out` without any renderers; add them with [`Self::with_renderer`].
    pub fn bare(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            renderers: Vec::new(),
            title: AnalysisConfig::default().heatmap_title,
        }
    }

    /// Append a renderer to run after the existing ones.
    pub fn with_renderer(mut self, renderer: impl HeatmapRenderer + 'static) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    /// Consume the analysis and return its output sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> MissingValueAnalysis for SimpleMissingValuesAnalysis<W> {
    fn identify_missing_values(&self, df: &DataFrame) -> Result<()> {
        let report =
            MissingnessReport::from_dataframe(df).context("Failed to identify missing values")?;

        info!(
            columns = report.columns.len(),
            affected = report.non_zero().count(),
            total_missing = report.total_missing(),
            "Identified missing values"
        );

        let mut out = self.out.lock();
        writeln!(out, "\nMissing Values Count by Column:")?;
        write!(out, "{}", report)?;
        out.flush()?;
        Ok(())
    }

    fn visualize_missing_values(&self, df: &DataFrame) -> Result<()> {
        let matrix =
            MissingnessMatrix::from_dataframe(df).context("Failed to build missingness matrix")?;

        let mut out = self.out.lock();
        writeln!(out, "\nMissing Values Heatmap:")?;

        if matrix.is_empty() {
            debug!(shape = ?df.shape(), "Skipping heatmap for empty dataset");
            writeln!(out, "(empty dataset, nothing to render)")?;
            return Ok(());
        }

        for renderer in &self.renderers {
            renderer.render(&matrix, &self.title, &mut *out)?;
        }
        out.flush()?;
        Ok(())
    }
}
