use super::{HeatmapRenderer, MISSING_RGB, PRESENT_RGB};
use crate::error::{AnalysisError, Result};
use crate::missing::MissingnessMatrix;
use plotters::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const TITLE_HEIGHT: u32 = 40;

/// Saves the full grid (no downsampling) as an SVG image.
#[derive(Debug, Clone)]
pub struct SvgHeatmap {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgHeatmap {
    pub fn new(path: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn draw(&self, matrix: &MissingnessMatrix, title: &str) -> std::result::Result<(), String> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let root = root
            .titled(title, ("sans-serif", 24))
            .map_err(|e| e.to_string())?;

        let (width, height) = root.dim_in_pixel();
        let cell_w = width as f64 / matrix.n_columns() as f64;
        let cell_h = height as f64 / matrix.n_rows() as f64;

        let present = RGBColor(PRESENT_RGB.0, PRESENT_RGB.1, PRESENT_RGB.2);
        let missing = RGBColor(MISSING_RGB.0, MISSING_RGB.1, MISSING_RGB.2);

        for row in 0..matrix.n_rows() {
            let y0 = (row as f64 * cell_h).floor() as i32;
            let y1 = ((row + 1) as f64 * cell_h).ceil() as i32;
            for (col, is_missing) in matrix.row(row).iter().enumerate() {
                let x0 = (col as f64 * cell_w).floor() as i32;
                let x1 = ((col + 1) as f64 * cell_w).ceil() as i32;
                let color = if *is_missing { missing } else { present };
                root.draw(&Rectangle::new([(x0, y0), (x1, y1)], color.filled()))
                    .map_err(|e| e.to_string())?;
            }
        }

        root.present().map_err(|e| e.to_string())
    }
}

impl HeatmapRenderer for SvgHeatmap {
    fn render(&self, matrix: &MissingnessMatrix, title: &str, out: &mut dyn Write) -> Result<()> {
        if self.size.1 <= TITLE_HEIGHT {
            return Err(AnalysisError::InvalidConfig(format!(
                "SVG canvas height {} leaves no room below the title",
                self.size.1
            )));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.draw(matrix, title).map_err(AnalysisError::RenderFailed)?;

        info!("Heatmap saved: {}", self.path.display());
        writeln!(out, "Heatmap saved: {}", self.path.display())?;
        Ok(())
    }
}
