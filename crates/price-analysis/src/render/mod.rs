//! Heatmap rendering.
//!
//! A [`HeatmapRenderer`] draws a [`MissingnessMatrix`] somewhere: the
//! terminal, an SVG file, or anything else that implements the trait.
//! Renderers receive the analyzer's output sink for any textual output.
//!
//! Both built-in renderers use the two ends of the viridis scale and draw
//! no color bar.

mod svg;
mod terminal;

pub use svg::SvgHeatmap;
pub use terminal::TerminalHeatmap;

use crate::error::Result;
use crate::missing::MissingnessMatrix;
use std::io::Write;

/// Cell color for present values (viridis low end, `#440154`).
pub const PRESENT_RGB: (u8, u8, u8) = (68, 1, 84);

/// Cell color for missing values (viridis high end, `#FDE725`).
pub const MISSING_RGB: (u8, u8, u8) = (253, 231, 37);

/// Draws a missingness grid.
pub trait HeatmapRenderer: Send + Sync {
    /// Render `matrix` under `title`. Text output goes to `out`.
    fn render(&self, matrix: &MissingnessMatrix, title: &str, out: &mut dyn Write) -> Result<()>;
}

impl<R: HeatmapRenderer + ?Sized> HeatmapRenderer for Box<R> {
    fn render(&self, matrix: &MissingnessMatrix, title: &str, out: &mut dyn Write) -> Result<()> {
        (**self).render(matrix, title, out)
    }
}
