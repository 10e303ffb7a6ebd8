use super::{HeatmapRenderer, MISSING_RGB, PRESENT_RGB};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::missing::MissingnessMatrix;
use colored::Colorize;
use std::io::Write;
use tracing::debug;

const MISSING_GLYPH: char = '#';
const PRESENT_GLYPH: char = '.';
const MIN_CELL_WIDTH: usize = 2;

/// Draws the grid as fixed-width cells on the output sink.
///
/// Rows beyond `max_rows` are folded into buckets. Columns are labelled by
/// index in the header and listed by name below the grid. Cells are two
/// characters wide, or one wider than the largest column index so header
/// labels stay separated.
#[derive(Debug, Clone)]
pub struct TerminalHeatmap {
    max_rows: usize,
    color: bool,
}

impl TerminalHeatmap {
    pub fn new(max_rows: usize, color: bool) -> Self {
        Self { max_rows, color }
    }

    /// Heatmap for stdout; `ColorMode::Auto` checks whether stdout is a terminal.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.max_terminal_rows, config.color_mode.enabled())
    }

    fn cell(&self, missing: bool, width: usize) -> String {
        match (self.color, missing) {
            (true, true) => " "
                .repeat(width)
                .on_truecolor(MISSING_RGB.0, MISSING_RGB.1, MISSING_RGB.2)
                .to_string(),
            (true, false) => " "
                .repeat(width)
                .on_truecolor(PRESENT_RGB.0, PRESENT_RGB.1, PRESENT_RGB.2)
                .to_string(),
            (false, true) => MISSING_GLYPH.to_string().repeat(width),
            (false, false) => PRESENT_GLYPH.to_string().repeat(width),
        }
    }
}

fn cell_width(n_columns: usize) -> usize {
    let widest_index = n_columns.saturating_sub(1).to_string().len();
    MIN_CELL_WIDTH.max(widest_index + 1)
}

impl HeatmapRenderer for TerminalHeatmap {
    fn render(&self, matrix: &MissingnessMatrix, title: &str, out: &mut dyn Write) -> Result<()> {
        let grid = matrix.downsample(self.max_rows);
        let label_width = matrix.n_rows().saturating_sub(1).to_string().len();
        let width = cell_width(grid.n_columns());

        debug!(
            rows = grid.n_rows(),
            columns = grid.n_columns(),
            color = self.color,
            "Rendering terminal heatmap"
        );

        writeln!(out, "{}", title)?;

        let header: String = (0..grid.n_columns())
            .map(|i| format!("{:>width$}", i))
            .collect();
        writeln!(out, "{:>label_width$} {}", "", header)?;

        for row in 0..grid.n_rows() {
            let first_row = row * grid.rows_per_bucket();
            let cells: String = grid.row(row).iter().map(|m| self.cell(*m, width)).collect();
            writeln!(out, "{:>label_width$} {}", first_row, cells)?;
        }

        for (i, name) in grid.columns().iter().enumerate() {
            writeln!(out, "  [{}] {}", i, name)?;
        }

        if grid.rows_per_bucket() > 1 {
            writeln!(
                out,
                "({} rows shown as {} buckets of {})",
                matrix.n_rows(),
                grid.n_rows(),
                grid.rows_per_bucket()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use pretty_assertions::assert_eq;

    fn render_plain(df: &DataFrame, max_rows: usize) -> String {
        let matrix = MissingnessMatrix::from_dataframe(df).unwrap();
        let mut out = Vec::new();
        TerminalHeatmap::new(max_rows, false)
            .render(&matrix, "Missing Values Heatmap", &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_grid() {
        let df = df![
            "Area" => [Some(1.0), None, Some(3.0)],
            "Precio" => [Some(10), Some(20), None],
        ]
        .unwrap();

        assert_eq!(
            render_plain(&df, 40),
            "Missing Values Heatmap\n\
             \u{20}  0 1\n\
             0 ....\n\
             1 ##..\n\
             2 ..##\n\
             \u{20} [0] Area\n\
             \u{20} [1] Precio\n"
        );
    }

    #[test]
    fn test_bucket_note() {
        let values: Vec<Option<i64>> = (0..10).map(|i| if i == 7 { None } else { Some(i) }).collect();
        let df = df!["Habitaciones" => values].unwrap();

        let text = render_plain(&df, 5);
        assert!(text.contains("(10 rows shown as 5 buckets of 2)"));
        // row 7 falls in the bucket starting at row 6
        assert!(text.contains("6 ##\n"));
    }

    #[test]
    fn test_wide_frame_header_keeps_indexes_apart() {
        let columns: Vec<Column> = (0..12)
            .map(|i| {
                let values = if i == 11 {
                    vec![None, Some(1.0)]
                } else {
                    vec![Some(1.0), Some(2.0)]
                };
                Column::new(format!("c{i}").into(), values)
            })
            .collect();
        let df = DataFrame::new(columns).unwrap();

        let text = render_plain(&df, 40);
        let lines: Vec<&str> = text.lines().collect();

        let labels: String = (0..12).map(|i| format!("{i:>3}")).collect();
        assert_eq!(lines[1], format!("  {labels}"));
        assert!(lines[1].contains(" 9 10 11"));
        assert_eq!(lines[2], format!("0 {}###", "...".repeat(11)));
        assert_eq!(lines[2].len(), lines[1].len());
        assert!(text.contains("  [11] c11\n"));
    }

    #[test]
    fn test_color_cells_differ() {
        let renderer = TerminalHeatmap::new(10, true);
        colored::control::set_override(true);
        assert_ne!(renderer.cell(true, 2), renderer.cell(false, 2));
        colored::control::unset_override();
    }
}
