//! Plain-text rendering of an annotated grid.

use std::fs;
use std::path::PathBuf;

use mazepath_core::{Cell, Grid};

use crate::error::RenderError;
use crate::output::OutputDir;

/// Suffix marking an on-path cell in textual output.
pub const PATH_SUFFIX: &str = "P";

/// The text of one cell: its label, followed by [`PATH_SUFFIX`] if the cell
/// lies on the path.
pub fn cell_text(cell: &Cell) -> String {
    let mut s = cell.marker.label().into_owned();
    if cell.on_path {
        s.push_str(PATH_SUFFIX);
    }
    s
}

/// One line per row, cells separated by a space, blank cells as a space.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|c| {
                let t = cell_text(c);
                if t.is_empty() { " ".to_string() } else { t }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Write [`render_text`] to `name` inside `out`.
pub fn write_text(grid: &Grid, out: &OutputDir, name: &str) -> Result<PathBuf, RenderError> {
    let path = out.join(name);
    fs::write(&path, render_text(grid)).map_err(|e| RenderError::io(&path, e))?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
