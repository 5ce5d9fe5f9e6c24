//! Reading grids from and writing annotated grids to comma-delimited files.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use mazepath_core::Grid;

use crate::error::RenderError;
use crate::output::OutputDir;
use crate::text::cell_text;

/// Split comma-delimited text into rows of fields.
///
/// There is no header row, and rows may differ in length: rectangularity is
/// checked later, when the rows become a [`Grid`].
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, RenderError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// [`read_rows`] on the file at `path`.
pub fn read_rows_path(path: &Path) -> Result<Vec<Vec<String>>, RenderError> {
    let file = File::open(path).map_err(|e| RenderError::io(path, e))?;
    let rows = read_rows(file)?;
    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// The annotated grid as rows of text, on-path cells suffixed with `P`.
pub fn grid_rows(grid: &Grid) -> Vec<Vec<String>> {
    grid.rows().map(|row| row.iter().map(cell_text).collect()).collect()
}

/// Write the annotated grid as CSV to `w`.
pub fn write_csv_to<W: Write>(grid: &Grid, w: W) -> Result<(), RenderError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(w);
    for row in grid_rows(grid) {
        wtr.write_record(&row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the annotated grid as CSV to `name` inside `out`.
pub fn write_csv(grid: &Grid, out: &OutputDir, name: &str) -> Result<PathBuf, RenderError> {
    let path = out.join(name);
    let file = File::create(&path).map_err(|e| RenderError::io(&path, e))?;
    write_csv_to(grid, file)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
