//! Weighted edge-list export: one `(row, col) (row, col) weight` line per
//! directed edge.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use mazepath_paths::Graph;

use crate::error::RenderError;
use crate::output::OutputDir;

/// Write every directed edge of `graph` to `w`.
pub fn write_edgelist_to<W: Write>(graph: &Graph, mut w: W) -> std::io::Result<()> {
    for e in graph.edges() {
        writeln!(w, "{} {} {}", e.from, e.to, e.weight)?;
    }
    w.flush()
}

/// Write the edge list to `name` inside `out`.
pub fn write_edgelist(graph: &Graph, out: &OutputDir, name: &str) -> Result<PathBuf, RenderError> {
    let path = out.join(name);
    let file = File::create(&path).map_err(|e| RenderError::io(&path, e))?;
    write_edgelist_to(graph, BufWriter::new(file)).map_err(|e| RenderError::io(&path, e))?;
    log::info!("wrote {} ({} edges)", path.display(), graph.edge_count());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_core::Grid;
    use mazepath_paths::WALL_WEIGHT;

    #[test]
    fn lists_both_directions() {
        let g = Graph::build(&Grid::parse(&[["S", "W"], ["4", "E"]]).unwrap());
        let mut buf = Vec::new();
        write_edgelist_to(&g, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], format!("(0, 0) (0, 1) {WALL_WEIGHT}"));
        assert_eq!(lines[1], "(0, 0) (1, 0) 4");
        assert!(lines.contains(&"(0, 1) (0, 0) 1"));
        assert!(lines.contains(&"(1, 0) (1, 1) 1"));
    }
}
