//! Coloured terminal rendering through crossterm.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use mazepath_core::Grid;

use crate::palette::{self, Color};

// Characters per cell.
const CELL_WIDTH: usize = 3;

fn to_ct_color(c: Color) -> CtColor {
    let [r, g, b] = c.rgb();
    CtColor::Rgb { r, g, b }
}

/// Print `grid` to `w`, one coloured block per cell.
///
/// Labels longer than a cell are cut to fit.
pub fn print_terminal<W: Write>(grid: &Grid, mut w: W) -> io::Result<()> {
    let bounds = grid.weight_bounds();
    for row in grid.rows() {
        for cell in row {
            let bg = palette::cell_color(cell, bounds);
            let label: String = cell.marker.label().chars().take(CELL_WIDTH).collect();
            queue!(
                w,
                SetBackgroundColor(to_ct_color(bg)),
                SetForegroundColor(to_ct_color(bg.contrast_text())),
                Print(format!("{:^width$}", label, width = CELL_WIDTH))
            )?;
        }
        queue!(w, ResetColor, Print("\n"))?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_label() {
        let g = Grid::parse(&[["S", "12345"], ["W", "E"]]).unwrap();
        let mut buf = Vec::new();
        print_terminal(&g, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains(" S "));
        assert!(s.contains("123"));
        assert!(!s.contains("1234"));
        assert_eq!(s.matches('\n').count(), 2);
    }
}
