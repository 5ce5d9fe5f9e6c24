//! Marking a discovered path back onto the grid.

use crate::geom::Point;
use crate::grid::Grid;

/// Flag every cell of `path` strictly between its two endpoints as on-path.
///
/// Cell markers are left untouched, and start/end cells are never flagged
/// even if they appear in the interior. Points outside the grid are ignored.
pub fn annotate<P: AsRef<[Point]> + ?Sized>(grid: &mut Grid, path: &P) {
    let path = path.as_ref();
    if path.len() < 3 {
        return;
    }
    for &p in &path[1..path.len() - 1] {
        if grid.marker(p).is_some_and(|m| !m.is_endpoint()) {
            grid.set_on_path(p, true);
        }
    }
}

impl Grid {
    /// Return a copy of the grid with `path` annotated onto it.
    pub fn annotated<P: AsRef<[Point]> + ?Sized>(&self, path: &P) -> Grid {
        let mut g = self.clone();
        annotate(&mut g, path);
        g
    }
}
