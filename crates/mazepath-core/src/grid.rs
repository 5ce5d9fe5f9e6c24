//! The [`Grid`] type: a rectangular 2D array of maze [`Cell`]s.

use crate::cell::{Cell, Marker};
use crate::error::MalformedGridError;
use crate::geom::{Bounds, Point, Points};

/// A rectangular maze grid, stored row-major.
///
/// Rows all have the same length. Once built, the only mutation a grid
/// receives is the on-path flag set by [`annotate`](crate::annotate).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = MalformedGridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let RawGrid { cells, bounds } = raw;
        if bounds.is_empty() {
            return Err(MalformedGridError::Empty);
        }
        if cells.len() != bounds.len() {
            return Err(MalformedGridError::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }
}

impl Grid {
    /// Build a grid from rows of raw marker text.
    ///
    /// Fails if there are no rows, if the rows have no columns, or if any row
    /// length differs from the first one.
    pub fn parse<R, S>(rows: &[R]) -> Result<Self, MalformedGridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self::assemble(rows.iter().map(|row| {
            row.as_ref()
                .iter()
                .map(|text| Marker::parse(text.as_ref()))
                .collect()
        }))
    }

    /// Build a grid directly from classified markers.
    pub fn from_markers(rows: Vec<Vec<Marker>>) -> Result<Self, MalformedGridError> {
        Self::assemble(rows.into_iter())
    }

    fn assemble(rows: impl Iterator<Item = Vec<Marker>>) -> Result<Self, MalformedGridError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (i, row) in rows.enumerate() {
            let expected = *width.get_or_insert(row.len());
            if expected == 0 {
                return Err(MalformedGridError::EmptyRow);
            }
            if row.len() != expected {
                return Err(MalformedGridError::Ragged {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row.into_iter().map(Cell::new));
            height += 1;
        }
        let width = width.ok_or(MalformedGridError::Empty)?;
        Ok(Self {
            cells,
            bounds: Bounds::new(width as i32, height),
        })
    }

    /// Extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// The marker at `p`, or `None` outside the grid.
    pub fn marker(&self, p: Point) -> Option<&Marker> {
        self.at(p).map(|c| &c.marker)
    }

    /// Set the on-path flag of the cell at `p`. No-op outside the grid.
    pub(crate) fn set_on_path(&mut self, p: Point, on_path: bool) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i].on_path = on_path;
        }
    }

    /// Remove every on-path flag.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut() {
            c.on_path = false;
        }
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.points(),
        }
    }

    /// Iterator over the rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.bounds.width().max(1) as usize)
    }

    /// Positions of all cells whose marker satisfies `pred`, row-major.
    pub fn positions(&self, pred: impl Fn(&Marker) -> bool) -> Vec<Point> {
        self.iter()
            .filter(|(_, c)| pred(&c.marker))
            .map(|(p, _)| p)
            .collect()
    }

    /// Positions of all cells flagged as on the path, row-major.
    pub fn on_path_points(&self) -> Vec<Point> {
        self.iter().filter(|(_, c)| c.on_path).map(|(p, _)| p).collect()
    }

    /// Smallest and largest explicit weight strictly greater than 1.
    ///
    /// Returns `(0, 0)` when the grid has no such weight. Renderers use these
    /// bounds to scale weight colours.
    pub fn weight_bounds(&self) -> (u32, u32) {
        let mut min = u32::MAX;
        let mut max = 0;
        for c in &self.cells {
            if let Some(w) = c.marker.weight().filter(|&w| w > 1) {
                min = min.min(w);
                max = max.max(w);
            }
        }
        if min > max { (0, 0) } else { (min, max) }
    }
}

/// Iterator over `(Point, &Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: Points,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Point, &'a Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let cell = self.grid.at(p)?;
        Some((p, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_at() {
        let g = Grid::parse(&[["S", "", "W"], ["1", "5", ""], ["", "", "E"]]).unwrap();
        assert_eq!(g.bounds(), Bounds::new(3, 3));
        assert_eq!(g.marker(Point::from_row_col(0, 0)), Some(&Marker::Start));
        assert_eq!(g.marker(Point::from_row_col(0, 2)), Some(&Marker::Wall));
        assert_eq!(g.marker(Point::from_row_col(1, 1)), Some(&Marker::Weight(5)));
        assert_eq!(g.marker(Point::from_row_col(2, 2)), Some(&Marker::End));
        assert_eq!(g.at(Point::new(3, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn parse_owned_rows() {
        let rows: Vec<Vec<String>> = vec![vec!["S".into(), "E".into()]];
        let g = Grid::parse(&rows).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 1);
    }

    #[test]
    fn parse_rejects_empty() {
        let rows: Vec<Vec<&str>> = vec![];
        assert_eq!(Grid::parse(&rows), Err(MalformedGridError::Empty));
        let rows: Vec<Vec<&str>> = vec![vec![]];
        assert_eq!(Grid::parse(&rows), Err(MalformedGridError::EmptyRow));
    }

    #[test]
    fn parse_rejects_ragged() {
        let rows = vec![vec!["S", "", ""], vec!["", "E"]];
        assert_eq!(
            Grid::parse(&rows),
            Err(MalformedGridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn from_markers_matches_parse() {
        let a = Grid::parse(&[["S", "4"], ["W", "E"]]).unwrap();
        let b = Grid::from_markers(vec![
            vec![Marker::Start, Marker::Weight(4)],
            vec![Marker::Wall, Marker::End],
        ])
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rows_and_iter() {
        let g = Grid::parse(&[["S", "2"], ["x", "E"]]).unwrap();
        let rows: Vec<_> = g.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0].marker, Marker::Unknown("x".into()));
        let pts: Vec<_> = g.iter().map(|(p, _)| p).collect();
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(g.positions(|m| *m == Marker::End), vec![Point::new(1, 1)]);
    }

    #[test]
    fn weight_bounds_ignore_ones() {
        let g = Grid::parse(&[["S", "1", "9"], ["3", "W", "E"]]).unwrap();
        assert_eq!(g.weight_bounds(), (3, 9));
        let plain = Grid::parse(&[["S", "1", "E"]]).unwrap();
        assert_eq!(plain.weight_bounds(), (0, 0));
    }
}
