//! Maze coordinates.
//!
//! Mazes are read and reported as `(row, col)`. A [`Point`] keeps them as
//! `x` (the column, growing right) and `y` (the row, growing down). Every
//! maze is anchored at the origin, so its extent is just a [`Bounds`].

use std::fmt;

/// A cell position. `x` is the column, `y` is the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point at `row`, `col`.
    #[inline]
    pub const fn from_row_col(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// The positions one step away, in the order up, right, down, left.
    ///
    /// Some of them may lie outside any given maze.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        let Self { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
        ]
    }

    /// Whether `other` is exactly one row or one column away.
    #[inline]
    pub fn is_adjacent_4(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major, the order cells appear in the input.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

/// Extent of a maze: `width` columns by `height` rows, starting at (0, 0).
///
/// Cells are numbered row-major, which is how [`Grid`](crate::Grid) and the
/// graph crates lay out their per-cell storage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBounds"))]
pub struct Bounds {
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Self::new(raw.width, raw.height)
    }
}

impl Bounds {
    /// Negative sizes are treated as 0.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Number of columns.
    #[inline]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        0 <= p.x && p.x < self.width && 0 <= p.y && p.y < self.height
    }

    /// Row-major cell number of `p`, or `None` outside.
    #[inline]
    pub const fn index(self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Position of cell number `i`. Only meaningful for `i < self.len()`.
    #[inline]
    pub const fn point(self, i: usize) -> Point {
        let w = self.width as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    /// Every position, row-major.
    pub fn points(self) -> Points {
        Points {
            bounds: self,
            next: 0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} cols", self.height, self.width)
    }
}

/// Iterator returned by [`Bounds::points`].
#[derive(Clone, Debug)]
pub struct Points {
    bounds: Bounds,
    next: usize,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Points {}
