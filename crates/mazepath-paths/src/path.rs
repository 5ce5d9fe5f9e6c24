use std::ops::Index;

use mazepath_core::Point;

/// A position with the accumulated cost of reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: u64,
}

/// A search result: the visited positions from start to goal, inclusive,
/// each with the accumulated cost of reaching it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    costs: Vec<u64>,
}

impl Path {
    pub(crate) fn from_nodes(nodes: impl IntoIterator<Item = PathNode>) -> Self {
        let (points, costs) = nodes.into_iter().map(|n| (n.pos, n.cost)).unzip();
        Self { points, costs }
    }

    /// Positions from start to goal.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Accumulated cost at each position; the first entry is always 0.
    #[inline]
    pub fn costs(&self) -> &[u64] {
        &self.costs
    }

    /// Total cost of the path.
    pub fn cost(&self) -> u64 {
        self.costs.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Positions strictly between the two endpoints.
    pub fn interior(&self) -> &[Point] {
        if self.points.len() < 2 {
            return &[];
        }
        &self.points[1..self.points.len() - 1]
    }

    /// Iterator over `(position, accumulated cost)` nodes.
    pub fn nodes(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.points
            .iter()
            .zip(&self.costs)
            .map(|(&pos, &cost)| PathNode { pos, cost })
    }

    /// Whether consecutive positions share an edge (both directions).
    pub fn contains_step(&self, a: Point, b: Point) -> bool {
        self.points
            .windows(2)
            .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
    }
}

impl Index<usize> for Path {
    type Output = Point;
    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

impl AsRef<[Point]> for Path {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::from_nodes([
            PathNode { pos: Point::new(0, 0), cost: 0 },
            PathNode { pos: Point::new(1, 0), cost: 3 },
            PathNode { pos: Point::new(1, 1), cost: 4 },
        ]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.cost(), 4);
        assert_eq!(p.start(), Some(Point::new(0, 0)));
        assert_eq!(p.end(), Some(Point::new(1, 1)));
        assert_eq!(p.interior(), &[Point::new(1, 0)]);
        assert_eq!(p[1], Point::new(1, 0));
        assert!(p.contains_step(Point::new(1, 1), Point::new(1, 0)));
        assert!(!p.contains_step(Point::new(0, 0), Point::new(1, 1)));
        assert_eq!(p.nodes().nth(1).map(|n| n.cost), Some(3));
    }

    #[test]
    fn trivial_paths_have_no_interior() {
        let p = Path::from_nodes([
            PathNode { pos: Point::new(0, 0), cost: 0 },
            PathNode { pos: Point::new(1, 0), cost: 1 },
        ]);
        assert!(p.interior().is_empty());
        let single = Path::from_nodes([PathNode { pos: Point::new(0, 0), cost: 0 }]);
        assert!(single.interior().is_empty());
        assert_eq!(single.cost(), 0);
    }
}
