//! The weighted 4-connected lattice built from a maze [`Grid`].

use mazepath_core::{Bounds, Grid, Marker, Point};
#[cfg(feature = "serde")]
use mazepath_core::MalformedGridError;

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of entering a wall cell.
///
/// Walls stay traversable so that every cell is reachable, but this is large
/// enough that no route ever crosses a wall when a detour exists.
pub const WALL_WEIGHT: u32 = 999_999;

/// Cost of entering a cell with the given marker.
///
/// Rules, in order: walls cost [`WALL_WEIGHT`], explicit weights cost their
/// value, everything else (blank, start, end, unrecognised text) costs 1.
#[inline]
pub fn entry_weight(marker: &Marker) -> u32 {
    match marker {
        Marker::Wall => WALL_WEIGHT,
        Marker::Weight(n) => *n,
        Marker::Empty | Marker::Start | Marker::End | Marker::Unknown(_) => 1,
    }
}

/// A directed edge of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    pub weight: u32,
}

/// A 4-connected weighted graph over grid coordinates.
///
/// Every axis-adjacent pair `(u, v)` is joined by two directed edges. The
/// weight of `u → v` depends only on `v`'s marker and the weight of `v → u`
/// only on `u`'s, so the two directions generally differ.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGraph"))]
pub struct Graph {
    bounds: Bounds,
    weights: Vec<u32>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGraph {
    bounds: Bounds,
    weights: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGraph> for Graph {
    type Error = MalformedGridError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        let RawGraph { bounds, weights } = raw;
        if bounds.is_empty() {
            return Err(MalformedGridError::Empty);
        }
        if weights.len() != bounds.len() {
            return Err(MalformedGridError::CellCount {
                expected: bounds.len(),
                found: weights.len(),
            });
        }
        Ok(Self { bounds, weights })
    }
}

impl Graph {
    /// Build the lattice for `grid`.
    pub fn build(grid: &Grid) -> Self {
        let weights: Vec<u32> = grid.iter().map(|(_, c)| entry_weight(&c.marker)).collect();
        log::debug!(
            "built graph: {}x{} nodes, {} directed edges",
            grid.height(),
            grid.width(),
            directed_edge_count(grid.bounds())
        );
        Self {
            bounds: grid.bounds(),
            weights,
        }
    }

    /// Extent of the node lattice.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        directed_edge_count(self.bounds)
    }

    /// Whether `p` is a node of the graph.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Weight of any edge entering `p`.
    pub fn weight_into(&self, p: Point) -> Option<u32> {
        self.bounds.index(p).map(|i| self.weights[i])
    }

    /// Weight of the edge `from → to`, or `None` if the two points are not
    /// adjacent nodes.
    pub fn weight(&self, from: Point, to: Point) -> Option<u32> {
        if !self.contains(from) || !from.is_adjacent_4(to) {
            return None;
        }
        self.weight_into(to)
    }

    /// Row-major iterator over every directed edge. Edges leaving a node are
    /// listed up, right, down, left.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.bounds.points().flat_map(move |from| {
            from.neighbors_4().into_iter().filter_map(move |to| {
                self.weight_into(to).map(|weight| Edge { from, to, weight })
            })
        })
    }

    /// Sum of edge weights along consecutive points of `path`, or `None` if
    /// two consecutive points are not adjacent.
    pub fn path_cost(&self, path: &[Point]) -> Option<u64> {
        path.windows(2)
            .map(|w| self.weight(w[0], w[1]).map(u64::from))
            .sum()
    }
}

// Two per adjacent pair: (w - 1) per row, (h - 1) per column.
fn directed_edge_count(b: Bounds) -> usize {
    if b.is_empty() {
        return 0;
    }
    let (w, h) = (b.width() as usize, b.height() as usize);
    2 * ((w - 1) * h + w * (h - 1))
}

impl Pather for Graph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }
}

impl WeightedPather for Graph {
    fn cost(&self, _from: Point, to: Point) -> u64 {
        self.weight_into(to).map_or(u64::MAX, u64::from)
    }
}

impl AstarPather for Graph {
    fn estimate(&self, from: Point, to: Point) -> u64 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[&[&str]]) -> Graph {
        Graph::build(&Grid::parse(rows).unwrap())
    }

    #[test]
    fn weight_rules() {
        assert_eq!(entry_weight(&Marker::parse("7")), 7);
        assert_eq!(entry_weight(&Marker::parse("W")), WALL_WEIGHT);
        assert_eq!(entry_weight(&Marker::parse("")), 1);
        assert_eq!(entry_weight(&Marker::parse("S")), 1);
        assert_eq!(entry_weight(&Marker::parse("E")), 1);
        assert_eq!(entry_weight(&Marker::parse("door")), 1);
        assert_eq!(entry_weight(&Marker::parse("0")), 1);
    }

    #[test]
    fn weights_follow_destination() {
        let g = graph(&[&["S", "7", "W"], &["", "", "E"]]);
        let s = Point::new(0, 0);
        let seven = Point::new(1, 0);
        let wall = Point::new(2, 0);
        assert_eq!(g.weight(s, seven), Some(7));
        assert_eq!(g.weight(seven, s), Some(1));
        assert_eq!(g.weight(seven, wall), Some(WALL_WEIGHT));
        assert_eq!(g.weight(wall, seven), Some(7));
    }

    #[test]
    fn non_adjacent_pairs_have_no_edge() {
        let g = graph(&[&["S", "", "E"]]);
        assert_eq!(g.weight(Point::new(0, 0), Point::new(2, 0)), None);
        assert_eq!(g.weight(Point::new(0, 0), Point::new(0, 0)), None);
        assert_eq!(g.weight(Point::new(0, 0), Point::new(-1, 0)), None);
    }

    #[test]
    fn edge_enumeration() {
        let g = graph(&[&["S", "", "W"], &["1", "5", ""], &["", "", "E"]]);
        assert_eq!(g.node_count(), 9);
        // 12 undirected lattice edges in a 3x3 grid.
        assert_eq!(g.edge_count(), 24);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges.len(), 24);
        assert_eq!(
            edges[0],
            Edge {
                from: Point::new(0, 0),
                to: Point::new(1, 0),
                weight: 1
            }
        );
        for e in &edges {
            assert!(e.from.is_adjacent_4(e.to));
            assert_eq!(Some(e.weight), g.weight_into(e.to));
        }
    }

    #[test]
    fn single_row_edges() {
        let g = graph(&[&["S", "E"]]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges().count(), 2);
    }

    #[test]
    fn path_cost_sums_destinations() {
        let g = graph(&[&["S", "", "W"], &["1", "5", ""], &["", "", "E"]]);
        let path = [
            Point::from_row_col(0, 0),
            Point::from_row_col(1, 0),
            Point::from_row_col(2, 0),
            Point::from_row_col(2, 1),
            Point::from_row_col(2, 2),
        ];
        assert_eq!(g.path_cost(&path), Some(4));
        assert_eq!(g.path_cost(&[Point::new(0, 0), Point::new(2, 2)]), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let g = Graph::build(&Grid::parse(&[["S", "4"], ["W", "E"]]).unwrap());
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn weights_must_cover_every_node() {
        let err = serde_json::from_str::<Graph>(
            r#"{"bounds":{"width":2,"height":2},"weights":[1,1,1]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("grid of 4 cells holds 3"), "{err}");
        assert!(serde_json::from_str::<Graph>(r#"{"bounds":{"width":0,"height":5},"weights":[]}"#).is_err());
    }
}
