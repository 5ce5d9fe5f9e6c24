use mazepath_core::Point;

/// A space the search can walk through.
pub trait Pather {
    /// Push every position reachable in one step from `p` onto `out`.
    /// `out` arrives empty.
    fn neighbors(&self, p: Point, out: &mut Vec<Point>);
}

/// A space whose steps have a price.
pub trait WeightedPather: Pather {
    /// Price of stepping from `from` onto the adjacent `to`. At least 1.
    fn cost(&self, from: Point, to: Point) -> u64;
}

/// A weighted space with a lower bound on the remaining price.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cheapest route from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> u64;
}
