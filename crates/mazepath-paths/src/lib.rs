//! Weighted maze graphs and least-cost path search.
//!
//! - [`Graph::build`] turns a [`Grid`](mazepath_core::Grid) into a
//!   4-connected lattice whose edge weights come from the destination cell.
//! - [`Search::astar`] runs A* over any [`AstarPather`]; [`Graph`] is one,
//!   with a Manhattan heuristic.
//! - [`solve`] chains validation, graph construction, search and annotation.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod distance;
mod error;
mod graph;
mod path;
mod search;
mod solve;
mod traits;

pub use distance::manhattan;
pub use error::PathError;
pub use graph::{Edge, Graph, WALL_WEIGHT, entry_weight};
pub use path::{Path, PathNode};
pub use search::{Search, SearchLimits};
pub use solve::{Solution, SolveError, find_path, find_path_with_limits, solve, solve_grid};
pub use traits::{AstarPather, Pather, WeightedPather};
