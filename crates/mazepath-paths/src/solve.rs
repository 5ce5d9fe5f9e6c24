//! The full pipeline: parse, validate, build the graph, search, annotate.

use mazepath_core::{Endpoints, Grid, MalformedGridError, Point, ValidationErrors};
use thiserror::Error;

use crate::error::PathError;
use crate::graph::Graph;
use crate::path::Path;
use crate::search::{Search, SearchLimits};

/// Find the least-cost path between two nodes of `graph`.
pub fn find_path(graph: &Graph, start: Point, end: Point) -> Result<Path, PathError> {
    find_path_with_limits(graph, start, end, SearchLimits::NONE)
}

/// Like [`find_path`], bounded by `limits`.
pub fn find_path_with_limits(
    graph: &Graph,
    start: Point,
    end: Point,
    limits: SearchLimits,
) -> Result<Path, PathError> {
    Search::new(graph.bounds()).astar(graph, start, end, limits)
}

/// Any failure of the pipeline. Each variant is terminal for the run.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("malformed grid: {0}")]
    Malformed(#[from] MalformedGridError),
    #[error("invalid maze:\n{0}")]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// The output of a successful run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The input grid with the path interior flagged.
    pub grid: Grid,
    pub graph: Graph,
    pub path: Path,
    pub endpoints: Endpoints,
}

/// Run the whole pipeline on rows of raw marker text.
pub fn solve<R, S>(rows: &[R], limits: SearchLimits) -> Result<Solution, SolveError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let grid = Grid::parse(rows)?;
    solve_grid(grid, limits)
}

/// Run the pipeline on an already parsed grid.
pub fn solve_grid(mut grid: Grid, limits: SearchLimits) -> Result<Solution, SolveError> {
    let endpoints = grid.validate()?;
    let graph = Graph::build(&grid);
    let path = find_path_with_limits(&graph, endpoints.start, endpoints.end, limits)?;
    mazepath_core::annotate(&mut grid, &path);
    log::info!(
        "path {} -> {}: {} steps, cost {}",
        endpoints.start,
        endpoints.end,
        path.len().saturating_sub(1),
        path.cost()
    );
    Ok(Solution {
        grid,
        graph,
        path,
        endpoints,
    })
}
