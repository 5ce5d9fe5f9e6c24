use std::time::Duration;

use mazepath_core::Point;
use thiserror::Error;

/// A search that produced no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },
    #[error("{0} is outside the searched range")]
    OutOfBounds(Point),
    #[error("search exceeded its {timeout:?} budget after expanding {expanded} nodes")]
    DeadlineExceeded { timeout: Duration, expanded: usize },
}
