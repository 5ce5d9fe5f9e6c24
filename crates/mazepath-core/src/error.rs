use thiserror::Error;

/// The raw rows do not describe a rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid rows have no columns")]
    EmptyRow,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid of {expected} cells holds {found}")]
    CellCount { expected: usize, found: usize },
}
