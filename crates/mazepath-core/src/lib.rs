//! **mazepath-core**: the maze grid model.
//!
//! This crate turns rows of marker text into a typed [`Grid`] of [`Cell`]s,
//! checks the start/end rules with [`validate`], and writes a found path back
//! onto the grid with [`annotate`]. It performs no I/O.

pub mod annotate;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod validate;

pub use annotate::annotate;
pub use cell::{Cell, Marker};
pub use error::MalformedGridError;
pub use geom::{Bounds, Point, Points};
pub use grid::Grid;
pub use validate::{Endpoints, ValidationError, ValidationErrors, validate};

/// Build a [`Grid`] from rows of raw marker text. See [`Grid::parse`].
pub fn parse_grid<R, S>(rows: &[R]) -> Result<Grid, MalformedGridError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    Grid::parse(rows)
}
