//! Structural validation: exactly one start and exactly one end.

use std::fmt;

use thiserror::Error;

use crate::cell::Marker;
use crate::geom::Point;
use crate::grid::Grid;

/// A single violated maze rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error("there must be a start point")]
    MissingStart,
    #[error("there must be an end point")]
    MissingEnd,
    #[error("there can be no more than one start point")]
    MultipleStart,
    #[error("there can be no more than one end point")]
    MultipleEnd,
}

/// Every rule a grid violates, in a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    fn from_unsorted(mut errors: Vec<ValidationError>) -> Self {
        errors.sort();
        errors.dedup();
        Self(errors)
    }

    /// Whether `err` is part of the set.
    pub fn contains(&self, err: ValidationError) -> bool {
        self.0.contains(&err)
    }

    /// The individual errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    /// One message per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The unique start and end coordinates of a valid grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoints {
    pub start: Point,
    pub end: Point,
}

/// Check that `grid` has exactly one start and exactly one end.
///
/// All violations are collected; a grid with no start and two ends reports
/// both `MissingStart` and `MultipleEnd`.
pub fn validate(grid: &Grid) -> Result<Endpoints, ValidationErrors> {
    let starts = grid.positions(|m| *m == Marker::Start);
    let ends = grid.positions(|m| *m == Marker::End);

    let mut errors = Vec::new();
    match starts.len() {
        0 => errors.push(ValidationError::MissingStart),
        1 => {}
        _ => errors.push(ValidationError::MultipleStart),
    }
    match ends.len() {
        0 => errors.push(ValidationError::MissingEnd),
        1 => {}
        _ => errors.push(ValidationError::MultipleEnd),
    }

    if !errors.is_empty() {
        return Err(ValidationErrors::from_unsorted(errors));
    }
    Ok(Endpoints {
        start: starts[0],
        end: ends[0],
    })
}

impl Grid {
    /// See [`validate`].
    pub fn validate(&self) -> Result<Endpoints, ValidationErrors> {
        validate(self)
    }
}
