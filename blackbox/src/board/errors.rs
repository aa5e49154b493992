//! Errors used by the [`Board`](crate::board::Board).

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when accessing a cell outside the 10x10 grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord} is outside the grid")]
pub struct CoordinateOutOfRange {
    /// The offending coordinate.
    coord: Coordinate,
}

impl CoordinateOutOfRange {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// Get the coordinate that was out of range.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when a board could not be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// Fewer than one atom was requested, or the placement produced none.
    #[error("at least one atom is required, got {requested}")]
    InvalidAtomCount { requested: usize },

    /// The placement strategy put an atom outside the grid.
    #[error("could not place atom: {0}")]
    OutOfRange(#[from] CoordinateOutOfRange),
}
