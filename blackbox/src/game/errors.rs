use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a ray could not be fired.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The coordinate is outside the grid.
    #[error("the coordinate is out of bounds")]
    OutOfBounds,

    /// Rays may only be fired from non-corner border cells.
    #[error("rays can only be fired from an edge cell")]
    NotEdge,

    /// The ray could not be traced to an outcome. Only possible on a malformed board.
    #[error("the ray could not be traced to an exit")]
    RayLost,
}

/// Error returned when trying to fire a ray.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot from {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the ray could not be fired.
    reason: CannotShootReason,

    /// The cell the ray was fired from.
    coord: Coordinate,
}

impl ShotError {
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate the shot was fired from.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Reason why a guess was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotGuessReason {
    /// The coordinate is outside the grid.
    #[error("the coordinate is out of bounds")]
    OutOfBounds,

    /// Atoms can only be guessed inside the border.
    #[error("atoms can only be guessed on interior cells")]
    NotInterior,
}

/// Error returned when trying to guess an atom position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not guess {coord}: {reason}")]
pub struct GuessError {
    /// Reason why the guess was rejected.
    reason: CannotGuessReason,

    /// The guessed cell.
    coord: Coordinate,
}

impl GuessError {
    pub(super) fn new(reason: CannotGuessReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the guess was rejected.
    pub fn reason(&self) -> CannotGuessReason {
        self.reason
    }

    /// Get the guessed coordinate.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
