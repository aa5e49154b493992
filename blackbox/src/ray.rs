//! Tracing of a single probe ray through the board.
//!
//! A ray is fired from an edge cell and advances one cell at a time. Before each move it
//! looks at the cell ahead:
//!
//! - an atom there absorbs the ray,
//! - a border cell there is where the ray leaves the grid,
//! - otherwise the two cells flanking the one ahead are probed for atoms. One atom bends
//!   the ray away from it, two atoms send it back the way it came. On the very first
//!   step any flanking atom reflects the ray straight back out of its origin.
//!
//! After a turn the cell ahead in the new heading is checked for an atom or the border
//! before the ray moves into it.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Coordinate, GRID_SIZE};

pub use self::direction::{Direction, Flank};

mod direction;

/// Upper bound on the steps a single ray may take. Every step either ends the ray or moves
/// it into an interior cell, and there are only so many (cell, heading) states.
const MAX_STEPS: usize = 4 * GRID_SIZE * GRID_SIZE;

/// Identifies a fired ray by the order it was shot in, starting from zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RayId(usize);

impl RayId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this ray in the shot history.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RayId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// How a ray's trajectory ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RayOutcome {
    /// The ray left the grid through the given border cell. A reflection exits through
    /// its own origin.
    Exited(Coordinate),
    /// The ray ran into an atom.
    Absorbed,
}

impl RayOutcome {
    /// The cell the ray left through, if it was not absorbed.
    pub fn exit(&self) -> Option<Coordinate> {
        match *self {
            RayOutcome::Exited(coord) => Some(coord),
            RayOutcome::Absorbed => None,
        }
    }
}

/// Error returned when a ray cannot be traced to an outcome.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RayError {
    /// The ray stepped off the grid without crossing a border cell.
    #[error("ray from {origin} left the grid at {from}")]
    LeftGrid { origin: Coordinate, from: Coordinate },

    /// The ray was still moving after the step limit.
    #[error("ray from {origin} did not terminate after {steps} steps")]
    Trapped { origin: Coordinate, steps: usize },
}

/// A single probe fired into the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ray {
    /// Identity of this ray in its game.
    id: RayId,

    /// Edge cell the ray was fired from.
    origin: Coordinate,

    /// Cell the ray currently occupies.
    position: Coordinate,

    /// Current heading. `None` once the ray has stopped.
    heading: Option<Direction>,

    /// How the ray ended, once it has.
    outcome: Option<RayOutcome>,

    /// Every cell the ray has occupied, starting at the origin and including the exit.
    path: Vec<Coordinate>,
}

impl Ray {
    /// Create a ray fired from the given edge cell. Returns `None` if `origin` is not an
    /// edge cell.
    pub fn new(id: RayId, origin: Coordinate) -> Option<Self> {
        Direction::inward_from(origin).map(|heading| Self {
            id,
            origin,
            position: origin,
            heading: Some(heading),
            outcome: None,
            path: vec![origin],
        })
    }

    /// Get the ID of this ray.
    pub fn id(&self) -> RayId {
        self.id
    }

    /// The edge cell this ray was fired from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The cell this ray currently occupies.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Current heading, or `None` if the ray has stopped.
    pub fn direction(&self) -> Option<Direction> {
        self.heading
    }

    /// How this ray ended, or `None` while it is still moving.
    pub fn outcome(&self) -> Option<RayOutcome> {
        self.outcome
    }

    /// Whether this ray has reached its outcome.
    pub fn is_stopped(&self) -> bool {
        self.heading.is_none()
    }

    /// Whether this ray came back out through the cell it was fired from.
    pub fn is_reflection(&self) -> bool {
        self.outcome == Some(RayOutcome::Exited(self.origin))
    }

    /// The cells this ray has occupied in order, from the origin to the exit cell.
    /// Absorbed rays end on the cell before the atom.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Advance until the ray stops, returning its outcome.
    pub fn trace(&mut self, board: &Board) -> Result<RayOutcome, RayError> {
        for _ in 0..MAX_STEPS {
            if let Some(outcome) = self.step(board)? {
                return Ok(outcome);
            }
        }
        Err(RayError::Trapped {
            origin: self.origin,
            steps: MAX_STEPS,
        })
    }

    /// Advance the ray by a single step. Returns the outcome once the ray has stopped,
    /// and `None` while it keeps moving. Stepping a stopped ray does nothing.
    pub fn step(&mut self, board: &Board) -> Result<Option<RayOutcome>, RayError> {
        let heading = match self.heading {
            Some(heading) => heading,
            None => return Ok(self.outcome),
        };

        let next = self.ahead(heading)?;
        if let Some(outcome) = self.collide(board, next) {
            return Ok(Some(outcome));
        }

        let (lower, upper) = heading.flanks(next);
        let lower = lower.map_or(false, |coord| board.atom_at(coord));
        let upper = upper.map_or(false, |coord| board.atom_at(coord));
        let turn = match (lower, upper) {
            (false, false) => None,
            _ if self.position == self.origin => {
                log::trace!("Ray {} reflected at {}", self.id, self.origin);
                return Ok(Some(self.finish(RayOutcome::Exited(self.origin))));
            }
            (true, true) => Some(heading.reverse()),
            (true, false) => Some(heading.deflect(Flank::Lower)),
            (false, true) => Some(heading.deflect(Flank::Upper)),
        };

        let next = match turn {
            None => next,
            Some(heading) => {
                log::trace!("Ray {} turned {:?} at {}", self.id, heading, self.position);
                self.heading = Some(heading);
                let next = self.ahead(heading)?;
                if let Some(outcome) = self.collide(board, next) {
                    return Ok(Some(outcome));
                }
                next
            }
        };

        log::trace!("Ray {} moved to {}", self.id, next);
        self.position = next;
        self.path.push(next);
        Ok(None)
    }

    /// The cell one step ahead in the given heading.
    fn ahead(&self, heading: Direction) -> Result<Coordinate, RayError> {
        heading
            .advance(self.position)
            .filter(Coordinate::in_bounds)
            .ok_or(RayError::LeftGrid {
                origin: self.origin,
                from: self.position,
            })
    }

    /// Stop the ray if `next` holds an atom or lies on the border.
    fn collide(&mut self, board: &Board, next: Coordinate) -> Option<RayOutcome> {
        if board.atom_at(next) {
            Some(self.finish(RayOutcome::Absorbed))
        } else if next.on_border() {
            Some(self.finish(RayOutcome::Exited(next)))
        } else {
            None
        }
    }

    fn finish(&mut self, outcome: RayOutcome) -> RayOutcome {
        if let RayOutcome::Exited(exit) = outcome {
            if exit != self.origin {
                self.position = exit;
                self.path.push(exit);
            }
        }
        self.heading = None;
        self.outcome = Some(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::FixedPlacement;

    fn board(atoms: &[(usize, usize)]) -> Board {
        Board::new(atoms.len(), FixedPlacement::new(atoms.iter().copied())).unwrap()
    }

    fn fire(atoms: &[(usize, usize)], origin: (usize, usize)) -> Ray {
        let board = board(atoms);
        let mut ray = Ray::new(RayId::new(0), origin.into()).unwrap();
        ray.trace(&board).unwrap();
        ray
    }

    fn coords(cells: &[(usize, usize)]) -> Vec<Coordinate> {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn only_edges_fire() {
        assert!(Ray::new(RayId::new(0), Coordinate::new(0, 0)).is_none());
        assert!(Ray::new(RayId::new(0), Coordinate::new(5, 5)).is_none());
        let ray = Ray::new(RayId::new(0), Coordinate::new(5, 9)).unwrap();
        assert_eq!(ray.direction(), Some(Direction::West));
        assert_eq!(ray.position(), ray.origin());
        assert!(!ray.is_stopped());
    }

    #[test]
    fn passes_straight_through() {
        let ray = fire(&[(8, 8)], (0, 5));
        assert_eq!(ray.outcome(), Some(RayOutcome::Exited(Coordinate::new(9, 5))));
        assert_eq!(ray.path().len(), 10);
        assert_eq!(ray.position(), Coordinate::new(9, 5));
        assert!(ray.is_stopped());
        assert!(!ray.is_reflection());
    }

    #[test]
    fn absorbed_by_atom_ahead() {
        let ray = fire(&[(4, 4)], (0, 4));
        assert_eq!(ray.outcome(), Some(RayOutcome::Absorbed));
        assert_eq!(ray.outcome().unwrap().exit(), None);
        assert_eq!(ray.path(), &coords(&[(0, 4), (1, 4), (2, 4), (3, 4)])[..]);
    }

    #[test]
    fn reflects_from_atom_beside_first_step() {
        let ray = fire(&[(1, 5)], (0, 4));
        assert!(ray.is_reflection());
        assert_eq!(ray.path(), &coords(&[(0, 4)])[..]);
    }

    #[test]
    fn reflects_from_two_atoms_beside_first_step() {
        let ray = fire(&[(1, 3), (1, 5)], (0, 4));
        assert!(ray.is_reflection());
        assert_eq!(ray.path().len(), 1);
    }

    #[test]
    fn deflects_away_from_single_atom() {
        let ray = fire(&[(3, 5)], (0, 4));
        assert_eq!(ray.outcome(), Some(RayOutcome::Exited(Coordinate::new(2, 0))));
        assert_eq!(
            ray.path(),
            &coords(&[(0, 4), (1, 4), (2, 4), (2, 3), (2, 2), (2, 1), (2, 0)])[..]
        );
    }

    #[test]
    fn deflects_both_ways_on_horizontal_travel() {
        let north = fire(&[(6, 6)], (5, 0));
        assert_eq!(north.outcome(), Some(RayOutcome::Exited(Coordinate::new(0, 5))));
        let south = fire(&[(4, 6)], (5, 0));
        assert_eq!(south.outcome(), Some(RayOutcome::Exited(Coordinate::new(9, 5))));
    }

    #[test]
    fn deflection_can_exit_immediately() {
        let ray = fire(&[(2, 3)], (1, 0));
        assert_eq!(ray.outcome(), Some(RayOutcome::Exited(Coordinate::new(0, 2))));
        assert_eq!(ray.path(), &coords(&[(1, 0), (1, 1), (1, 2), (0, 2)])[..]);
    }

    #[test]
    fn reverses_between_two_atoms() {
        let ray = fire(&[(3, 3), (3, 5)], (0, 4));
        assert!(ray.is_reflection());
        assert_eq!(ray.path(), &coords(&[(0, 4), (1, 4), (2, 4), (1, 4)])[..]);
    }

    #[test]
    fn follows_multiple_deflections() {
        let ray = fire(&[(3, 2), (3, 5)], (0, 4));
        assert_eq!(ray.outcome(), Some(RayOutcome::Exited(Coordinate::new(0, 3))));
        assert_eq!(
            ray.path(),
            &coords(&[(0, 4), (1, 4), (2, 4), (2, 3), (1, 3), (0, 3)])[..]
        );
    }

    #[test]
    fn stepping_a_stopped_ray_is_a_no_op() {
        let board = board(&[(4, 4)]);
        let mut ray = Ray::new(RayId::new(3), Coordinate::new(0, 4)).unwrap();
        assert_eq!(ray.step(&board).unwrap(), None);
        assert_eq!(ray.position(), Coordinate::new(1, 4));
        assert_eq!(ray.trace(&board).unwrap(), RayOutcome::Absorbed);
        assert_eq!(ray.step(&board).unwrap(), Some(RayOutcome::Absorbed));
        assert_eq!(ray.path().len(), 4);
        assert_eq!(ray.id().to_string(), "4");
    }
}
