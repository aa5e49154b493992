//! A single session of Black Box.
//!
//! [`GameSetup`] chooses the atom count and placement, and [`GameSetup::start`] builds the
//! [`Game`]. The game fires rays, takes guesses, and keeps the score. It never ends
//! itself: [`Game::status`] reads the counters, and the caller decides what to do with a
//! win or a loss.

#[cfg(feature = "rng_gen")]
use rand::rngs::ThreadRng;

#[cfg(feature = "rng_gen")]
use crate::board::UniformPlacement;
use crate::{
    board::{AtomPlacement, Board, CellRef, Coordinate, FixedPlacement, SetupError},
    ray::{Ray, RayId, RayOutcome},
};

pub use self::errors::{CannotGuessReason, CannotShootReason, GuessError, ShotError};

mod errors;

/// Score at the start of every game.
pub const STARTING_SCORE: i32 = 25;

/// Points lost for every ray fired.
pub const ENTRY_COST: i32 = 1;

/// Points lost when a ray leaves through a cell other than its origin.
pub const EXIT_COST: i32 = 1;

/// Points lost for guessing a cell with no unfound atom.
pub const MISSED_GUESS_COST: i32 = 5;

/// Handles setup for the game. Acts as a builder for [`Game`].
#[derive(Debug, Clone)]
pub struct GameSetup<P> {
    /// Number of atoms to place.
    count: usize,

    /// Strategy used to position the atoms.
    placement: P,
}

#[cfg(feature = "rng_gen")]
impl GameSetup<UniformPlacement<ThreadRng>> {
    /// Set up a game with `count` atoms placed uniformly at random.
    pub fn new(count: usize) -> Self {
        Self::with_placement(count, UniformPlacement::new())
    }
}

impl GameSetup<FixedPlacement> {
    /// Set up a game with atoms at exactly the given coordinates.
    pub fn with_atoms<I: IntoIterator<Item = C>, C: Into<Coordinate>>(atoms: I) -> Self {
        let placement = FixedPlacement::new(atoms);
        Self::with_placement(placement.len(), placement)
    }
}

impl<P: AtomPlacement> GameSetup<P> {
    /// Set up a game with `count` atoms positioned by `placement`.
    pub fn with_placement(count: usize, placement: P) -> Self {
        Self { count, placement }
    }

    /// Replace the placement strategy, keeping the atom count.
    pub fn placement<Q: AtomPlacement>(self, placement: Q) -> GameSetup<Q> {
        GameSetup {
            count: self.count,
            placement,
        }
    }

    /// Number of atoms that will be requested from the placement.
    pub fn atom_count(&self) -> usize {
        self.count
    }

    /// Build the board and start the game. Fails if the atom count is below one or the
    /// placement produced coordinates off the grid.
    pub fn start(self) -> Result<Game, SetupError> {
        Board::new(self.count, self.placement).map(Game::new)
    }
}

/// How the counters of a game should be read.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    /// Atoms remain to be found and the score is above zero.
    InProgress,
    /// Every atom has been found.
    Won,
    /// The score has dropped to zero or below.
    Lost,
}

/// Handles gameplay.
#[derive(Debug, Clone)]
pub struct Game {
    /// Board holding the atoms and the display annotations.
    board: Board,

    /// Current score.
    score: i32,

    /// Atoms not yet found. Repeated placements appear once per repeat.
    remaining: Vec<Coordinate>,

    /// Every guess made, in order.
    guesses: Vec<Coordinate>,

    /// Every ray fired, in order. Indexed by [`RayId`].
    rays: Vec<Ray>,
}

impl Game {
    /// Start a game on the given board.
    pub fn new(board: Board) -> Self {
        let remaining = board.atom_positions().to_vec();
        Self {
            board,
            score: STARTING_SCORE,
            remaining,
            guesses: Vec::new(),
            rays: Vec::new(),
        }
    }

    /// The current score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of atoms that have not been found yet.
    pub fn atoms_remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Read the counters: all atoms found is a win, a score of zero or less is a loss.
    pub fn status(&self) -> GameStatus {
        if self.remaining.is_empty() {
            GameStatus::Won
        } else if self.score <= 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Get the board, for display.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get a view of the cell at the given coordinate. Returns `None` if the coordinate is
    /// out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef> {
        self.board.get(coord)
    }

    /// Every guess made so far, in order.
    pub fn guesses(&self) -> &[Coordinate] {
        &self.guesses
    }

    /// Every ray fired so far, in order.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Get the ray with the given ID.
    pub fn ray(&self, id: RayId) -> Option<&Ray> {
        self.rays.get(id.index())
    }

    /// Positions of the atoms not found yet. Intended for revealing the board once the
    /// game is over.
    pub fn reveal_atoms(&self) -> &[Coordinate] {
        &self.remaining
    }

    /// Fire a ray from the given edge cell.
    ///
    /// Every shot costs [`ENTRY_COST`]. A ray that leaves through a different cell costs
    /// [`EXIT_COST`] more and its exit is returned. Reflections and absorptions return
    /// `None`; the fired ray is available from [`Game::rays`] to tell them apart.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<Option<Coordinate>, ShotError> {
        if !coord.in_bounds() {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        let id = RayId::new(self.rays.len());
        let mut ray = Ray::new(id, coord)
            .ok_or_else(|| ShotError::new(CannotShootReason::NotEdge, coord))?;
        let outcome = ray.trace(&self.board).map_err(|err| {
            log::error!("{}", err);
            ShotError::new(CannotShootReason::RayLost, coord)
        })?;

        self.board
            .record_originating_ray(coord, id)
            .map_err(|_| ShotError::new(CannotShootReason::OutOfBounds, coord))?;
        self.score -= ENTRY_COST;

        let exit = match outcome {
            RayOutcome::Absorbed => None,
            RayOutcome::Exited(exit) => {
                self.board
                    .record_terminating_ray(exit, coord)
                    .map_err(|_| ShotError::new(CannotShootReason::RayLost, coord))?;
                if exit == coord {
                    None
                } else {
                    self.score -= EXIT_COST;
                    Some(exit)
                }
            }
        };
        log::debug!(
            "Ray {} from {} ended with {:?}, score {}",
            id,
            coord,
            outcome,
            self.score
        );
        self.rays.push(ray);
        Ok(exit)
    }

    /// Guess that an atom sits at the given interior cell.
    ///
    /// A correct guess removes one matching atom, marks the cell as found, and returns
    /// `true`. Any other guess costs [`MISSED_GUESS_COST`] and returns `false`, including
    /// guessing an atom that was already found. Every accepted guess is logged.
    pub fn guess(&mut self, coord: Coordinate) -> Result<bool, GuessError> {
        if !coord.in_bounds() {
            return Err(GuessError::new(CannotGuessReason::OutOfBounds, coord));
        }
        if !coord.is_interior() {
            return Err(GuessError::new(CannotGuessReason::NotInterior, coord));
        }

        self.guesses.push(coord);
        let found = match self.remaining.iter().position(|&atom| atom == coord) {
            Some(index) => {
                self.remaining.remove(index);
                self.board
                    .select(coord)
                    .map_err(|_| GuessError::new(CannotGuessReason::OutOfBounds, coord))?;
                true
            }
            None => {
                self.score -= MISSED_GUESS_COST;
                false
            }
        };
        log::debug!(
            "Guess at {} was {}, score {}, {} atoms left",
            coord,
            if found { "correct" } else { "wrong" },
            self.score,
            self.remaining.len()
        );
        Ok(found)
    }
}
