//! Types that make up the game board.

use crate::ray::RayId;

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, GRID_SIZE},
    errors::{CoordinateOutOfRange, SetupError},
    placement::{AtomPlacement, FixedPlacement},
};
#[cfg(feature = "rng_gen")]
pub use self::placement::{DistinctPlacement, UniformPlacement};

mod coordinate;
mod errors;
mod grid;
pub mod placement;

/// Read-only view of a single cell, suitable for display.
///
/// The atom flag is deliberately not exposed directly: a cell only reports an atom once
/// it has been correctly guessed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CellRef {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether a correct guess marked this cell.
    selected: bool,

    /// Whether this cell holds an atom that has been found.
    revealed_atom: bool,

    /// Most recent ray fired from this cell.
    originating_ray: Option<RayId>,

    /// Origin of the most recent ray that ended here.
    terminating_ray: Option<Coordinate>,
}

impl CellRef {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether rays may be fired from this cell.
    pub fn is_edge(&self) -> bool {
        self.coord.is_edge()
    }

    /// Whether this cell is a corner of the grid.
    pub fn is_corner(&self) -> bool {
        self.coord.is_corner()
    }

    /// Whether a correct guess has marked this cell.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Whether this cell is known to hold an atom. Only true after a correct guess.
    pub fn revealed_atom(&self) -> bool {
        self.revealed_atom
    }

    /// The ray most recently fired from this cell, if any.
    pub fn originating_ray(&self) -> Option<RayId> {
        self.originating_ray
    }

    /// The origin of the ray that most recently ended at this cell, if any.
    pub fn terminating_ray(&self) -> Option<Coordinate> {
        self.terminating_ray
    }
}

/// The 10x10 grid and its atom layout.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,

    /// Atom positions as produced by the placement, repeats included.
    atoms: Vec<Coordinate>,
}

impl Board {
    /// Build a board with `count` atoms positioned by `placement`. Fails if `count` is
    /// zero, if the placement produces no atoms, or if any atom falls outside the grid.
    pub fn new<P: AtomPlacement>(count: usize, mut placement: P) -> Result<Self, SetupError> {
        if count < 1 {
            return Err(SetupError::InvalidAtomCount { requested: count });
        }
        let atoms = placement.place(count);
        if atoms.is_empty() {
            return Err(SetupError::InvalidAtomCount { requested: 0 });
        }

        let mut grid = Grid::new();
        for coord in &atoms {
            grid.get_mut(coord)
                .ok_or_else(|| CoordinateOutOfRange::new(*coord))?
                .set_atom(true);
            if !coord.is_interior() {
                log::warn!("Atom placed on the border at {}", coord);
            }
        }

        let distinct = grid.atom_count();
        if distinct < atoms.len() {
            log::warn!(
                "Placement repeated cells, {} atoms requested but only {} distinct",
                atoms.len(),
                distinct
            );
        }
        log::debug!("Built board with {} atoms", distinct);
        Ok(Self { grid, atoms })
    }

    /// Get a view of the cell at the given coordinate. Returns `None` if the coordinate is
    /// out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(&coord).map(|cell| CellRef {
            coord,
            selected: cell.selected,
            revealed_atom: cell.atom && cell.selected,
            originating_ray: cell.originating_ray,
            terminating_ray: cell.terminating_ray,
        })
    }

    /// Get a view of the cell at the given coordinate, failing if it is out of bounds.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellRef, CoordinateOutOfRange> {
        self.get(coord).ok_or_else(|| CoordinateOutOfRange::new(coord))
    }

    /// The atom positions the board was built from, in placement order and including
    /// any repeats.
    pub fn atom_positions(&self) -> &[Coordinate] {
        &self.atoms
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the cells
    /// of that row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef>> {
        (0..GRID_SIZE).map(move |row| {
            (0..GRID_SIZE).filter_map(move |column| self.get(Coordinate::new(row, column)))
        })
    }

    /// Whether an atom sits at the given coordinate. Coordinates off the grid hold no atom.
    pub(crate) fn atom_at(&self, coord: Coordinate) -> bool {
        self.grid.get(&coord).map_or(false, |cell| cell.atom)
    }

    pub(crate) fn record_originating_ray(
        &mut self,
        coord: Coordinate,
        ray: RayId,
    ) -> Result<(), CoordinateOutOfRange> {
        self.cell_mut(coord)?.record_originating_ray(ray);
        Ok(())
    }

    pub(crate) fn record_terminating_ray(
        &mut self,
        coord: Coordinate,
        origin: Coordinate,
    ) -> Result<(), CoordinateOutOfRange> {
        self.cell_mut(coord)?.record_terminating_ray(origin);
        Ok(())
    }

    /// Mark the cell as found. Cells that are already marked stay marked, so finding a
    /// repeated atom twice does not clear the mark.
    pub(crate) fn select(&mut self, coord: Coordinate) -> Result<(), CoordinateOutOfRange> {
        let cell = self.cell_mut(coord)?;
        if !cell.selected {
            cell.toggle_selected();
        }
        Ok(())
    }

    fn cell_mut(
        &mut self,
        coord: Coordinate,
    ) -> Result<&mut grid::GridCell, CoordinateOutOfRange> {
        self.grid
            .get_mut(&coord)
            .ok_or_else(|| CoordinateOutOfRange::new(coord))
    }
}
