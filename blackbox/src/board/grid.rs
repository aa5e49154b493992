//! Storage for the cells of the board.

use crate::{
    board::{Coordinate, GRID_SIZE},
    ray::RayId,
};

/// A single cell in the grid.
#[derive(Debug, Default, Clone)]
pub(super) struct GridCell {
    /// Whether an atom sits in this cell. Fixed once the board is built.
    pub(super) atom: bool,

    /// Whether a correct guess has landed on this cell.
    pub(super) selected: bool,

    /// The most recent ray fired from this cell, if any.
    pub(super) originating_ray: Option<RayId>,

    /// Origin of the most recent ray whose path ended at this cell, if any.
    pub(super) terminating_ray: Option<Coordinate>,
}

impl GridCell {
    pub(super) fn set_atom(&mut self, present: bool) {
        self.atom = present;
    }

    pub(super) fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }

    /// Later shots from the same cell overwrite earlier ones.
    pub(super) fn record_originating_ray(&mut self, ray: RayId) {
        self.originating_ray = Some(ray);
    }

    /// Later rays ending at the same cell overwrite earlier ones.
    pub(super) fn record_terminating_ray(&mut self, origin: Coordinate) {
        self.terminating_ray = Some(origin);
    }
}

/// Fixed-size grid of [`GridCell`]s stored row by row.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..GRID_SIZE * GRID_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Convert a coordinate to an index into the cell storage. Returns `None` if the
    /// coordinate is outside the grid.
    fn linearize(coord: &Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.row * GRID_SIZE + coord.column)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        Self::linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        Self::linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }

    /// Number of distinct cells holding an atom.
    pub(super) fn atom_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.atom).count()
    }
}
