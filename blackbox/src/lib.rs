//! Implementation of the deduction game Black Box.
//!
//! A 10x10 grid hides a handful of atoms in its interior. The player fires rays in from
//! the edge cells and watches where they come out again. A ray that runs into an atom is
//! absorbed, one that passes diagonally next to an atom is bent away from it, and one that
//! passes between two atoms turns back. Each ray entry and each distinct exit costs a
//! point, and each wrong guess at an atom's position costs five.
//!
//! [`board`] holds the grid, its cells, and the strategies used to place atoms.
//!
//! [`ray`] implements the stepping state machine that traces a single probe through the
//! grid.
//!
//! [`game`] ties the two together, keeping the score, the unguessed atoms, and the
//! history of shots and guesses.

pub mod board;
pub mod game;
pub mod ray;
