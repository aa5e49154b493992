//! Strategies for choosing where atoms go when a board is built.
//!
//! Placement is kept separate from the board so that the layout policy can be swapped
//! without touching the grid or the ray tracing. [`UniformPlacement`] reproduces the
//! classic behavior where every atom is sampled independently and two atoms may land on
//! the same cell. [`DistinctPlacement`] never repeats a cell. [`FixedPlacement`] uses an
//! explicit list, and any `FnMut(usize) -> Vec<Coordinate>` closure also works.

#[cfg(feature = "rng_gen")]
use once_cell::sync::Lazy;
#[cfg(feature = "rng_gen")]
use rand::{distributions::Uniform, rngs::ThreadRng, Rng};

use crate::board::Coordinate;
#[cfg(feature = "rng_gen")]
use crate::board::GRID_SIZE;

/// Chooses the cells that hold atoms.
pub trait AtomPlacement {
    /// Produce positions for `count` atoms. Repeated coordinates are allowed; the board
    /// keeps the list as given and only marks each cell once.
    fn place(&mut self, count: usize) -> Vec<Coordinate>;
}

impl<F: FnMut(usize) -> Vec<Coordinate>> AtomPlacement for F {
    fn place(&mut self, count: usize) -> Vec<Coordinate> {
        self(count)
    }
}

/// Places atoms at a predetermined list of coordinates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FixedPlacement(Vec<Coordinate>);

impl FixedPlacement {
    /// Construct a placement that will put atoms at the given coordinates.
    pub fn new<I: IntoIterator<Item = C>, C: Into<Coordinate>>(atoms: I) -> Self {
        Self(atoms.into_iter().map(Into::into).collect())
    }

    /// Number of atoms in the list, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AtomPlacement for FixedPlacement {
    /// Returns at most `count` coordinates from the front of the list.
    fn place(&mut self, count: usize) -> Vec<Coordinate> {
        self.0.iter().copied().take(count).collect()
    }
}

/// Range of rows and columns that atoms are sampled from: the interior of the grid.
#[cfg(feature = "rng_gen")]
static INTERIOR_RANGE: Lazy<Uniform<usize>> = Lazy::new(|| Uniform::new(1, GRID_SIZE - 1));

/// Samples the row and column of every atom independently and uniformly from the
/// interior. Atoms may coincide, leaving fewer distinct atoms on the board than requested.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct UniformPlacement<R> {
    rng: R,
}

#[cfg(feature = "rng_gen")]
impl UniformPlacement<ThreadRng> {
    /// Sample using the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

#[cfg(feature = "rng_gen")]
impl Default for UniformPlacement<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> UniformPlacement<R> {
    /// Sample using the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> AtomPlacement for UniformPlacement<R> {
    fn place(&mut self, count: usize) -> Vec<Coordinate> {
        let rng = &mut self.rng;
        (0..count)
            .map(|_| {
                let row = rng.sample(&*INTERIOR_RANGE);
                let column = rng.sample(&*INTERIOR_RANGE);
                Coordinate::new(row, column)
            })
            .collect()
    }
}

/// Samples distinct interior cells, so the board always holds exactly the requested
/// number of atoms. Requests beyond the number of interior cells fill the interior.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct DistinctPlacement<R> {
    rng: R,
}

#[cfg(feature = "rng_gen")]
impl DistinctPlacement<ThreadRng> {
    /// Sample using the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

#[cfg(feature = "rng_gen")]
impl Default for DistinctPlacement<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> DistinctPlacement<R> {
    /// Sample using the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> AtomPlacement for DistinctPlacement<R> {
    fn place(&mut self, count: usize) -> Vec<Coordinate> {
        let side = GRID_SIZE - 2;
        let cells = side * side;
        if count > cells {
            log::warn!(
                "Requested {} atoms but only {} interior cells exist, filling the interior",
                count,
                cells
            );
        }
        rand::seq::index::sample(&mut self.rng, cells, count.min(cells))
            .into_iter()
            .map(|i| Coordinate::new(1 + i / side, 1 + i % side))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_placement_truncates_to_count() {
        let mut placement = FixedPlacement::new(vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(
            placement.place(2),
            vec![Coordinate::new(1, 1), Coordinate::new(2, 2)]
        );
        assert_eq!(placement.place(5).len(), 3);
    }

    #[test]
    fn closures_are_placements() {
        let mut placement = |count: usize| vec![Coordinate::new(4, 4); count];
        assert_eq!(placement.place(3), vec![Coordinate::new(4, 4); 3]);
    }

    #[cfg(feature = "rng_gen")]
    mod random {
        use rand::{rngs::StdRng, SeedableRng};

        use super::*;

        #[test]
        fn uniform_placement_stays_inside() {
            let mut placement = UniformPlacement::with_rng(StdRng::seed_from_u64(7));
            let atoms = placement.place(200);
            assert_eq!(atoms.len(), 200);
            assert!(atoms.iter().all(Coordinate::is_interior));
        }

        #[test]
        fn distinct_placement_never_repeats() {
            let mut placement = DistinctPlacement::with_rng(StdRng::seed_from_u64(7));
            let mut atoms = placement.place(30);
            assert!(atoms.iter().all(Coordinate::is_interior));
            atoms.sort();
            atoms.dedup();
            assert_eq!(atoms.len(), 30);
        }

        #[test]
        fn distinct_placement_caps_at_interior() {
            let mut placement = DistinctPlacement::with_rng(StdRng::seed_from_u64(7));
            assert_eq!(placement.place(100).len(), 64);
        }
    }
}
