//! Headings a ray can travel in and the rules for turning them.

use crate::board::Coordinate;

/// Heading of a moving ray. Rows increase to the [`South`](Direction::South) and columns
/// increase to the [`East`](Direction::East).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// One of the two cells flanking a ray's next cell, on the axis across its travel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flank {
    /// The flank with the smaller index: the column to the west of a vertical ray or the
    /// row to the north of a horizontal one.
    Lower,
    /// The flank with the larger index: east of a vertical ray or south of a horizontal
    /// one.
    Upper,
}

impl Direction {
    /// Heading of a ray fired from the given edge cell, pointing into the grid. Returns
    /// `None` if the coordinate is not an edge cell.
    pub fn inward_from(origin: Coordinate) -> Option<Self> {
        if !origin.is_edge() {
            None
        } else if origin.row == 0 {
            Some(Direction::South)
        } else if origin.row == crate::board::GRID_SIZE - 1 {
            Some(Direction::North)
        } else if origin.column == 0 {
            Some(Direction::East)
        } else {
            Some(Direction::West)
        }
    }

    /// Whether this heading runs along a column.
    pub fn is_vertical(self) -> bool {
        match self {
            Direction::North | Direction::South => true,
            Direction::East | Direction::West => false,
        }
    }

    /// The opposite heading.
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Heading after passing an atom on the given flank. The ray turns away from the atom,
    /// so both headings along an axis turn the same way.
    pub fn deflect(self, atom: Flank) -> Self {
        match (self.is_vertical(), atom) {
            (true, Flank::Lower) => Direction::East,
            (true, Flank::Upper) => Direction::West,
            (false, Flank::Lower) => Direction::South,
            (false, Flank::Upper) => Direction::North,
        }
    }

    /// Row and column deltas of a single step in this heading.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The cell one step from `from` in this heading. Returns `None` if that would leave
    /// the top or left of the grid.
    pub fn advance(self, from: Coordinate) -> Option<Coordinate> {
        let (rows, columns) = self.delta();
        from.offset(rows, columns)
    }

    /// The [`Lower`](Flank::Lower) and [`Upper`](Flank::Upper) cells beside `next` across
    /// this heading. A flank that would fall off the top or left of the grid is `None`.
    pub fn flanks(self, next: Coordinate) -> (Option<Coordinate>, Option<Coordinate>) {
        if self.is_vertical() {
            (next.offset(0, -1), next.offset(0, 1))
        } else {
            (next.offset(-1, 0), next.offset(1, 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rays_point_into_the_grid() {
        assert_eq!(
            Direction::inward_from(Coordinate::new(0, 4)),
            Some(Direction::South)
        );
        assert_eq!(
            Direction::inward_from(Coordinate::new(9, 4)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::inward_from(Coordinate::new(4, 0)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::inward_from(Coordinate::new(4, 9)),
            Some(Direction::West)
        );
        assert_eq!(Direction::inward_from(Coordinate::new(0, 0)), None);
        assert_eq!(Direction::inward_from(Coordinate::new(4, 4)), None);
    }

    #[test]
    fn deflection_ignores_sign_of_travel() {
        for &dir in &[Direction::North, Direction::South] {
            assert_eq!(dir.deflect(Flank::Lower), Direction::East);
            assert_eq!(dir.deflect(Flank::Upper), Direction::West);
        }
        for &dir in &[Direction::East, Direction::West] {
            assert_eq!(dir.deflect(Flank::Lower), Direction::South);
            assert_eq!(dir.deflect(Flank::Upper), Direction::North);
        }
    }

    #[test]
    fn flanks_lie_across_travel() {
        let next = Coordinate::new(4, 4);
        assert_eq!(
            Direction::South.flanks(next),
            (Some(Coordinate::new(4, 3)), Some(Coordinate::new(4, 5)))
        );
        assert_eq!(
            Direction::West.flanks(next),
            (Some(Coordinate::new(3, 4)), Some(Coordinate::new(5, 4)))
        );
        assert_eq!(
            Direction::North.flanks(Coordinate::new(3, 0)),
            (None, Some(Coordinate::new(3, 1)))
        );
    }

    #[test]
    fn reverse_is_an_involution() {
        for &dir in &[
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_ne!(dir.reverse(), dir);
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }
}
