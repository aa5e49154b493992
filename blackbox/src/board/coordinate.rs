use std::fmt;

/// Number of rows, and of columns, in the grid.
pub const GRID_SIZE: usize = 10;

/// Index of the last row or column.
const LAST: usize = GRID_SIZE - 1;

/// Position of a cell in the grid. Rows increase southward and columns increase eastward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub column: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `column`.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Whether this coordinate lies inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.column < GRID_SIZE
    }

    /// Whether this coordinate is on the outer ring of the grid, corners included.
    pub fn on_border(&self) -> bool {
        self.in_bounds()
            && (self.row == 0 || self.row == LAST || self.column == 0 || self.column == LAST)
    }

    /// Whether this coordinate is one of the four corners of the grid.
    pub fn is_corner(&self) -> bool {
        (self.row == 0 || self.row == LAST) && (self.column == 0 || self.column == LAST)
    }

    /// Whether rays may be fired from this coordinate: on the border but not a corner.
    pub fn is_edge(&self) -> bool {
        self.on_border() && !self.is_corner()
    }

    /// Whether this coordinate is inside the border, where atoms live and guesses land.
    pub fn is_interior(&self) -> bool {
        self.in_bounds() && !self.on_border()
    }

    /// Shift this coordinate by the given row and column deltas. Returns `None` if either
    /// component would go negative. The upper bound is not checked.
    pub fn offset(self, rows: isize, columns: isize) -> Option<Self> {
        Some(Self {
            row: shift(self.row, rows)?,
            column: shift(self.column, columns)?,
        })
    }
}

fn shift(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, column)` pair.
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, column)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.column)
    }
}
