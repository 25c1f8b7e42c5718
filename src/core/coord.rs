//! Board coordinates.
//!
//! A `Coord` is always in range: construction validates `row` and `col`
//! against the 3×3 grid and rejects anything else with
//! [`EngineError::InvalidPosition`]. Code downstream of a `Coord` never has
//! to re-check bounds.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Board side length. The engine is fixed at 3×3.
pub const GRID_SIZE: u8 = 3;

/// A validated position on the 3×3 board.
///
/// ```
/// use tictactoe_engine::core::Coord;
///
/// let coord = Coord::new(1, 2).unwrap();
/// assert_eq!(coord.row(), 1);
/// assert_eq!(coord.col(), 2);
///
/// assert!(Coord::new(3, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

/// The center cell.
pub const CENTER: Coord = Coord::at(1, 1);

/// The four corners, in the scan order the hard strategy uses.
pub const CORNERS: [Coord; 4] = [
    Coord::at(0, 0),
    Coord::at(0, 2),
    Coord::at(2, 0),
    Coord::at(2, 2),
];

impl Coord {
    /// Create a coordinate, rejecting out-of-range rows or columns.
    pub fn new(row: u8, col: u8) -> Result<Self, EngineError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(EngineError::InvalidPosition { row, col })
        }
    }

    /// Create a coordinate from literals known to be in range.
    ///
    /// Used for the fixed line and corner tables. Callers must pass
    /// `row, col < 3`.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Row index (0-based).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-based).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Whether this coordinate lies on the main diagonal.
    #[must_use]
    pub const fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Whether this coordinate lies on the anti-diagonal.
    #[must_use]
    pub const fn on_anti_diagonal(self) -> bool {
        self.row + self.col == GRID_SIZE - 1
    }

    /// Iterate over all nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coord::at(row, col)))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = EngineError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
