//! The 3×3 board.
//!
//! `Board` is pure data plus accessors: cell contents and a move count.
//!
//! ## Invariants
//!
//! - A cell transitions from `Empty` to a player symbol at most once;
//!   occupied cells are never overwritten.
//! - `move_count` always equals the number of occupied cells, and never
//!   exceeds 9.
//!
//! Both invariants hold because `place` is the only mutation and it rejects
//! occupied targets without touching state.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Coord, EngineError, GRID_SIZE};

/// 3×3 grid of cells plus the number of moves made so far.
///
/// ```
/// use tictactoe_engine::board::Board;
/// use tictactoe_engine::core::{Cell, Coord};
///
/// let mut board = Board::new();
/// let center = Coord::new(1, 1).unwrap();
///
/// assert!(board.place(center, Cell::PlayerB).is_ok());
/// assert_eq!(board.get(center), Cell::PlayerB);
/// assert_eq!(board.move_count(), 1);
///
/// // Occupied cells are rejected without mutation.
/// assert!(board.place(center, Cell::PlayerA).is_err());
/// assert_eq!(board.move_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    move_count: u8,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the contents of a cell.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row() as usize][coord.col() as usize]
    }

    /// Place a symbol on an empty cell.
    ///
    /// Fails with [`EngineError::OccupiedCell`] and leaves the board
    /// untouched if the target already holds a symbol.
    pub fn place(&mut self, coord: Coord, symbol: Cell) -> Result<(), EngineError> {
        assert!(symbol.is_player(), "cannot place an empty symbol");

        if !self.get(coord).is_empty() {
            return Err(EngineError::OccupiedCell { coord });
        }

        self.cells[coord.row() as usize][coord.col() as usize] = symbol;
        self.move_count += 1;
        Ok(())
    }

    /// Clear all cells and zero the move count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of moves made so far (0..=9).
    #[must_use]
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Whether all nine cells are occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.move_count == GRID_SIZE * GRID_SIZE
    }

    /// The player whose turn it is, derived from move-count parity.
    #[must_use]
    pub fn to_move(&self) -> Cell {
        Cell::turn_of(self.move_count)
    }

    /// Iterate over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&coord| self.get(coord).is_empty())
    }
}
