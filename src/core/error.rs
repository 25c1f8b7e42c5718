//! The engine's error taxonomy.
//!
//! Only two things can go wrong: a position outside the grid, or a move on
//! a cell that is already occupied. Both are reported immediately with zero
//! side effects; nothing is retried.

use super::coord::Coord;

/// Errors produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside the 3×3 grid.
    #[display("position ({row}, {col}) is outside the 3x3 grid")]
    InvalidPosition {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// Move attempted on a cell that already holds a symbol.
    #[display("cell {coord} is already occupied")]
    OccupiedCell {
        /// The occupied cell.
        coord: Coord,
    },
}

impl std::error::Error for EngineError {}
