//! Win and draw detection.
//!
//! A single move can only complete one of the four lines that pass through
//! it: its column, its row, and (when the move sits on one) each diagonal.
//! [`evaluate`] therefore checks exactly those lines, in that fixed order,
//! instead of re-scanning the whole board.
//!
//! A detected win carries the full three-cell [`WinningLine`], ordered
//! top-to-bottom for columns, left-to-right for rows, and by index 0,1,2
//! for diagonals, so the presentation layer can highlight it directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Cell, Coord};

/// An ordered sequence of the three cells that completed a line.
pub type WinningLine = SmallVec<[Coord; 3]>;

/// Three cells forming a row, column, or diagonal.
pub type Line = [Coord; 3];

/// The main diagonal, (0,0) through (2,2).
pub const MAIN_DIAGONAL: Line = [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)];

/// The anti-diagonal, (0,2) through (2,0).
pub const ANTI_DIAGONAL: Line = [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)];

/// Result of evaluating the board after a move.
///
/// Terminal variants never revert except through an explicit reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning symbol.
        by: Cell,
        /// The completed line, in presentation order.
        line: WinningLine,
    },
    /// All nine cells are filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning symbol, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Cell> {
        match self {
            GameStatus::Won { by, .. } => Some(*by),
            _ => None,
        }
    }
}

/// The column containing `col`, top to bottom.
fn column(col: u8) -> Line {
    [Coord::at(0, col), Coord::at(1, col), Coord::at(2, col)]
}

/// The row containing `row`, left to right.
fn row(row: u8) -> Line {
    [Coord::at(row, 0), Coord::at(row, 1), Coord::at(row, 2)]
}

/// The lines passing through `coord`, in evaluation order:
/// column, row, main diagonal, anti-diagonal.
#[must_use]
pub fn lines_through(coord: Coord) -> SmallVec<[Line; 4]> {
    let mut lines = SmallVec::new();
    lines.push(column(coord.col()));
    lines.push(row(coord.row()));
    if coord.on_main_diagonal() {
        lines.push(MAIN_DIAGONAL);
    }
    if coord.on_anti_diagonal() {
        lines.push(ANTI_DIAGONAL);
    }
    lines
}

/// Evaluate the board after a symbol was placed at `last`.
///
/// Checks only the lines through the last move. Returns
/// [`GameStatus::Won`] with the ordered line on a win,
/// [`GameStatus::Draw`] when the board is full with no winner, and
/// [`GameStatus::InProgress`] otherwise.
#[must_use]
pub fn evaluate(board: &Board, last: Coord) -> GameStatus {
    let symbol = board.get(last);
    assert!(symbol.is_player(), "evaluate called on an empty cell");

    for line in lines_through(last) {
        if line.iter().all(|&c| board.get(c) == symbol) {
            return GameStatus::Won {
                by: symbol,
                line: line.iter().copied().collect(),
            };
        }
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Find the first empty cell (row-major) where `symbol` would complete a
/// line, if one exists.
#[must_use]
pub fn winning_move(board: &Board, symbol: Cell) -> Option<Coord> {
    board
        .empty_cells()
        .find(|&coord| completes_line(board, symbol, coord))
}

/// Whether placing `symbol` on the empty cell `at` would complete a line.
#[must_use]
pub fn completes_line(board: &Board, symbol: Cell, at: Coord) -> bool {
    lines_through(at).iter().any(|line| {
        line.iter()
            .filter(|&&c| c != at)
            .all(|&c| board.get(c) == symbol)
    })
}
