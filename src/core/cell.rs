//! Cell contents and turn parity.
//!
//! A cell is either empty or owned by one of the two players. Whose turn it
//! is is never stored: it is a pure function of the board's move count.
//! `PlayerB` owns even move counts and therefore always moves first; in the
//! vs-computer modes the human is `PlayerB`.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
///
/// ```
/// use tictactoe_engine::core::Cell;
///
/// assert!(Cell::Empty.is_empty());
/// assert_eq!(Cell::PlayerA.opponent(), Cell::PlayerB);
/// assert_eq!(Cell::PlayerB.symbol(), Some('O'));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No move has been made on this cell.
    #[default]
    Empty,
    /// The second mover (odd move counts). Renders as "X".
    PlayerA,
    /// The first mover (even move counts). Renders as "O".
    PlayerB,
}

impl Cell {
    /// Check whether the cell is unoccupied.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check whether the cell is occupied by a player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !self.is_empty()
    }

    /// The opposing player's symbol.
    ///
    /// `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerA => Cell::PlayerB,
            Cell::PlayerB => Cell::PlayerA,
        }
    }

    /// The player whose turn it is after `move_count` moves.
    ///
    /// Even counts belong to `PlayerB`, odd counts to `PlayerA`.
    #[must_use]
    pub const fn turn_of(move_count: u8) -> Cell {
        if move_count % 2 == 0 {
            Cell::PlayerB
        } else {
            Cell::PlayerA
        }
    }

    /// Display character for an occupied cell, `None` when empty.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some('X'),
            Cell::PlayerB => Some('O'),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Cell::Empty => "-",
            Cell::PlayerA => "X",
            Cell::PlayerB => "O",
        })
    }
}
