//! Play modes.

use serde::{Deserialize, Serialize};

/// Who (or what) plays the second symbol.
///
/// The mode is mutable between moves and is read once per computer turn, so
/// switching mid-game affects the next computer reply, not past ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans alternate on the same board. The default.
    #[default]
    HumanVsHuman,
    /// Computer picks a random empty cell.
    Easy,
    /// Computer takes an immediate win or block, otherwise plays randomly.
    Medium,
    /// Computer follows the full heuristic decision list.
    Hard,
}

impl Mode {
    /// Whether the computer answers the human's moves in this mode.
    #[must_use]
    pub const fn is_computer(self) -> bool {
        !matches!(self, Mode::HumanVsHuman)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::HumanVsHuman => "two players",
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "impossible",
        })
    }
}
