//! Game orchestration.
//!
//! `GameController` owns the board exclusively and runs one turn per call:
//! validate and apply the human move, evaluate the rules, and, when a
//! computer mode is active and the game continues, generate and apply the
//! computer's reply within the same call. There are no suspension points
//! and no shared state.
//!
//! One inherited behavior is preserved deliberately: a move submitted after
//! the game has ended silently starts a new game instead of being rejected,
//! mirroring the click-to-restart flow this engine was extracted from.

use tracing::debug;

use crate::ai::MoveGenerator;
use crate::board::Board;
use crate::core::{Cell, Coord, EngineError, GameRng, Mode};
use crate::rules::{self, GameStatus, WinningLine};

/// Orchestrates turns over a single owned [`Board`].
///
/// ```
/// use tictactoe_engine::game::GameController;
/// use tictactoe_engine::core::Mode;
///
/// let mut game = GameController::with_mode(Mode::Hard, 42);
///
/// // Human opens at a corner; the computer replies in the same call.
/// assert_eq!(game.apply_human_move(0, 0), Ok(true));
/// assert_eq!(game.board().move_count(), 2);
///
/// // The opening cell is now occupied.
/// assert_eq!(game.apply_human_move(0, 0), Ok(false));
/// ```
#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    mode: Mode,
    status: GameStatus,
    /// Winning cells awaiting a one-time highlight read.
    pending_line: WinningLine,
    generator: MoveGenerator,
}

impl GameController {
    /// Create a controller in the default two-player mode.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_mode(Mode::default(), seed)
    }

    /// Create a controller with an explicit mode.
    #[must_use]
    pub fn with_mode(mode: Mode, seed: u64) -> Self {
        Self {
            board: Board::new(),
            mode,
            status: GameStatus::InProgress,
            pending_line: WinningLine::new(),
            generator: MoveGenerator::new(GameRng::new(seed)),
        }
    }

    /// Submit the human's move.
    ///
    /// Returns `Ok(true)` when the move was applied (possibly along with a
    /// computer reply), `Ok(false)` when the target cell was occupied (no
    /// state changes), and [`EngineError::InvalidPosition`] for coordinates
    /// outside the grid.
    ///
    /// A call made while the game is over first resets the board and then
    /// applies the move to the fresh game.
    pub fn apply_human_move(&mut self, row: u8, col: u8) -> Result<bool, EngineError> {
        let coord = Coord::new(row, col)?;

        if self.status.is_terminal() {
            debug!("move after game over, starting a new game");
            self.reset();
        }

        let mover = self.board.to_move();
        if self.board.place(coord, mover).is_err() {
            return Ok(false);
        }
        debug!(%coord, symbol = %mover, "human move");

        self.status = rules::evaluate(&self.board, coord);
        if self.finish_if_terminal() {
            return Ok(true);
        }

        if self.mode.is_computer() {
            self.computer_reply(mover.opponent(), mover)?;
        }

        Ok(true)
    }

    /// Generate and apply the computer's move.
    ///
    /// Only called on a non-terminal board, which always has an empty cell,
    /// so the generator always produces a move and placement cannot fail.
    fn computer_reply(&mut self, computer: Cell, human: Cell) -> Result<(), EngineError> {
        let Some(reply) = self
            .generator
            .computer_move(&self.board, self.mode, computer, human)
        else {
            return Ok(());
        };

        self.board.place(reply, computer)?;
        debug!(coord = %reply, symbol = %computer, mode = %self.mode, "computer move");

        self.status = rules::evaluate(&self.board, reply);
        self.finish_if_terminal();
        Ok(())
    }

    /// Record a terminal status; returns whether the game just ended.
    fn finish_if_terminal(&mut self) -> bool {
        match &self.status {
            GameStatus::InProgress => false,
            GameStatus::Won { by, line } => {
                self.pending_line = line.clone();
                debug!(winner = %by, "game over");
                true
            }
            GameStatus::Draw => {
                debug!("game over, draw");
                true
            }
        }
    }

    /// Clear the board and start a fresh game.
    ///
    /// The mode and the RNG are kept; only the game state resets.
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        self.pending_line.clear();
    }

    /// Select the strategy used for the computer's next turn.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read a single cell.
    pub fn cell(&self, row: u8, col: u8) -> Result<Cell, EngineError> {
        Ok(self.board.get(Coord::new(row, col)?))
    }

    /// The board itself, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Take the winning cells for highlighting.
    ///
    /// Yields the three cells of the completed line exactly once; later
    /// calls (and calls when nobody has won) return an empty sequence.
    pub fn drain_winning_line(&mut self) -> WinningLine {
        std::mem::take(&mut self.pending_line)
    }
}
