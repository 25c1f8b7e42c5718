//! # tictactoe-engine
//!
//! A tic-tac-toe game engine with tiered computer opponents.
//!
//! ## Design Principles
//!
//! 1. **Narrow boundary**: presentation layers only submit moves and read
//!    back the board, the status, and the winning cells. Everything else
//!    is internal.
//!
//! 2. **Derived, not stored**: whose turn it is follows from move-count
//!    parity; no per-player bookkeeping exists to drift out of sync.
//!
//! 3. **Deterministic randomness**: the computer's random choices come
//!    from an injected, seedable RNG, so any game replays exactly.
//!
//! ## Modules
//!
//! - `core`: cells, coordinates, errors, play modes, RNG
//! - `board`: the 3×3 board and move count
//! - `rules`: win/draw evaluation and winning-line construction
//! - `ai`: the three computer strategy tiers
//! - `game`: the turn-orchestrating controller
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::{GameController, GameStatus, Mode};
//!
//! let mut game = GameController::with_mode(Mode::Hard, 42);
//!
//! game.apply_human_move(0, 0)?;
//! assert_eq!(game.board().move_count(), 2); // computer replied
//! assert_eq!(game.status(), &GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

pub mod ai;
pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Cell, Coord, EngineError, GameRng, GameRngState, Mode};

pub use crate::board::Board;

pub use crate::rules::{GameStatus, WinningLine};

pub use crate::ai::MoveGenerator;

pub use crate::game::GameController;
