//! Core engine types: cells, coordinates, errors, modes, RNG.
//!
//! These are the fundamental building blocks the board, rules, and AI
//! modules are built from.

pub mod cell;
pub mod coord;
pub mod error;
pub mod mode;
pub mod rng;

pub use cell::Cell;
pub use coord::{Coord, CENTER, CORNERS, GRID_SIZE};
pub use error::EngineError;
pub use mode::Mode;
pub use rng::{GameRng, GameRngState};
