//! Computer move generation.
//!
//! `MoveGenerator` produces the computer's reply for the three tiers:
//!
//! - **Easy**: a uniformly random empty cell.
//! - **Medium**: take an immediate win, else block an immediate human win,
//!   else play randomly.
//! - **Hard**: a fixed-order decision list. Each step is attempted only if
//!   every step before it produced no move: win, block, fork, block-fork,
//!   center, opposite corner, any free corner, random fallback.
//!
//! The hard tier is a heuristic, not game-tree search. All scans run in
//! row-major order so every non-random decision is deterministic.
//!
//! One inherited quirk of the easy tier is preserved deliberately: on the
//! computer's very first reply (move count 1) the center is excluded from
//! the random candidate pool even when empty. From the second reply onward
//! the center is an ordinary candidate.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{Cell, Coord, GameRng, Mode, CENTER, CORNERS};
use crate::rules;

/// Corner pairs for the opposite-corner step, checked in this fixed order:
/// if the human holds the first corner and the second is empty, play the
/// second.
const CORNER_PAIRS: [(Coord, Coord); 4] = [
    (Coord::at(0, 0), Coord::at(2, 2)),
    (Coord::at(2, 0), Coord::at(0, 2)),
    (Coord::at(0, 2), Coord::at(2, 0)),
    (Coord::at(2, 2), Coord::at(0, 0)),
];

/// Generates computer moves, dispatched by [`Mode`].
///
/// Owns the injected RNG so the random tier and every fallback path are
/// reproducible from a seed.
#[derive(Clone, Debug)]
pub struct MoveGenerator {
    rng: GameRng,
}

impl MoveGenerator {
    /// Create a generator around an injected RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Pick the computer's move for the given mode.
    ///
    /// `computer` and `human` are the two player symbols. Returns `None`
    /// when the board has no empty cell, or in [`Mode::HumanVsHuman`]
    /// (where no computer plays). Callers are responsible for not asking
    /// for a move in a terminal game.
    #[must_use]
    pub fn computer_move(
        &mut self,
        board: &Board,
        mode: Mode,
        computer: Cell,
        human: Cell,
    ) -> Option<Coord> {
        match mode {
            Mode::HumanVsHuman => None,
            Mode::Easy => self.random_move(board),
            Mode::Medium => self.defensive_move(board, computer, human),
            Mode::Hard => self.heuristic_move(board, computer, human),
        }
    }

    /// Easy tier: uniform random over the empty cells.
    ///
    /// On the first computer reply the center is excluded from the pool.
    fn random_move(&mut self, board: &Board) -> Option<Coord> {
        let mut candidates: SmallVec<[Coord; 9]> = board.empty_cells().collect();
        if board.move_count() == 1 {
            candidates.retain(|c| *c != CENTER);
        }

        let choice = self.rng.choose(&candidates).copied();
        if let Some(coord) = choice {
            debug!(%coord, "random move");
        }
        choice
    }

    /// Medium tier: win, block, then random.
    fn defensive_move(&mut self, board: &Board, computer: Cell, human: Cell) -> Option<Coord> {
        if let Some(coord) = rules::winning_move(board, computer) {
            debug!(%coord, "winning move");
            return Some(coord);
        }
        if let Some(coord) = rules::winning_move(board, human) {
            debug!(%coord, "blocking move");
            return Some(coord);
        }
        self.random_move(board)
    }

    /// Hard tier: the full decision list.
    fn heuristic_move(&mut self, board: &Board, computer: Cell, human: Cell) -> Option<Coord> {
        if let Some(coord) = rules::winning_move(board, computer) {
            debug!(%coord, "winning move");
            return Some(coord);
        }
        if let Some(coord) = rules::winning_move(board, human) {
            debug!(%coord, "blocking move");
            return Some(coord);
        }
        if let Some(coord) = Self::fork_move(board, computer) {
            debug!(%coord, "fork");
            return Some(coord);
        }
        if let Some(coord) = Self::block_fork_move(board, human) {
            debug!(%coord, "blocking fork");
            return Some(coord);
        }
        if board.get(CENTER).is_empty() {
            debug!(coord = %CENTER, "center");
            return Some(CENTER);
        }
        if let Some(coord) = Self::opposite_corner(board, human) {
            debug!(%coord, "opposite corner");
            return Some(coord);
        }
        if let Some(coord) = Self::free_corner(board) {
            debug!(%coord, "free corner");
            return Some(coord);
        }
        self.random_move(board)
    }

    /// Number of lines through the empty cell `at` that placing `symbol`
    /// there would turn into a threat: lines whose other two cells hold
    /// exactly one `symbol` and no opposing symbol.
    fn threat_count(board: &Board, symbol: Cell, at: Coord) -> usize {
        rules::lines_through(at)
            .iter()
            .filter(|line| {
                let mut own = 0;
                let mut theirs = 0;
                for &cell in line.iter().filter(|&&c| c != at) {
                    match board.get(cell) {
                        Cell::Empty => {}
                        owner if owner == symbol => own += 1,
                        _ => theirs += 1,
                    }
                }
                own == 1 && theirs == 0
            })
            .count()
    }

    /// First cell (row-major) where placing `symbol` creates two or more
    /// simultaneous threats.
    fn fork_move(board: &Board, symbol: Cell) -> Option<Coord> {
        board
            .empty_cells()
            .find(|&coord| Self::threat_count(board, symbol, coord) >= 2)
    }

    /// The human's fork cell, but only when it is unique.
    ///
    /// With zero or several fork cells this step yields no move and the
    /// decision list continues; the forced-win refinement is deliberately
    /// not implemented.
    fn block_fork_move(board: &Board, human: Cell) -> Option<Coord> {
        let mut forks = board
            .empty_cells()
            .filter(|&coord| Self::threat_count(board, human, coord) >= 2);

        let first = forks.next()?;
        if forks.next().is_none() {
            Some(first)
        } else {
            None
        }
    }

    /// The empty corner diagonally opposite a human-held corner, checking
    /// the pairs in their fixed order.
    fn opposite_corner(board: &Board, human: Cell) -> Option<Coord> {
        CORNER_PAIRS.iter().find_map(|&(held, opposite)| {
            (board.get(held) == human && board.get(opposite).is_empty()).then_some(opposite)
        })
    }

    /// The first empty corner in the fixed (0,0), (0,2), (2,0), (2,2) order.
    fn free_corner(board: &Board) -> Option<Coord> {
        CORNERS.iter().copied().find(|&c| board.get(c).is_empty())
    }
}
