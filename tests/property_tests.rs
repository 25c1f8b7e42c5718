//! Property tests: board bookkeeping invariants and the hard strategy's
//! win/block obligations under random play.

use proptest::prelude::*;

use tictactoe_engine::rules;
use tictactoe_engine::{Board, Cell, Coord, GameController, GameRng, Mode, MoveGenerator};

/// Pick a uniformly random empty cell, if any.
fn random_empty(board: &Board, rng: &mut GameRng) -> Option<Coord> {
    let cells: Vec<Coord> = board.empty_cells().collect();
    rng.choose(&cells).copied()
}

proptest! {
    /// After k applied moves the move count is k, and the game always
    /// reaches a terminal state by the ninth move.
    #[test]
    fn move_count_tracks_applied_moves(seed in any::<u64>()) {
        let mut game = GameController::new(0);
        let mut rng = GameRng::new(seed);
        let mut applied = 0u8;

        while !game.is_over() {
            let coord = random_empty(game.board(), &mut rng).unwrap();
            prop_assert_eq!(game.apply_human_move(coord.row(), coord.col()), Ok(true));
            applied += 1;
            prop_assert_eq!(game.board().move_count(), applied);
            prop_assert!(applied <= 9);
        }

        prop_assert!(game.is_over());
    }

    /// Once a cell is occupied it never changes, and replaying it is a
    /// no-op that leaves board, status, and move count untouched.
    #[test]
    fn occupied_cells_are_never_overwritten(seed in any::<u64>()) {
        let mut game = GameController::new(0);
        let mut rng = GameRng::new(seed);

        while !game.is_over() {
            let coord = random_empty(game.board(), &mut rng).unwrap();
            let owner_turn = game.board().to_move();
            game.apply_human_move(coord.row(), coord.col()).unwrap();
            prop_assert_eq!(game.cell(coord.row(), coord.col()), Ok(owner_turn));

            if !game.is_over() {
                // Replaying the same cell must change nothing.
                let before_board = game.board().clone();
                let before_status = game.status().clone();
                prop_assert_eq!(game.apply_human_move(coord.row(), coord.col()), Ok(false));
                prop_assert_eq!(game.board(), &before_board);
                prop_assert_eq!(game.status(), &before_status);
            }

            prop_assert_eq!(game.cell(coord.row(), coord.col()), Ok(owner_turn));
        }
    }

    /// Reset always returns to the initial state, whatever was played.
    #[test]
    fn reset_round_trip(seed in any::<u64>(), moves in 1usize..9) {
        let mut game = GameController::with_mode(Mode::Easy, seed);
        let mut rng = GameRng::new(seed);

        for _ in 0..moves {
            if game.is_over() {
                break;
            }
            if let Some(coord) = random_empty(game.board(), &mut rng) {
                game.apply_human_move(coord.row(), coord.col()).unwrap();
            }
        }

        game.reset();

        prop_assert_eq!(game.board(), &Board::new());
        prop_assert_eq!(game.board().move_count(), 0);
        prop_assert!(!game.is_over());
        prop_assert!(game.drain_winning_line().is_empty());
    }

    /// In every game against a random human, the hard tier takes an
    /// immediate win whenever one exists and otherwise always blocks an
    /// immediate human win.
    #[test]
    fn hard_always_takes_available_win_or_block(seed in any::<u64>()) {
        let mut board = Board::new();
        let mut human_rng = GameRng::new(seed);
        let mut generator = MoveGenerator::new(GameRng::new(seed.wrapping_add(1)));

        let human = Cell::PlayerB;
        let computer = Cell::PlayerA;

        loop {
            let Some(h) = random_empty(&board, &mut human_rng) else { break };
            board.place(h, human).unwrap();
            if rules::evaluate(&board, h).is_terminal() {
                break;
            }

            let win = rules::winning_move(&board, computer);
            let block = rules::winning_move(&board, human);

            let reply = generator
                .computer_move(&board, Mode::Hard, computer, human)
                .unwrap();
            prop_assert!(board.get(reply).is_empty());

            if win.is_some() {
                prop_assert!(
                    rules::completes_line(&board, computer, reply),
                    "win available but not taken at move {}", board.move_count()
                );
            } else if block.is_some() {
                prop_assert!(
                    rules::completes_line(&board, human, reply),
                    "block available but not played at move {}", board.move_count()
                );
            }

            board.place(reply, computer).unwrap();
            if rules::evaluate(&board, reply).is_terminal() {
                break;
            }
        }
    }

    /// The medium tier honors the same win/block obligations; only its
    /// fallback differs from hard.
    #[test]
    fn medium_always_takes_available_win_or_block(seed in any::<u64>()) {
        let mut board = Board::new();
        let mut human_rng = GameRng::new(seed);
        let mut generator = MoveGenerator::new(GameRng::new(seed.wrapping_add(1)));

        let human = Cell::PlayerB;
        let computer = Cell::PlayerA;

        loop {
            let Some(h) = random_empty(&board, &mut human_rng) else { break };
            board.place(h, human).unwrap();
            if rules::evaluate(&board, h).is_terminal() {
                break;
            }

            let win = rules::winning_move(&board, computer);
            let block = rules::winning_move(&board, human);

            let reply = generator
                .computer_move(&board, Mode::Medium, computer, human)
                .unwrap();

            if win.is_some() {
                prop_assert!(rules::completes_line(&board, computer, reply));
            } else if block.is_some() {
                prop_assert!(rules::completes_line(&board, human, reply));
            }

            board.place(reply, computer).unwrap();
            if rules::evaluate(&board, reply).is_terminal() {
                break;
            }
        }
    }

    /// Easy replies are always legal and never the center on the first
    /// computer turn.
    #[test]
    fn easy_reply_is_legal_and_respects_the_center_quirk(
        seed in any::<u64>(),
        row in 0u8..3,
        col in 0u8..3,
    ) {
        let mut board = Board::new();
        board.place(Coord::new(row, col).unwrap(), Cell::PlayerB).unwrap();

        let mut generator = MoveGenerator::new(GameRng::new(seed));
        let reply = generator
            .computer_move(&board, Mode::Easy, Cell::PlayerA, Cell::PlayerB)
            .unwrap();

        prop_assert!(board.get(reply).is_empty());
        prop_assert_ne!(reply, Coord::new(1, 1).unwrap());
    }
}
