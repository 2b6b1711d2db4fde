//! Integration tests for the game engine: spawn, moves, gravity, lock,
//! line clear and game over, driven through the public API.

use term_tetris::core::{Board, GameState, Phase, TickOutcome};
use term_tetris::types::{GameAction, PieceKind, Position, SPAWN_COL, SPAWN_ROW};

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn started(board: Board, first: PieceKind) -> GameState {
    let mut state = GameState::with_board(board, first, 12345);
    assert!(state.start());
    state
}

/// Filled cells that do not belong to the falling piece.
fn settled_count(state: &GameState) -> usize {
    let snap = state.snapshot();
    snap.occupied_count() - snap.active_visible_count()
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.started());

    assert!(state.start());
    assert!(state.started());
    assert!(state.active().is_some());
    assert!(!state.game_over());
    assert_eq!(state.phase(), Phase::Falling);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.start();
    b.start();
    for _ in 0..300 {
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_o_soft_drops_nineteen_rows() {
    let mut state = started(Board::new(), PieceKind::O);
    assert_eq!(state.active().unwrap().anchor, p(SPAWN_ROW, SPAWN_COL));

    for i in 0..19 {
        assert!(state.apply_action(GameAction::SoftDrop), "drop {}", i + 1);
    }
    // Bottom row reached: the 20th move down fails and nothing changes.
    let before = state.board().clone();
    assert!(!state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.board(), &before);
    assert_eq!(state.piece_id(), 1);

    // Gravity locks it.
    assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 0 });
    for pos in [p(18, 3), p(18, 4), p(19, 3), p(19, 4)] {
        assert_eq!(state.board().get(pos), Some(Some(PieceKind::O)));
    }
    assert_eq!(state.piece_id(), 2);
}

#[test]
fn test_o_falls_nineteen_ticks_then_locks() {
    let mut state = started(Board::new(), PieceKind::O);

    for i in 0..19 {
        assert_eq!(state.tick(), TickOutcome::Moved, "tick {}", i + 1);
    }
    assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 0 });

    let event = state.last_event().unwrap();
    assert_eq!(event.kind, PieceKind::O);
    assert!(!event.topped_out);
    for pos in [p(18, 3), p(18, 4), p(19, 3), p(19, 4)] {
        assert!(state.board().is_occupied(pos));
    }
}

#[test]
fn test_completed_row_clears_and_rows_above_shift_by_one() {
    let mut board = Board::new();
    board.fill_row_except(19, &[4], PieceKind::J);
    board.set(p(18, 0), Some(PieceKind::Z));
    board.set(p(17, 9), Some(PieceKind::S));
    board.set(p(12, 2), Some(PieceKind::L));

    // The T's stem lines up with the hole at column 4.
    let mut state = started(board, PieceKind::T);
    let mut outcome = state.tick();
    while outcome == TickOutcome::Moved {
        outcome = state.tick();
    }

    assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 1 });
    assert_eq!(state.lines_cleared(), 1);
    assert_eq!(state.last_event().unwrap().cleared_rows.as_slice(), &[19]);

    let b = state.board();
    // Old row 18: the marker plus the T's bar.
    for col in [0, 3, 4, 5] {
        assert!(b.is_occupied(p(19, col)), "col {col}");
    }
    assert!(!b.is_occupied(p(19, 1)));
    assert!(!b.is_row_full(19));
    // Old rows 17 and 12, one row lower.
    assert!(b.is_occupied(p(18, 9)));
    assert!(!b.is_occupied(p(17, 9)));
    assert!(b.is_occupied(p(13, 2)));
    assert!(!b.is_occupied(p(12, 2)));
}

#[test]
fn test_multiple_lines_clear_in_one_lock() {
    let mut board = Board::new();
    for row in 16..20 {
        board.fill_row_except(row, &[0], PieceKind::L);
    }

    let mut state = started(board, PieceKind::I);
    // Stand the I up and walk it to the left wall.
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert!(state.apply_action(GameAction::Rotate));
    while state.apply_action(GameAction::MoveLeft) {}
    assert!(state.active().unwrap().cells().iter().all(|c| c.col == 0));

    let mut outcome = state.tick();
    while outcome == TickOutcome::Moved {
        outcome = state.tick();
    }
    assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 4 });
    assert_eq!(settled_count(&state), 0);
}

#[test]
fn test_square_rotate_is_bit_identical() {
    let mut state = started(Board::new(), PieceKind::O);
    state.tick();
    state.tick();
    let before = state.snapshot();

    assert!(state.apply_action(GameAction::Rotate));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_spawn_on_empty_grid_always_succeeds() {
    for kind in PieceKind::ALL {
        let mut state = GameState::with_board(Board::new(), kind, 1);
        assert!(state.start(), "{:?}", kind);
        assert_eq!(state.active().unwrap().kind(), kind);
    }
}

#[test]
fn test_spawn_onto_occupied_cells_is_game_over() {
    for kind in PieceKind::ALL {
        let target = term_tetris::core::ActivePiece::spawn(kind).cells();
        let mut board = Board::new();
        let mut blocked = false;
        for pos in target {
            blocked |= board.set(pos, Some(PieceKind::Z));
        }
        if !blocked {
            // The I spawns wholly above the top; nothing on the board can
            // block it.
            assert_eq!(kind, PieceKind::I);
            continue;
        }

        let mut state = GameState::with_board(board.clone(), kind, 1);
        assert!(!state.start(), "{:?}", kind);
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.board(), &board);
    }
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut state = GameState::new(4242);
    state.start();

    let mut ticks = 0;
    while !state.game_over() {
        state.tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }

    let board = state.board().clone();
    assert_eq!(state.tick(), TickOutcome::GameOver);
    assert!(!state.apply_action(GameAction::SoftDrop));
    assert!(!state.apply_action(GameAction::Rotate));
    assert_eq!(state.board(), &board);
}

#[test]
fn test_player_moves_keep_settled_cells_invariant() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
    ];

    let mut state = GameState::new(99);
    state.start();

    for step in 0..2_000 {
        if state.game_over() {
            break;
        }
        if step % 3 == 0 {
            state.tick();
            continue;
        }

        let action = actions[step % actions.len()];
        let settled = settled_count(&state);
        let board = state.board().clone();
        let accepted = state.apply_action(action);

        assert_eq!(settled_count(&state), settled, "step {step} {action:?}");
        if !accepted {
            assert_eq!(state.board(), &board, "rejected {action:?} changed the board");
        }

        // Every visible cell of the piece is painted with its kind.
        let snap = state.snapshot();
        let active = snap.active.unwrap();
        for c in active.cells.iter().filter(|c| c.row >= 0) {
            assert_eq!(
                snap.board[c.row as usize][c.col as usize],
                active.kind.code()
            );
        }
    }
}

#[test]
fn test_lateral_moves_stay_on_screen() {
    let mut state = started(Board::new(), PieceKind::T);
    // Bar still above the top: no sideways moves yet.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::MoveRight));

    assert_eq!(state.tick(), TickOutcome::Moved);
    while state.apply_action(GameAction::MoveRight) {}
    let max_col = state
        .active()
        .unwrap()
        .cells()
        .iter()
        .map(|c| c.col)
        .max()
        .unwrap();
    assert_eq!(max_col, 9);
}
