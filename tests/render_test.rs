//! Frame diffing: after a move only the changed cells are re-sent.

use term_tetris::core::{Board, GameState};
use term_tetris::term::{encode_diff_into, for_each_changed_run, GameView};
use term_tetris::types::{GameAction, PieceKind};

#[test]
fn one_move_changes_only_the_piece_runs() {
    let mut game = GameState::with_board(Board::new(), PieceKind::O, 1);
    game.start();
    game.apply_action(GameAction::SoftDrop);
    game.apply_action(GameAction::SoftDrop);

    let view = GameView::new(0);
    let vp = view.required_size();
    let before = view.render(&game.snapshot(), vp);

    assert!(game.apply_action(GameAction::MoveRight));
    let after = view.render(&game.snapshot(), vp);

    let mut runs = Vec::new();
    for_each_changed_run(&before, &after, |x, y, len| {
        runs.push((x, y, len));
        Ok(())
    })
    .unwrap();

    // O at rows 1-2 moved from cols 3-4 to cols 4-5: per row, screen
    // columns 8..=9 went from "[]" to " ." and 12..=13 from " ." to "[]".
    assert_eq!(runs, vec![(8, 1, 2), (12, 1, 2), (8, 2, 2), (12, 2, 2)]);
}

#[test]
fn unchanged_frame_sends_nothing() {
    let game = GameState::new(9);
    let view = GameView::default();
    let fb = view.render(&game.snapshot(), view.required_size());

    let mut out = Vec::new();
    encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn line_clear_frame_redraws_the_collapsed_rows() {
    let mut board = Board::new();
    board.fill_row_except(19, &[3, 4], PieceKind::J);
    let mut game = GameState::with_board(board, PieceKind::O, 1);
    game.start();
    for _ in 0..18 {
        game.tick();
    }

    let view = GameView::new(0);
    let vp = view.required_size();
    let before = view.render(&game.snapshot(), vp);
    game.tick();
    game.tick();
    assert_eq!(game.lines_cleared(), 1);
    let after = view.render(&game.snapshot(), vp);

    let mut rows = Vec::new();
    for_each_changed_run(&before, &after, |_, y, _| {
        rows.push(y);
        Ok(())
    })
    .unwrap();
    assert!(rows.contains(&19));
}
