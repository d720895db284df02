//! Search tests to verify the engine picks sensible moves through the public API.

use minimax_chess::board::{find_best_move, Board, Color, SearchLimits};
use minimax_chess::{AiConfig, AiController, Controller, Difficulty, OpeningBook};

fn best(fen: &str, color: Color, depth: u32) -> String {
    let mut board = Board::from_fen(fen);
    let result = find_best_move(&mut board, color, depth, SearchLimits::default());
    assert_eq!(board.to_fen(), Board::from_fen(fen).to_fen(), "search must restore the board");
    result.best_move.to_string()
}

/// Test that the engine captures free material
#[test]
fn captures_free_piece() {
    // White to move, free bishop on c6
    assert_eq!(best("4k3/8/2b5/8/8/8/8/2R1K3 w - - 0 1", Color::White, 2), "c1c6");
}

/// Test that the engine does not take a defended pawn with the queen
#[test]
fn avoids_defended_pawn() {
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/8/5Q2/PPPPPPPP/RNB1KBNR w KQkq - 0 2";
    assert_ne!(best(fen, Color::White, 2), "f3d5");
}

/// The king takes an undefended checking rook
#[test]
fn king_takes_undefended_rook() {
    assert_eq!(best("4k3/8/8/8/8/8/4r3/R3K3 w - - 0 1", Color::White, 2), "e1e2");
}

/// No legal moves gives the sentinel
#[test]
fn stalemate_returns_no_move() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = find_best_move(&mut board, Color::Black, 4, SearchLimits::default());
    assert!(result.best_move.is_none());
    assert_eq!(result.score, board.evaluate());
}

/// Depth one picks the child with the best static evaluation
#[test]
fn depth_one_maximizes_static_eval() {
    let mut board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let result = find_best_move(&mut board, Color::White, 1, SearchLimits::default());

    let moves: Vec<_> = board.generate_all(Color::White).iter().collect();
    let mut best_eval = i32::MIN;
    for mv in moves {
        board.make_move(mv);
        best_eval = best_eval.max(board.evaluate());
        board.undo();
    }
    assert_eq!(result.score, best_eval);
}

/// A White AI with the standard book opens with a recorded first move
#[test]
fn ai_opens_from_book() {
    let book = OpeningBook::standard();
    let mut board = Board::new();
    let mut white = AiController::new(AiConfig::new(Color::White, Difficulty::Expert), book);
    let mv = white.play_turn(&mut board);
    assert!(book
        .start()
        .iter()
        .any(|n| n.start() == mv.from() && n.target() == mv.to()));
    assert!(white.last_search().is_none());
}

/// Two AIs play a short game; every move is legal and undo restores the start
#[test]
fn ai_self_play_is_reversible() {
    let book = OpeningBook::standard();
    let mut board = Board::new();
    let mut white =
        AiController::with_seed(AiConfig::new(Color::White, Difficulty::Easy), book, 11);
    let mut black =
        AiController::with_seed(AiConfig::new(Color::Black, Difficulty::Easy), book, 12);

    for ply in 0..12 {
        let side = board.side_to_move();
        let controller: &mut dyn Controller = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let mv = controller.play_turn(&mut board);
        assert!(!mv.is_none(), "ply {ply}: no move");
        assert!(board.generate_all(side).contains(mv), "ply {ply}: illegal {mv}");
        board.make_move(mv);
    }

    while board.history_len() > 0 {
        board.undo();
    }
    assert_eq!(board, Board::new());
}
