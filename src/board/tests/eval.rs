//! Static evaluation tests.

use crate::board::pst::{
    table_for, BLACK_KING_ENDGAME_TABLE, WHITE_KING_ENDGAME_TABLE, WHITE_QUEEN_TABLE,
};
use crate::board::{Board, Color, Piece, Square};

#[test]
fn test_start_position_is_balanced() {
    assert_eq!(Board::new().evaluate(), 0);
}

/// Sum of material plus table terms, with the king table chosen by the caller
fn score_with_king_table(board: &Board, endgame: bool) -> i32 {
    Square::all()
        .filter_map(|sq| board.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
        .map(|(sq, color, piece)| {
            color.sign() * (piece.value() + table_for(color, piece, endgame)[sq.index()])
        })
        .sum()
}

#[test]
fn test_lone_queen_uses_endgame_king_table() {
    // Three pieces, kings on e1 and d5
    let board = Board::from_fen("8/8/8/3k4/8/8/8/Q3K3 w - - 0 1");
    assert!(board.is_endgame());

    let e1 = Square::new(0, 4);
    let d5 = Square::new(4, 3);
    let a1 = Square::new(0, 0);
    assert_eq!(WHITE_KING_ENDGAME_TABLE[e1.index()], -30);
    assert_eq!(BLACK_KING_ENDGAME_TABLE[d5.index()], 40);
    assert_eq!(WHITE_QUEEN_TABLE[a1.index()], -20);

    // (2000 - 30) + (900 - 20) - (2000 + 40)
    assert_eq!(board.evaluate(), 810);
    // Midgame king tables would give (2000 + 0) + (900 - 20) - (2000 - 40)
    assert_eq!(score_with_king_table(&board, false), 920);
    assert_ne!(board.evaluate(), score_with_king_table(&board, false));
    assert_eq!(board.evaluate(), score_with_king_table(&board, true));
}

#[test]
fn test_endgame_cutover_is_hard() {
    // Six pieces: midgame king table
    let six = Board::from_fen("8/8/8/3k4/8/8/8/NNBQK3 w - - 0 1");
    assert!(!six.is_endgame());
    assert_eq!(six.evaluate(), score_with_king_table(&six, false));
    assert_ne!(six.evaluate(), score_with_king_table(&six, true));

    // Five pieces: endgame king table
    let five = Board::from_fen("8/8/8/3k4/8/8/8/1NBQK3 w - - 0 1");
    assert!(five.is_endgame());
    assert_eq!(five.evaluate(), score_with_king_table(&five, true));
    assert_ne!(five.evaluate(), score_with_king_table(&five, false));
}

#[test]
fn test_evaluation_ignores_side_to_move() {
    let white = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    let black = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1");
    assert_eq!(white.evaluate(), black.evaluate());
}

#[test]
fn test_mirrored_position_negates_score() {
    let mut board = Board::new();
    for text in ["e2e4", "g8f6", "d2d4", "f6e4"] {
        board.make_move_text(text).unwrap();
    }
    let score = board.evaluate();
    assert_ne!(score, 0);
    assert_eq!(board.mirrored().evaluate(), -score);
}

#[test]
fn test_material_dominates() {
    let board = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let score = board.evaluate();
    assert!(score > 800, "missing black queen should be worth ~900, got {score}");
    assert_eq!(
        board.piece_at(Square::new(0, 3)),
        Some((Color::White, Piece::Queen))
    );
}
