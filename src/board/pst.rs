//! Piece-square tables.
//!
//! Layouts are written as seen from White's side of the board (rank 8 on the
//! first row). The per-color tables are indexed by square (a1 = 0); Black's
//! are the vertical mirror of White's.

use super::{Color, Piece};

/// Total piece count below which the king uses its endgame table.
pub const ENDGAME_PIECE_THRESHOLD: usize = 6;

#[rustfmt::skip]
const PAWN_LAYOUT: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_LAYOUT: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_LAYOUT: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_LAYOUT: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_LAYOUT: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MIDGAME_LAYOUT: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_ENDGAME_LAYOUT: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

const fn flip_ranks(table: &[i32; 64]) -> [i32; 64] {
    let mut out = [0; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = table[i ^ 56];
        i += 1;
    }
    out
}

pub const WHITE_PAWN_TABLE: [i32; 64] = flip_ranks(&PAWN_LAYOUT);
pub const WHITE_KNIGHT_TABLE: [i32; 64] = flip_ranks(&KNIGHT_LAYOUT);
pub const WHITE_BISHOP_TABLE: [i32; 64] = flip_ranks(&BISHOP_LAYOUT);
pub const WHITE_ROOK_TABLE: [i32; 64] = flip_ranks(&ROOK_LAYOUT);
pub const WHITE_QUEEN_TABLE: [i32; 64] = flip_ranks(&QUEEN_LAYOUT);
pub const WHITE_KING_MIDGAME_TABLE: [i32; 64] = flip_ranks(&KING_MIDGAME_LAYOUT);
pub const WHITE_KING_ENDGAME_TABLE: [i32; 64] = flip_ranks(&KING_ENDGAME_LAYOUT);

pub const BLACK_PAWN_TABLE: [i32; 64] = flip_ranks(&WHITE_PAWN_TABLE);
pub const BLACK_KNIGHT_TABLE: [i32; 64] = flip_ranks(&WHITE_KNIGHT_TABLE);
pub const BLACK_BISHOP_TABLE: [i32; 64] = flip_ranks(&WHITE_BISHOP_TABLE);
pub const BLACK_ROOK_TABLE: [i32; 64] = flip_ranks(&WHITE_ROOK_TABLE);
pub const BLACK_QUEEN_TABLE: [i32; 64] = flip_ranks(&WHITE_QUEEN_TABLE);
pub const BLACK_KING_MIDGAME_TABLE: [i32; 64] = flip_ranks(&WHITE_KING_MIDGAME_TABLE);
pub const BLACK_KING_ENDGAME_TABLE: [i32; 64] = flip_ranks(&WHITE_KING_ENDGAME_TABLE);

/// Table for one (color, piece) pair; `endgame` only affects the king.
#[must_use]
pub const fn table_for(color: Color, piece: Piece, endgame: bool) -> &'static [i32; 64] {
    match (color, piece) {
        (Color::White, Piece::Pawn) => &WHITE_PAWN_TABLE,
        (Color::White, Piece::Knight) => &WHITE_KNIGHT_TABLE,
        (Color::White, Piece::Bishop) => &WHITE_BISHOP_TABLE,
        (Color::White, Piece::Rook) => &WHITE_ROOK_TABLE,
        (Color::White, Piece::Queen) => &WHITE_QUEEN_TABLE,
        (Color::White, Piece::King) if endgame => &WHITE_KING_ENDGAME_TABLE,
        (Color::White, Piece::King) => &WHITE_KING_MIDGAME_TABLE,
        (Color::Black, Piece::Pawn) => &BLACK_PAWN_TABLE,
        (Color::Black, Piece::Knight) => &BLACK_KNIGHT_TABLE,
        (Color::Black, Piece::Bishop) => &BLACK_BISHOP_TABLE,
        (Color::Black, Piece::Rook) => &BLACK_ROOK_TABLE,
        (Color::Black, Piece::Queen) => &BLACK_QUEEN_TABLE,
        (Color::Black, Piece::King) if endgame => &BLACK_KING_ENDGAME_TABLE,
        (Color::Black, Piece::King) => &BLACK_KING_MIDGAME_TABLE,
    }
}
