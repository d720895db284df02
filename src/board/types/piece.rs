//! Piece and color types, plus the packed square encoding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// The 3-bit type code stored in a packed square (1..=6).
    #[inline]
    #[must_use]
    pub(crate) const fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    #[inline]
    #[must_use]
    const fn from_code(code: u8) -> Option<Piece> {
        match code {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a character (p, n, b, r, q, k; case ignored)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Material value in centipawns used by the evaluator.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 320,
            Piece::Bishop => 330,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 2000,
        }
    }
}

/// Promotion piece choices, queen first
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction in ranks (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

const TYPE_MASK: u8 = 0b0111;
const BLACK_BIT: u8 = 0b1000;

/// Packed contents of one board square.
///
/// Encoding:
/// - bits 0-2: piece type (1=Pawn .. 6=King)
/// - bit 3:    color (clear = White, set = Black)
///
/// Zero is the empty square. Any non-zero value always carries a valid type
/// code; the constructors are the only way to build one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedPiece(u8);

impl PackedPiece {
    pub const EMPTY: PackedPiece = PackedPiece(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        let color_bit = match color {
            Color::White => 0,
            Color::Black => BLACK_BIT,
        };
        PackedPiece(piece.code() | color_bit)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        Piece::from_code(self.0 & TYPE_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        if self.0 == 0 {
            None
        } else if self.0 & BLACK_BIT != 0 {
            Some(Color::Black)
        } else {
            Some(Color::White)
        }
    }

    /// Typed view of the square: `None` when empty.
    #[inline]
    #[must_use]
    pub const fn unpack(self) -> Option<(Color, Piece)> {
        match (self.color(), self.piece()) {
            (Some(color), Some(piece)) => Some((color, piece)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn is(self, color: Color, piece: Piece) -> bool {
        self.0 == PackedPiece::new(color, piece).0
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Same piece with the opposite color (empty stays empty)
    #[inline]
    #[must_use]
    pub(crate) const fn swap_color(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            PackedPiece(self.0 ^ BLACK_BIT)
        }
    }

    /// Raw code as stored in the board array
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<Option<(Color, Piece)>> for PackedPiece {
    fn from(value: Option<(Color, Piece)>) -> Self {
        match value {
            Some((color, piece)) => PackedPiece::new(color, piece),
            None => PackedPiece::EMPTY,
        }
    }
}

impl fmt::Debug for PackedPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unpack() {
            Some((color, piece)) => write!(f, "PackedPiece({})", piece.to_fen_char(color)),
            None => write!(f, "PackedPiece(-)"),
        }
    }
}
