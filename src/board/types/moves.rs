//! Move type and per-square move groups.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

// Move flags (4 bits, values 0-15)
const FLAG_QUIET: u8 = 0;
const FLAG_DOUBLE_PAWN: u8 = 1;
const FLAG_CASTLE_KINGSIDE: u8 = 2;
const FLAG_CASTLE_QUEENSIDE: u8 = 3;
const FLAG_CAPTURE: u8 = 4;
const FLAG_EN_PASSANT: u8 = 5;
// 6-7 reserved
const FLAG_PROMO_KNIGHT: u8 = 8;
const FLAG_PROMO_BISHOP: u8 = 9;
const FLAG_PROMO_ROOK: u8 = 10;
const FLAG_PROMO_QUEEN: u8 = 11;
const FLAG_PROMO_CAPTURE_KNIGHT: u8 = 12;
const FLAG_PROMO_CAPTURE_BISHOP: u8 = 13;
const FLAG_PROMO_CAPTURE_ROOK: u8 = 14;
const FLAG_PROMO_CAPTURE_QUEEN: u8 = 15;

const NO_SQUARE: i8 = -1;

/// A move from `start` to `target` with special-move flags.
///
/// `Move::NONE` (start = -1) is the "no move" sentinel: the result of a
/// search with no legal moves and the signal of an opening-book miss.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: i8,
    target: i8,
    flag: u8,
}

impl Move {
    /// The "no move" sentinel.
    pub const NONE: Move = Move {
        start: NO_SQUARE,
        target: NO_SQUARE,
        flag: FLAG_QUIET,
    };

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_QUIET)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_DOUBLE_PAWN)
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_EN_PASSANT)
    }

    /// Create a kingside castle move (king's squares)
    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_KINGSIDE)
    }

    /// Create a queenside castle move (king's squares)
    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_QUEENSIDE)
    }

    /// Create a promotion move, capturing or not
    #[inline]
    #[must_use]
    pub const fn promotion_to(from: Square, to: Square, piece: Piece, capture: bool) -> Self {
        let base = match piece {
            Piece::Knight => FLAG_PROMO_KNIGHT,
            Piece::Bishop => FLAG_PROMO_BISHOP,
            Piece::Rook => FLAG_PROMO_ROOK,
            _ => FLAG_PROMO_QUEEN,
        };
        let flag = if capture { base + 4 } else { base };
        Move::with_flag(from, to, flag)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u8) -> Self {
        Move {
            start: from.index() as i8,
            target: to.index() as i8,
            flag,
        }
    }

    /// True for the `Move::NONE` sentinel
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.start == NO_SQUARE
    }

    /// Raw start square index, -1 for the sentinel
    #[inline]
    #[must_use]
    pub const fn start(self) -> i32 {
        self.start as i32
    }

    /// Raw target square index, -1 for the sentinel
    #[inline]
    #[must_use]
    pub const fn target(self) -> i32 {
        self.target as i32
    }

    /// Get the source square.
    ///
    /// # Panics
    /// Panics on the sentinel move.
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        assert!(self.start != NO_SQUARE, "sentinel move has no squares");
        Square::from_index(self.start as usize)
    }

    /// Get the destination square.
    ///
    /// # Panics
    /// Panics on the sentinel move.
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        assert!(self.target != NO_SQUARE, "sentinel move has no squares");
        Square::from_index(self.target as usize)
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        let f = self.flag;
        f == FLAG_CAPTURE || f == FLAG_EN_PASSANT || f >= FLAG_PROMO_CAPTURE_KNIGHT
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flag == FLAG_EN_PASSANT
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flag == FLAG_CASTLE_KINGSIDE || self.flag == FLAG_CASTLE_QUEENSIDE
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.flag == FLAG_CASTLE_KINGSIDE
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flag == FLAG_DOUBLE_PAWN
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flag >= FLAG_PROMO_KNIGHT
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.flag {
            FLAG_PROMO_KNIGHT | FLAG_PROMO_CAPTURE_KNIGHT => Some(Piece::Knight),
            FLAG_PROMO_BISHOP | FLAG_PROMO_CAPTURE_BISHOP => Some(Piece::Bishop),
            FLAG_PROMO_ROOK | FLAG_PROMO_CAPTURE_ROOK => Some(Piece::Rook),
            FLAG_PROMO_QUEEN | FLAG_PROMO_CAPTURE_QUEEN => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Same start and target squares, flags ignored
    #[inline]
    #[must_use]
    pub const fn same_squares(self, other: Move) -> bool {
        self.start == other.start && self.target == other.target
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Move(none)");
        }
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Legal moves of the piece standing on `from`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveGroup {
    pub from: Square,
    pub moves: Vec<Move>,
}

/// All legal moves of one side, grouped by origin square in a1..h8 order.
///
/// Every piece of the side gets a group, so a group may be empty; the whole
/// set is empty only when no group holds a move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedMoves {
    groups: Vec<MoveGroup>,
}

impl GroupedMoves {
    pub(crate) fn new() -> Self {
        GroupedMoves { groups: Vec::new() }
    }

    pub(crate) fn push_group(&mut self, group: MoveGroup) {
        self.groups.push(group);
    }

    #[must_use]
    pub fn groups(&self) -> &[MoveGroup] {
        &self.groups
    }

    /// True when the side has no legal move at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.moves.is_empty())
    }

    /// Total number of moves across all groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.moves.len()).sum()
    }

    /// Moves in generation order (group by group)
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.groups.iter().flat_map(|g| g.moves.iter().copied())
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|m| m == mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(Move::NONE.is_none());
        assert_eq!(Move::NONE.start(), -1);
        assert_eq!(Move::NONE.target(), -1);
        assert_eq!(Move::NONE.to_string(), "0000");
        assert!(!Move::quiet(Square::new(1, 4), Square::new(3, 4)).is_none());
    }

    #[test]
    #[should_panic]
    fn test_sentinel_from_panics() {
        let _ = Move::NONE.from();
    }

    #[test]
    fn test_promotion_flags() {
        let from = Square::new(6, 0);
        let to = Square::new(7, 0);
        for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            let quiet = Move::promotion_to(from, to, piece, false);
            let capture = Move::promotion_to(from, to, piece, true);
            assert_eq!(quiet.promotion(), Some(piece));
            assert_eq!(capture.promotion(), Some(piece));
            assert!(!quiet.is_capture());
            assert!(capture.is_capture());
        }
        assert_eq!(
            Move::promotion_to(from, to, Piece::Queen, false).to_string(),
            "a7a8q"
        );
    }

    #[test]
    fn test_move_kinds() {
        let e1 = Square::new(0, 4);
        let g1 = Square::new(0, 6);
        let castle = Move::castle_kingside(e1, g1);
        assert!(castle.is_castling());
        assert!(castle.is_castle_kingside());
        assert!(!castle.is_capture());
        let ep = Move::en_passant(Square::new(4, 4), Square::new(5, 3));
        assert!(ep.is_en_passant());
        assert!(ep.is_capture());
        assert!(ep.same_squares(Move::quiet(Square::new(4, 4), Square::new(5, 3))));
    }

    #[test]
    fn test_grouped_moves_empty_groups() {
        let mut grouped = GroupedMoves::new();
        grouped.push_group(MoveGroup {
            from: Square::new(0, 0),
            moves: Vec::new(),
        });
        assert!(grouped.is_empty());
        assert_eq!(grouped.len(), 0);

        let mv = Move::quiet(Square::new(0, 1), Square::new(2, 2));
        grouped.push_group(MoveGroup {
            from: Square::new(0, 1),
            moves: vec![mv],
        });
        assert!(!grouped.is_empty());
        assert_eq!(grouped.len(), 1);
        assert!(grouped.contains(mv));
        assert_eq!(grouped.iter().collect::<Vec<_>>(), vec![mv]);
    }
}
