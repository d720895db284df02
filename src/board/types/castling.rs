//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Drop both rights of `color`
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Rights with White and Black exchanged
    #[must_use]
    pub const fn swap_colors(self) -> Self {
        let white = self.0 & (CASTLE_WHITE_K | CASTLE_WHITE_Q);
        let black = self.0 & (CASTLE_BLACK_K | CASTLE_BLACK_Q);
        CastlingRights((white << 2) | (black >> 2))
    }

    /// FEN castling field ("KQkq", "-" when empty)
    #[must_use]
    pub fn to_fen(self) -> String {
        let mut out = String::new();
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                out.push(c);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut rights = CastlingRights::none();
        rights.set(Color::White, true);
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        rights.remove(Color::White, true);
        assert_eq!(rights, CastlingRights::none());
    }

    #[test]
    fn test_swap_colors() {
        let mut rights = CastlingRights::none();
        rights.set(Color::White, false);
        rights.set(Color::Black, true);
        let swapped = rights.swap_colors();
        assert!(swapped.has(Color::Black, false));
        assert!(swapped.has(Color::White, true));
        assert!(!swapped.has(Color::White, false));
        assert_eq!(CastlingRights::all().swap_colors(), CastlingRights::all());
    }

    #[test]
    fn test_to_fen() {
        assert_eq!(CastlingRights::all().to_fen(), "KQkq");
        assert_eq!(CastlingRights::none().to_fen(), "-");
    }
}
