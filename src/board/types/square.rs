//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board as a rank-major index (a1 = 0, b1 = 1, ..., h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file (both 0-7).
    ///
    /// # Panics
    /// Panics when either coordinate is off the board.
    #[inline]
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinates off the board");
        Square(rank * 8 + file)
    }

    /// Create a square from an index (0-63).
    ///
    /// # Panics
    /// Panics when `idx` is not below 64.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        assert!(idx < 64, "square index out of range");
        Square(idx as u8)
    }

    /// Checked variant of [`Square::from_index`] for untrusted input.
    pub fn try_from_index(idx: i32) -> Result<Self, SquareError> {
        if (0..64).contains(&idx) {
            Ok(Square(idx as u8))
        } else {
            Err(SquareError::IndexOutOfRange { index: idx })
        }
    }

    /// Offset by (ranks, files), or `None` when that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        Ok(Square::new(rank - b'1', file - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_parse_and_display() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.to_string(), "e4");
        assert!("i9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_offset_bounds() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        let h8 = Square::new(7, 7);
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn test_flip_vertical() {
        assert_eq!(Square::new(0, 3).flip_vertical(), Square::new(7, 3));
        assert_eq!(Square::new(5, 1).flip_vertical(), Square::new(2, 1));
    }

    #[test]
    fn test_try_from_index() {
        assert!(Square::try_from_index(-1).is_err());
        assert!(Square::try_from_index(64).is_err());
        assert_eq!(Square::try_from_index(63).unwrap(), Square::new(7, 7));
    }

    #[test]
    #[should_panic]
    fn test_from_index_out_of_range_panics() {
        let _ = Square::from_index(64);
    }
}
