//! Errors raised while reading positions, moves and squares from text.

use std::fmt;

use super::Color;

/// Why a FEN record was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields (placement, side, castling, en passant)
    TooFewParts { found: usize },
    /// Placement holds a letter that names no piece
    InvalidPiece { found: char },
    /// Castling field holds something other than `KQkq` or `-`
    InvalidCastling { found: char },
    InvalidSideToMove { found: String },
    InvalidEnPassant { found: String },
    /// Placement describes more than eight ranks
    InvalidRank { rank: usize },
    /// A rank overflows the h-file
    TooManyFiles { rank: usize, files: usize },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { field: &'static str, found: String },
    /// `color` has `found` kings instead of one
    KingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN has {found} fields, at least 4 are required")
            }
            FenError::InvalidPiece { found } => write!(f, "unknown piece letter '{found}'"),
            FenError::InvalidCastling { found } => {
                write!(f, "unexpected '{found}' in castling field")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move is '{found}', not 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "en passant field '{found}' is not a square")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "placement has a rank #{} past the eighth", rank + 1)
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "rank #{} spans {files} files", rank + 1)
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "{field} '{found}' is not a number")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} has {found} kings, exactly one is required")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a long-algebraic move string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not 4 or 5 ASCII characters
    InvalidLength { len: usize },
    InvalidSquare { notation: String },
    /// Promotion suffix is not one of `q`, `r`, `b`, `n`
    InvalidPromotion { found: char },
    /// Well formed, but no legal move of the side to move matches it
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move text has {len} characters, expected 4 or 5")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "'{notation}' does not name two squares")
            }
            MoveParseError::InvalidPromotion { found } => {
                write!(f, "cannot promote to '{found}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not legal here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    IndexOutOfRange { index: i32 },
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "square index {index} is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_messages_name_the_offending_field() {
        let err = FenError::TooFewParts { found: 2 };
        assert_eq!(err.to_string(), "FEN has 2 fields, at least 4 are required");

        let err = FenError::InvalidCounter {
            field: "halfmove clock",
            found: "x".to_string(),
        };
        assert_eq!(err.to_string(), "halfmove clock 'x' is not a number");

        let err = FenError::TooManyFiles { rank: 0, files: 9 };
        assert_eq!(err.to_string(), "rank #1 spans 9 files");
    }

    #[test]
    fn test_king_count_names_the_color() {
        let err = FenError::KingCount {
            color: Color::Black,
            found: 0,
        };
        assert_eq!(err.to_string(), "Black has 0 kings, exactly one is required");
    }

    #[test]
    fn test_move_error_quotes_the_input() {
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert_eq!(err.to_string(), "'e2e5' is not legal here");
        assert_eq!(
            MoveParseError::InvalidPromotion { found: 'k' }.to_string(),
            "cannot promote to 'k'"
        );
    }

    #[test]
    fn test_square_error_index() {
        let err = SquareError::IndexOutOfRange { index: 64 };
        assert_eq!(err.to_string(), "square index 64 is off the board");
    }
}
