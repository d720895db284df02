//! Core chess types.
//!
//! - `Piece` and `Color` - piece types and colors
//! - `PackedPiece` - compact per-square encoding used by the board array
//! - `Square` - rank-major square index
//! - `Move`, `MoveGroup`, `GroupedMoves` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{GroupedMoves, Move, MoveGroup};
pub use piece::{Color, PackedPiece, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
