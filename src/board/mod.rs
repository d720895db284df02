//! Chess board representation and game logic.
//!
//! A mailbox of 64 packed squares with an undo stack. Move generation is
//! pseudo-legal generation filtered by make/check/undo, which keeps the rules
//! in one place at the cost of speed.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.generate_all(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use search::{
    find_best_move, minimax, minimax_with_limits, SearchLimits, SearchResult, SearchStats,
};
pub use state::{Board, UndoRecord};
pub use types::{CastlingRights, Color, GroupedMoves, Move, MoveGroup, PackedPiece, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
