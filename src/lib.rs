//! Minimax chess engine core.
//!
//! - [`board`]: position, move generation, evaluation, alpha-beta search
//! - [`book`]: opening book forest and cursor
//! - [`controller`]: the per-side `Controller` seam with AI and human players
//! - [`game`]: a session driver stepping two controllers over one board

pub mod board;
pub mod book;
pub mod controller;
pub mod game;

pub use board::{Board, Color, Move, Piece, Square};
pub use book::OpeningBook;
pub use controller::{AiConfig, AiController, Controller, Difficulty, HumanController};
pub use game::{Game, GameError, GameResult, TurnOutcome};
