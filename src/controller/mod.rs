//! Turn controllers: the seam between the engine and whoever drives a game.
//!
//! A presentation layer asks the controller of the side to move whether it
//! is ready, then takes its move. [`AiController`] is always ready;
//! [`HumanController`] waits for a move to be submitted.

mod ai;
mod human;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, SearchLimits};
pub use ai::AiController;
pub use human::HumanController;

/// One side of a game.
pub trait Controller {
    /// Side this controller plays
    fn color(&self) -> Color;

    /// True when `play_turn` can return a move without waiting for input
    fn turn_ready(&self) -> bool;

    /// Choose a move for the current position.
    ///
    /// Returns `Move::NONE` only when no move is available. The board is left
    /// as it was found; applying the move is the caller's job.
    fn play_turn(&mut self, board: &mut Board) -> Move;
}

/// Playing strength, mapped one-to-one onto search depth in plies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Difficulty {
    Beginner = 1,
    Easy = 2,
    #[default]
    Medium = 3,
    Hard = 4,
    Expert = 5,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Search depth in plies
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .into_iter()
            .find(|d| *d as u8 == level)
            .ok_or(DifficultyError { level })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        write!(f, "{name} (depth {})", self.depth())
    }
}

/// Difficulty level outside 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyError {
    pub level: u8,
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid difficulty {}: expected 1-5", self.level)
    }
}

impl std::error::Error for DifficultyError {}

/// Construction-time settings for an [`AiController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiConfig {
    pub color: Color,
    pub difficulty: Difficulty,
    /// Consult the opening book until the game leaves it
    pub use_book: bool,
    pub limits: SearchLimits,
}

impl AiConfig {
    /// Book enabled, no node budget
    #[must_use]
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        AiConfig {
            color,
            difficulty,
            use_book: true,
            limits: SearchLimits::default(),
        }
    }

    #[must_use]
    pub fn without_book(mut self) -> Self {
        self.use_book = false;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}
