use super::Controller;
use crate::board::{Board, Color, Move};

/// A side driven by external input.
///
/// Not ready until a move has been submitted; the move is handed over
/// unchecked and validated by whoever applies it.
#[derive(Clone, Debug)]
pub struct HumanController {
    color: Color,
    pending: Option<Move>,
}

impl HumanController {
    #[must_use]
    pub fn new(color: Color) -> Self {
        HumanController {
            color,
            pending: None,
        }
    }

    /// Queue the next move, replacing any move not yet taken
    pub fn submit(&mut self, mv: Move) {
        self.pending = Some(mv);
    }
}

impl Controller for HumanController {
    fn color(&self) -> Color {
        self.color
    }

    fn turn_ready(&self) -> bool {
        self.pending.is_some()
    }

    fn play_turn(&mut self, _board: &mut Board) -> Move {
        self.pending.take().unwrap_or(Move::NONE)
    }
}
