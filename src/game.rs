//! A game session: one board, one controller per side.

use std::fmt;

use log::{debug, info};

use crate::board::{Board, Color, Move};
use crate::controller::Controller;

/// How a finished game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
    /// The side to move had legal moves but its controller returned none
    Resignation { winner: Color },
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameResult::Stalemate => write!(f, "Draw by stalemate"),
            GameResult::Resignation { winner } => write!(f, "{winner} wins by resignation"),
        }
    }
}

/// What one call to [`Game::step`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The side to move is waiting for input
    Waiting,
    Moved(Move),
    Finished(GameResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A controller offered a move that is not legal in the position
    IllegalMove { color: Color, mv: Move },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { color, mv } => {
                write!(f, "Illegal move {mv} played by {color}")
            }
        }
    }
}

impl std::error::Error for GameError {}

pub struct Game<'a> {
    board: Board,
    white: Box<dyn Controller + 'a>,
    black: Box<dyn Controller + 'a>,
    result: Option<GameResult>,
}

impl<'a> Game<'a> {
    /// # Panics
    /// Panics when a controller plays the wrong colour.
    #[must_use]
    pub fn new(
        board: Board,
        white: Box<dyn Controller + 'a>,
        black: Box<dyn Controller + 'a>,
    ) -> Self {
        assert_eq!(white.color(), Color::White, "white controller plays black");
        assert_eq!(black.color(), Color::Black, "black controller plays white");
        Game {
            board,
            white,
            black,
            result: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Moves applied since the session started
    #[must_use]
    pub fn plies(&self) -> usize {
        self.board.history_len()
    }

    /// Advance the game by at most one move.
    ///
    /// An illegal move is rejected without touching the board; the same
    /// side is asked again on the next call.
    pub fn step(&mut self) -> Result<TurnOutcome, GameError> {
        if let Some(result) = self.result {
            return Ok(TurnOutcome::Finished(result));
        }

        let side = self.board.side_to_move();
        let legal = self.board.generate_all(side);
        if legal.is_empty() {
            let result = if self.board.is_in_check(side) {
                GameResult::Checkmate {
                    winner: side.opponent(),
                }
            } else {
                GameResult::Stalemate
            };
            return Ok(self.finish(result));
        }

        let controller = match side {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        if !controller.turn_ready() {
            return Ok(TurnOutcome::Waiting);
        }

        let mv = controller.play_turn(&mut self.board);
        if mv.is_none() {
            return Ok(self.finish(GameResult::Resignation {
                winner: side.opponent(),
            }));
        }
        if !legal.contains(mv) {
            return Err(GameError::IllegalMove { color: side, mv });
        }

        self.board.make_move(mv);
        debug!("{side} played {mv}");
        Ok(TurnOutcome::Moved(mv))
    }

    fn finish(&mut self, result: GameResult) -> TurnOutcome {
        info!("game over after {} plies: {result}", self.plies());
        self.result = Some(result);
        TurnOutcome::Finished(result)
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
