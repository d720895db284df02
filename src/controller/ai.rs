use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{AiConfig, Controller};
use crate::board::{find_best_move, Board, Color, Move, SearchStats};
use crate::book::{BookCursor, BookMove, OpeningBook};

/// Computer player: opening book first, fixed-depth search after.
///
/// The book is only followed while every move of the game so far is in it.
/// The first time the game leaves the book (or the book cannot supply a
/// legal move) the controller switches to search for good.
pub struct AiController<'a> {
    config: AiConfig,
    use_book: bool,
    cursor: BookCursor<'a>,
    rng: StdRng,
    last_search: Option<SearchStats>,
}

impl<'a> AiController<'a> {
    /// Controller over `book`, seeded from the wall clock.
    #[must_use]
    pub fn new(config: AiConfig, book: &'a OpeningBook) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::with_seed(config, book, seed)
    }

    /// Controller with a fixed seed for reproducible book choices.
    #[must_use]
    pub fn with_seed(config: AiConfig, book: &'a OpeningBook, seed: u64) -> Self {
        AiController {
            use_book: config.use_book,
            config,
            cursor: BookCursor::new(book),
            rng: StdRng::seed_from_u64(seed),
            last_search: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Whether the book is still consulted. Once false, stays false.
    #[must_use]
    pub fn use_book(&self) -> bool {
        self.use_book
    }

    /// Counters from the most recent search, `None` while playing from book
    #[must_use]
    pub fn last_search(&self) -> Option<SearchStats> {
        self.last_search
    }

    fn leave_book(&mut self, why: &str) {
        debug!("{} leaves the opening book: {why}", self.config.color);
        self.use_book = false;
    }

    /// Book move for this turn, or `Move::NONE` when search must decide.
    fn play_by_book(&mut self, board: &mut Board) -> Move {
        let last = board.last_move();
        if last.is_none() {
            return self.pick_book_move(board);
        }

        let key = BookMove::new(last.from(), last.to(), self.config.color.opponent());
        let Some(node) = self.cursor.find(&key) else {
            self.leave_book("opponent move not in book");
            return Move::NONE;
        };
        self.cursor.advance(node);
        if self.cursor.is_empty() {
            self.leave_book("line ends here");
            return Move::NONE;
        }
        self.pick_book_move(board)
    }

    /// Random child of the cursor, resolved against the legal moves.
    fn pick_book_move(&mut self, board: &mut Board) -> Move {
        let candidates = self.cursor.children();
        if candidates.is_empty() {
            self.leave_book("no book moves");
            return Move::NONE;
        }
        let node = &candidates[self.rng.gen_range(0..candidates.len())];
        if node.color() != self.config.color {
            self.leave_book("book moves are for the other side");
            return Move::NONE;
        }

        match board.find_legal_move(node.color(), node.start(), node.target()) {
            Some(mv) => {
                self.cursor.advance(node);
                debug!("{} plays {mv} from book", self.config.color);
                mv
            }
            None => {
                self.leave_book("book move is not legal here");
                Move::NONE
            }
        }
    }
}

impl Controller for AiController<'_> {
    fn color(&self) -> Color {
        self.config.color
    }

    fn turn_ready(&self) -> bool {
        true
    }

    fn play_turn(&mut self, board: &mut Board) -> Move {
        if self.use_book {
            let mv = self.play_by_book(board);
            if !mv.is_none() {
                return mv;
            }
        }

        let depth = self.config.difficulty.depth();
        let result = find_best_move(board, self.config.color, depth, self.config.limits);
        self.last_search = Some(result.stats);
        result.best_move
    }
}
