//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! - Moves are tried in generation order; no ordering heuristics
//! - No transposition table, no iterative deepening, no quiescence
//! - Optional node budget: once spent, remaining nodes are scored statically

mod limits;

use log::{debug, trace};

use super::{Board, Color, Move};
pub use limits::SearchLimits;

/// Counters gathered over one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `minimax`, root children included
    pub nodes: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// True once the node budget ran out
    pub budget_exhausted: bool,
}

/// Result of a root search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the searching side, `Move::NONE` when it has none
    pub best_move: Move,
    /// Minimax value of `best_move` (static evaluation when there is no move)
    pub score: i32,
    pub stats: SearchStats,
}

struct Search {
    limits: SearchLimits,
    stats: SearchStats,
}

impl Search {
    fn new(limits: SearchLimits) -> Self {
        Search {
            limits,
            stats: SearchStats::default(),
        }
    }

    fn budget_spent(&mut self) -> bool {
        match self.limits.max_nodes {
            Some(max) if self.stats.nodes > max => {
                self.stats.budget_exhausted = true;
                true
            }
            _ => false,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || self.budget_spent() {
            return board.evaluate();
        }

        let mover = if maximizing { Color::White } else { Color::Black };
        let moves = board.generate_all(mover);
        if moves.is_empty() {
            // Checkmate or stalemate: score the position as a leaf
            return board.evaluate();
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for m in moves.iter() {
                board.make_move(m);
                let eval = self.minimax(board, depth - 1, alpha, beta, false);
                board.undo();

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    return max_eval;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for m in moves.iter() {
                board.make_move(m);
                let eval = self.minimax(board, depth - 1, alpha, beta, true);
                board.undo();

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    return min_eval;
                }
            }
            min_eval
        }
    }

    fn best_move(&mut self, board: &mut Board, color: Color, depth: u32) -> (Move, i32) {
        let moves = board.generate_all(color);
        if moves.is_empty() {
            return (Move::NONE, board.evaluate());
        }

        let mut best_move = Move::NONE;
        let mut best_value = match color {
            Color::White => i32::MIN,
            Color::Black => i32::MAX,
        };

        for m in moves.iter() {
            board.make_move(m);
            // Each root move gets the full window so its value is exact
            let value = self.minimax(
                board,
                depth.saturating_sub(1),
                i32::MIN,
                i32::MAX,
                color == Color::Black,
            );
            board.undo();
            trace!("root {m} -> {value}");

            let improves = match color {
                Color::White => value > best_value,
                Color::Black => value < best_value,
            };
            if improves || best_move.is_none() {
                best_value = value;
                best_move = m;
            }
        }
        (best_move, best_value)
    }
}

/// Pick the best move for `color` searching `depth` plies.
///
/// Ties keep the first move in generation order. The board is restored
/// before returning.
pub fn find_best_move(
    board: &mut Board,
    color: Color,
    depth: u32,
    limits: SearchLimits,
) -> SearchResult {
    let mut search = Search::new(limits);
    let (best_move, score) = search.best_move(board, color, depth);
    debug!(
        "search {color} depth {depth}: best {best_move} score {score} nodes {} cutoffs {}",
        search.stats.nodes, search.stats.cutoffs
    );
    SearchResult {
        best_move,
        score,
        stats: search.stats,
    }
}

/// Alpha-beta minimax value of the position, White maximizing.
///
/// `maximizing` selects the side to move (White when true). Fail-hard: a
/// cutoff returns the running best as soon as `beta <= alpha`.
pub fn minimax(board: &mut Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    Search::new(SearchLimits::default()).minimax(board, depth, alpha, beta, maximizing)
}

/// [`minimax`] under a node budget, returning the value and the counters.
pub fn minimax_with_limits(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    limits: SearchLimits,
) -> (i32, SearchStats) {
    let mut search = Search::new(limits);
    let value = search.minimax(board, depth, i32::MIN, i32::MAX, maximizing);
    (value, search.stats)
}
