use super::pst::{table_for, ENDGAME_PIECE_THRESHOLD};
use super::{Board, Square};

impl Board {
    /// True when the king tables switch to their endgame variant.
    ///
    /// A hard cutover on the total piece count, both kings included.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.piece_count() < ENDGAME_PIECE_THRESHOLD
    }

    /// Static evaluation in centipawns: positive favors White.
    ///
    /// Material plus piece-square bonus for every piece; Black's terms are
    /// subtracted. Depends on nothing but the current squares.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let endgame = self.is_endgame();
        let mut score = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                let positional = table_for(color, piece, endgame)[sq.index()];
                score += color.sign() * (piece.value() + positional);
            }
        }
        score
    }
}
