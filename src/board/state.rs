use super::{CastlingRights, Color, Move, PackedPiece, Piece, Square};

/// Everything needed to reverse one `make_move` exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) captured: PackedPiece,
    pub(crate) captured_square: Square,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UndoRecord {
    /// The move this record reverses
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Piece removed by the move, if any
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured.unpack()
    }
}

/// A chess position: 64 packed squares plus the state needed to undo moves.
///
/// The board is mutated in place by `make_move` and restored by `undo`; the
/// undo records form a stack, so every `make_move` must be paired with one
/// `undo` along the same call path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [PackedPiece; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<UndoRecord>,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            let file = file as u8;
            board.set_piece(Square::new(0, file), Color::White, *piece);
            board.set_piece(Square::new(7, file), Color::Black, *piece);
            board.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [PackedPiece::EMPTY; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = PackedPiece::new(color, piece);
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.index()] = PackedPiece::EMPTY;
    }

    /// Raw packed contents of a square
    #[inline]
    #[must_use]
    pub fn packed(&self, sq: Square) -> PackedPiece {
        self.squares[sq.index()]
    }

    /// Color and type of the piece on a square, `None` when empty
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].unpack()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_empty()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of occupied squares
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|p| !p.is_empty()).count()
    }

    /// Most recently applied move, or `Move::NONE` when nothing has been played
    #[must_use]
    pub fn last_move(&self) -> Move {
        self.history.last().map_or(Move::NONE, |record| record.mv)
    }

    /// Undo records currently on the stack, oldest first
    #[must_use]
    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        let king = PackedPiece::new(color, Piece::King);
        self.squares
            .iter()
            .position(|&p| p == king)
            .map(Square::from_index)
    }

    /// Colour-swapped, rank-flipped copy of the position (history dropped).
    ///
    /// A White pawn on e2 becomes a Black pawn on e7; side to move, castling
    /// rights and the en passant square follow.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            board.squares[sq.flip_vertical().index()] = self.squares[sq.index()].swap_color();
        }
        board.side_to_move = self.side_to_move.opponent();
        board.castling_rights = self.castling_rights.swap_colors();
        board.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
