use super::{Board, Color, Move, PackedPiece, Piece, Square, UndoRecord};

/// Rook (from, to) files for a castle landing on `king_to_file`
#[inline]
fn castling_rook_files(king_to_file: u8) -> (u8, u8) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Board {
    /// Apply `m`, pushing an undo record.
    ///
    /// The move must be legal for the piece on its start square; the color
    /// that moves is the color of that piece.
    ///
    /// # Panics
    /// Panics on the sentinel move or when the start square is empty.
    pub fn make_move(&mut self, m: Move) {
        assert!(!m.is_none(), "make_move called with the sentinel move");
        let from = m.from();
        let to = m.to();
        let (color, moving_piece) = self
            .piece_at(from)
            .expect("make_move 'from' square empty");

        let captured_square = if m.is_en_passant() {
            Square::new(from.rank(), to.file())
        } else {
            to
        };
        let captured = if m.is_castling() {
            PackedPiece::EMPTY
        } else {
            self.packed(captured_square)
        };
        // Legal play never reaches a position where a king can be taken
        debug_assert!(
            captured.piece() != Some(Piece::King),
            "move {m} captures a king"
        );

        self.history.push(UndoRecord {
            mv: m,
            captured,
            captured_square,
            previous_side_to_move: self.side_to_move,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        });

        if !captured.is_empty() {
            self.clear_square(captured_square);
        }
        self.clear_square(from);
        let placed = m.promotion().unwrap_or(moving_piece);
        self.set_piece(to, color, placed);

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_files(to.file());
            let rook_from_sq = Square::new(to.rank(), rook_from);
            debug_assert!(self.packed(rook_from_sq).is(color, Piece::Rook));
            self.clear_square(rook_from_sq);
            self.set_piece(Square::new(to.rank(), rook_to), color, Piece::Rook);
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square::new((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };

        if moving_piece == Piece::King {
            self.castling_rights.remove_color(color);
        } else if moving_piece == Piece::Rook {
            self.clear_corner_right(color, from);
        }
        if let Some((captured_color, Piece::Rook)) = captured.unpack() {
            self.clear_corner_right(captured_color, captured_square);
        }

        if moving_piece == Piece::Pawn || !captured.is_empty() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();
    }

    /// Pop the most recent undo record and restore the prior position exactly.
    ///
    /// Returns the move that was taken back.
    ///
    /// # Panics
    /// Panics when no move has been made.
    pub fn undo(&mut self) -> Move {
        let record = self.history.pop().expect("undo with empty move history");
        let m = record.mv;
        let from = m.from();
        let to = m.to();
        let (color, placed) = self
            .piece_at(to)
            .expect("undo: 'to' square empty");
        let original = if m.is_promotion() { Piece::Pawn } else { placed };

        self.clear_square(to);
        self.set_piece(from, color, original);

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_files(to.file());
            self.clear_square(Square::new(to.rank(), rook_to));
            self.set_piece(Square::new(to.rank(), rook_from), color, Piece::Rook);
        }

        if !record.captured.is_empty() {
            self.squares[record.captured_square.index()] = record.captured;
        }

        self.side_to_move = record.previous_side_to_move;
        self.castling_rights = record.previous_castling_rights;
        self.en_passant_target = record.previous_en_passant_target;
        self.halfmove_clock = record.previous_halfmove_clock;
        self.fullmove_number = record.previous_fullmove_number;
        m
    }

    fn clear_corner_right(&mut self, color: Color, sq: Square) {
        let back_rank = color.back_rank();
        if sq == Square::new(back_rank, 0) {
            self.castling_rights.remove(color, false);
        } else if sq == Square::new(back_rank, 7) {
            self.castling_rights.remove(color, true);
        }
    }
}
