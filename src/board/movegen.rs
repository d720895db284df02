use super::{Board, Color, GroupedMoves, Move, MoveGroup, Piece, Square, PROMOTION_PIECES};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// All legal moves for `color`, grouped by origin square (a1..h8).
    ///
    /// Takes `&mut self` because legality is checked by making each candidate
    /// and undoing it; the board is unchanged on return.
    pub fn generate_all(&mut self, color: Color) -> GroupedMoves {
        let mut grouped = GroupedMoves::new();
        for from in Square::all() {
            let packed = self.packed(from);
            if !packed.is_color(color) {
                continue;
            }
            let Some(piece) = packed.piece() else {
                continue;
            };
            let mut moves = Vec::new();
            for m in self.generate_piece_moves(from, color, piece) {
                if self.is_legal_after(m, color) {
                    moves.push(m);
                }
            }
            grouped.push_group(MoveGroup { from, moves });
        }
        grouped
    }

    /// Legal moves for the side to move
    pub fn generate_moves(&mut self) -> GroupedMoves {
        self.generate_all(self.side_to_move)
    }

    /// The legal move of `color` from `from` to `to`, if any.
    ///
    /// Promotions resolve to the queen.
    pub fn find_legal_move(&mut self, color: Color, from: Square, to: Square) -> Option<Move> {
        let packed = self.packed(from);
        if !packed.is_color(color) {
            return None;
        }
        let piece = packed.piece()?;
        self.generate_piece_moves(from, color, piece)
            .into_iter()
            .filter(|m| m.to() == to)
            .find(|&m| self.is_legal_after(m, color))
    }

    fn is_legal_after(&mut self, m: Move, color: Color) -> bool {
        self.make_move(m);
        let legal = !self.is_in_check(color);
        self.undo();
        legal
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
            Piece::Knight => self.generate_step_moves(from, color, &KNIGHT_OFFSETS, &mut moves),
            Piece::Bishop => {
                self.generate_sliding_moves(from, color, &DIAGONAL_DIRECTIONS, &mut moves);
            }
            Piece::Rook => {
                self.generate_sliding_moves(from, color, &STRAIGHT_DIRECTIONS, &mut moves);
            }
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &STRAIGHT_DIRECTIONS, &mut moves);
                self.generate_sliding_moves(from, color, &DIAGONAL_DIRECTIONS, &mut moves);
            }
            Piece::King => {
                self.generate_step_moves(from, color, &KING_OFFSETS, &mut moves);
                self.generate_castling_moves(from, color, &mut moves);
            }
        }
        moves
    }

    fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                if forward.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion_to(from, forward, promo, false));
                    }
                } else {
                    moves.push(Move::quiet(from, forward));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double) = forward.offset(dir, 0) {
                            if self.is_empty(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    if target.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::promotion_to(from, target, promo, true));
                        }
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
                Some(_) => {}
                None => {
                    // The en passant square sits on rank 6 for White, rank 3 for Black
                    let ep_rank = if color == Color::White { 5 } else { 2 };
                    if Some(target) == self.en_passant_target && target.rank() == ep_rank {
                        moves.push(Move::en_passant(from, target));
                    }
                }
            }
        }
    }

    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((c, _)) if c != color => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
    }

    fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let back_rank = color.back_rank();
        if from != Square::new(back_rank, 4) {
            return;
        }
        let opponent = color.opponent();
        let rook_home = |file: u8| self.packed(Square::new(back_rank, file)).is(color, Piece::Rook);
        let empty = |file: u8| self.is_empty(Square::new(back_rank, file));
        let safe = |file: u8| !self.is_square_attacked(Square::new(back_rank, file), opponent);

        if self.castling_rights.has(color, true)
            && rook_home(7)
            && empty(5)
            && empty(6)
            && safe(4)
            && safe(5)
            && safe(6)
        {
            moves.push(Move::castle_kingside(from, Square::new(back_rank, 6)));
        }
        if self.castling_rights.has(color, false)
            && rook_home(0)
            && empty(1)
            && empty(2)
            && empty(3)
            && safe(4)
            && safe(3)
            && safe(2)
        {
            moves.push(Move::castle_queenside(from, Square::new(back_rank, 2)));
        }
    }

    /// True when any piece of `attacker` attacks `square`
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // A pawn attacks diagonally forward, so look one rank behind the target
        let back = -attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(back, df) {
                if self.packed(sq).is(attacker, Piece::Pawn) {
                    return true;
                }
            }
        }

        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.packed(sq).is(attacker, Piece::Knight) {
                    return true;
                }
            }
        }

        for &(dr, df) in &KING_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.packed(sq).is(attacker, Piece::King) {
                    return true;
                }
            }
        }

        self.ray_hits(square, attacker, &STRAIGHT_DIRECTIONS, Piece::Rook)
            || self.ray_hits(square, attacker, &DIAGONAL_DIRECTIONS, Piece::Bishop)
    }

    /// First piece along each ray is `slider` or a queen of `attacker`
    fn ray_hits(
        &self,
        square: Square,
        attacker: Color,
        directions: &[(i8, i8)],
        slider: Piece,
    ) -> bool {
        for &(dr, df) in directions {
            let mut current = square;
            while let Some(sq) = current.offset(dr, df) {
                let packed = self.packed(sq);
                if !packed.is_empty() {
                    if packed.is(attacker, slider) || packed.is(attacker, Piece::Queen) {
                        return true;
                    }
                    break;
                }
                current = sq;
            }
        }
        false
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.generate_all(color).is_empty()
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.generate_all(color).is_empty()
    }

    /// Count leaf nodes of the legal move tree from the side to move.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo();
        }

        nodes
    }
}
