use std::fmt;

use super::{Board, Square};

const RULE: &str = "  +---+---+---+---+---+---+---+---+";

/// ASCII diagram, rank 8 at the top, followed by the FEN.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let ch = self
                    .piece_at(Square::new(rank, file))
                    .map_or(' ', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_start_position() {
        let text = Board::new().to_string();
        assert!(text.starts_with(RULE));
        assert!(text.contains("8 | r | n | b | q | k | b | n | r |"));
        assert!(text.contains("1 | R | N | B | Q | K | B | N | R |"));
        assert!(text.ends_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    }
}
