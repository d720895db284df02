//! Data-driven checks over a shared position file.

use serde::Deserialize;

use minimax_chess::board::Board;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    perft: Vec<u64>,
    evaluation: Option<i32>,
    #[serde(default)]
    checkmate: bool,
    #[serde(default)]
    stalemate: bool,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn perft_counts() {
    for position in load().positions {
        let mut board = Board::from_fen(&position.fen);
        for (idx, &expected) in position.perft.iter().enumerate() {
            let depth = idx + 1;
            assert_eq!(
                board.perft(depth),
                expected,
                "{} at depth {depth}",
                position.name
            );
        }
    }
}

#[test]
fn static_evaluation() {
    for position in load().positions {
        let Some(expected) = position.evaluation else {
            continue;
        };
        let board = Board::from_fen(&position.fen);
        assert_eq!(board.evaluate(), expected, "{}", position.name);
    }
}

#[test]
fn terminal_positions() {
    for position in load().positions {
        let mut board = Board::from_fen(&position.fen);
        let side = board.side_to_move();
        assert_eq!(board.is_checkmate(side), position.checkmate, "{}", position.name);
        assert_eq!(board.is_stalemate(side), position.stalemate, "{}", position.name);
    }
}

#[test]
fn fen_round_trip() {
    for position in load().positions {
        let board: Board = position.fen.parse().expect("fixture FEN must parse");
        assert_eq!(board.to_fen(), position.fen, "{}", position.name);
    }
}

#[cfg(feature = "serde")]
#[test]
fn opening_book_serializes() {
    use minimax_chess::OpeningBook;

    let book = OpeningBook::standard();
    let json = serde_json::to_string(book).expect("book serializes");
    let restored: OpeningBook = serde_json::from_str(&json).expect("book deserializes");
    assert_eq!(restored.node_count(), book.node_count());
    assert_eq!(restored.start(), book.start());
}
