//! Opening book: a forest of recorded move sequences.
//!
//! The book is built once and never mutated. Callers walk it with a
//! [`BookCursor`], a borrowed view of the nodes reachable from the moves
//! played so far.

mod error;

use std::fmt;

use log::warn;
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Square};
pub use error::BookError;

const STANDARD_LINES: &str = include_str!("openings.txt");

static STANDARD: Lazy<OpeningBook> = Lazy::new(|| {
    OpeningBook::from_lines(STANDARD_LINES).unwrap_or_else(|err| {
        warn!("embedded opening book rejected, playing without it: {err}");
        OpeningBook::default()
    })
});

/// One recorded move and the replies that follow it.
///
/// Equality compares `(start, target, color)` only; children are ignored.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookMove {
    start: Square,
    target: Square,
    color: Color,
    children: Vec<BookMove>,
}

impl BookMove {
    /// A childless node, usable as a lookup key
    #[must_use]
    pub fn new(start: Square, target: Square, color: Color) -> Self {
        BookMove {
            start,
            target,
            color,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Square {
        self.target
    }

    /// Side that made this move
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[BookMove] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl PartialEq for BookMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.target == other.target && self.color == other.color
    }
}

impl Eq for BookMove {}

impl fmt::Debug for BookMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} ({}, {} replies)",
            self.start,
            self.target,
            self.color,
            self.children.len()
        )
    }
}

/// The full forest; `start()` is the set of recorded first moves.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpeningBook {
    roots: Vec<BookMove>,
}

impl OpeningBook {
    /// Build a book from text, one line of play per row.
    ///
    /// Moves are long algebraic (`e2e4`, `e7e8q`) separated by whitespace.
    /// `#` starts a comment; blank rows are skipped. Every row is replayed
    /// from the initial position, so each recorded move is legal. Rows that
    /// share a prefix share nodes; siblings keep first-seen order.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::book::OpeningBook;
    ///
    /// let book = OpeningBook::from_lines("e2e4 e7e5\ne2e4 c7c5\nd2d4").unwrap();
    /// assert_eq!(book.start().len(), 2);
    /// assert_eq!(book.start()[0].len(), 2);
    /// ```
    pub fn from_lines(text: &str) -> Result<Self, BookError> {
        let mut book = OpeningBook::default();
        for (idx, row) in text.lines().enumerate() {
            let row = row.split('#').next().unwrap_or_default();
            if row.trim().is_empty() {
                continue;
            }
            book.insert_line(idx + 1, row)?;
        }
        Ok(book)
    }

    fn insert_line(&mut self, line: usize, row: &str) -> Result<(), BookError> {
        let mut board = Board::new();
        let mut nodes = &mut self.roots;
        for token in row.split_whitespace() {
            let color = board.side_to_move();
            let mv = board.parse_move(token).map_err(|reason| BookError {
                line,
                token: token.to_string(),
                reason,
            })?;
            board.make_move(mv);

            let key = BookMove::new(mv.from(), mv.to(), color);
            let idx = match nodes.iter().position(|node| *node == key) {
                Some(idx) => idx,
                None => {
                    nodes.push(key);
                    nodes.len() - 1
                }
            };
            let current = nodes;
            nodes = &mut current[idx].children;
        }
        Ok(())
    }

    /// The process-wide book built from the embedded repertoire.
    ///
    /// Built on first use. If the embedded text were ever rejected the book
    /// is empty and a warning is logged.
    #[must_use]
    pub fn standard() -> &'static OpeningBook {
        &STANDARD
    }

    /// Recorded first moves
    #[must_use]
    pub fn start(&self) -> &[BookMove] {
        &self.roots
    }

    /// Node among `nodes` equal to `key` by `(start, target, color)`
    #[must_use]
    pub fn find_child<'b>(nodes: &'b [BookMove], key: &BookMove) -> Option<&'b BookMove> {
        nodes.iter().find(|node| *node == key)
    }

    /// Total number of recorded moves in the forest
    #[must_use]
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[BookMove]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Borrowed position inside an [`OpeningBook`].
///
/// Holds the sibling set reachable next; never owns or copies nodes.
#[derive(Clone, Copy, Debug)]
pub struct BookCursor<'a> {
    nodes: &'a [BookMove],
}

impl<'a> BookCursor<'a> {
    /// Cursor at the book's first moves
    #[must_use]
    pub fn new(book: &'a OpeningBook) -> Self {
        BookCursor { nodes: book.start() }
    }

    #[must_use]
    pub fn children(&self) -> &'a [BookMove] {
        self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn find(&self, key: &BookMove) -> Option<&'a BookMove> {
        OpeningBook::find_child(self.nodes, key)
    }

    /// Step into `node`'s replies
    pub fn advance(&mut self, node: &'a BookMove) {
        self.nodes = node.children();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveParseError;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_standard_book_roots() {
        let book = OpeningBook::standard();
        let roots: Vec<String> = book
            .start()
            .iter()
            .map(|n| format!("{}{}", n.start(), n.target()))
            .collect();
        assert_eq!(roots, ["e2e4", "d2d4", "c2c4", "g1f3"]);
        assert!(book.start().iter().all(|n| n.color() == Color::White));
    }

    #[test]
    fn test_standard_book_merges_prefixes() {
        let book = OpeningBook::standard();
        let e4 = &book.start()[0];
        let replies: Vec<String> = e4
            .children()
            .iter()
            .map(|n| format!("{}{}", n.start(), n.target()))
            .collect();
        assert_eq!(replies, ["e7e5", "c7c5", "e7e6", "c7c6", "d7d5"]);
        assert!(e4.children().iter().all(|n| n.color() == Color::Black));
    }

    #[test]
    fn test_colors_alternate_down_the_tree() {
        fn check(nodes: &[BookMove], color: Color) {
            for node in nodes {
                assert_eq!(node.color(), color, "{node:?}");
                check(node.children(), color.opponent());
            }
        }
        check(OpeningBook::standard().start(), Color::White);
    }

    #[test]
    fn test_equality_ignores_children() {
        let book = OpeningBook::from_lines("e2e4 e7e5").unwrap();
        let key = BookMove::new(sq("e2"), sq("e4"), Color::White);
        assert!(key.is_empty());
        assert_eq!(book.start()[0], key);
        assert_eq!(book.start()[0].len(), 1);
        assert_ne!(key, BookMove::new(sq("e2"), sq("e4"), Color::Black));
    }

    #[test]
    fn test_find_child() {
        let book = OpeningBook::from_lines("e2e4 e7e5\nd2d4 d7d5").unwrap();
        let key = BookMove::new(sq("d2"), sq("d4"), Color::White);
        let found = OpeningBook::find_child(book.start(), &key).unwrap();
        assert_eq!(found.children()[0].target(), sq("d5"));
        let missing = BookMove::new(sq("c2"), sq("c4"), Color::White);
        assert!(OpeningBook::find_child(book.start(), &missing).is_none());
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "# header\n\n  e2e4 e7e5 # king pawn\n\n";
        let book = OpeningBook::from_lines(text).unwrap();
        assert_eq!(book.node_count(), 2);
    }

    #[test]
    fn test_illegal_line_reports_position() {
        let err = OpeningBook::from_lines("e2e4 e7e5\n\ne2e4 e7e5 e1e3").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.token, "e1e3");
        assert!(matches!(err.reason, MoveParseError::IllegalMove { .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_cursor_walk() {
        let book = OpeningBook::from_lines("e2e4 e7e5 g1f3\ne2e4 c7c5").unwrap();
        let mut cursor = BookCursor::new(&book);
        assert_eq!(cursor.len(), 1);
        let e4 = cursor.find(&BookMove::new(sq("e2"), sq("e4"), Color::White)).unwrap();
        cursor.advance(e4);
        assert_eq!(cursor.len(), 2);
        let c5 = cursor.find(&BookMove::new(sq("c7"), sq("c5"), Color::Black)).unwrap();
        cursor.advance(c5);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_empty_book() {
        let book = OpeningBook::from_lines("# nothing here").unwrap();
        assert!(book.is_empty());
        assert!(BookCursor::new(&book).is_empty());
    }
}
