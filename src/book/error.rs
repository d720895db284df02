use std::fmt;

use crate::board::MoveParseError;

/// A book line that cannot be parsed or replayed from the start position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookError {
    /// 1-based line number in the source text
    pub line: usize,
    /// The offending move token
    pub token: String,
    pub reason: MoveParseError,
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book line {}: cannot play '{}': {}",
            self.line, self.token, self.reason
        )
    }
}

impl std::error::Error for BookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
