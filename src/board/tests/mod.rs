//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `make_unmake.rs` - Make/undo correctness for every special move
//! - `eval.rs` - Static evaluation values
//! - `search.rs` - Minimax and root move selection
//! - `proptest.rs` - Property-based tests

mod eval;
