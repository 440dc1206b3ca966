//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts against published reference positions
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Checks, pins, en passant and castling corner cases
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod perft;

use crate::board::Square;

pub(super) fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

/// Destinations of the piece on `from`, as sorted coordinates.
pub(super) fn dests(position: &crate::board::Position, from: &str) -> Vec<String> {
    let mut squares: Vec<String> = position
        .destinations(sq(from))
        .iter()
        .map(|s| s.to_string())
        .collect();
    squares.sort();
    squares
}
