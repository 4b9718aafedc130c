//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pawns.rs` - pawn pushes, double steps, captures, promotion
//! - `knights.rs` - knight offsets and jumping
//! - `sliders.rs` - rook/bishop/queen rays and blocking
//! - `kings.rs` - king steps and castling preconditions
//! - `check.rs` - check detection
//! - `fen.rs` - FEN parsing and castle-eligibility mapping
//! - `proptest.rs` - property-based tests over random boards

mod fen;
mod knights;

use crate::board::{Board, MoveList, Square};

/// Collect the plain destination squares of a move list, sorted.
pub(crate) fn dests(moves: &MoveList) -> Vec<Square> {
    let mut squares: Vec<Square> = moves.iter().map(|m| m.dest()).collect();
    squares.sort();
    squares.dedup();
    squares
}

/// Board with only the two kings, tucked into opposite corners where they
/// stay out of every test's way.
pub(crate) fn kings_only() -> Board {
    Board::try_from_fen("7k/8/8/8/8/8/8/K7").expect("valid fen")
}
