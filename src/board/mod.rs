//! Chess board representation and move-rule logic.
//!
//! Uses a plain 8x8 mailbox of optional occupants. The crate computes, for a
//! piece on a square of a board snapshot, the set of candidate destination
//! squares under piece-movement rules, pawn promotion, and castling, and
//! separately whether a side's king is currently attacked. It never mutates
//! a board while doing so and never tracks whose turn it is; move execution,
//! self-check filtering, and game termination belong to the calling layer.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let knight_moves = board.candidate_moves(Square(0, 1));
//! assert_eq!(knight_moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use state::Board;
pub use types::{CandidateMove, Color, MoveList, MoveListIntoIter, Occupant, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
