//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rule
//! engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Occupant` - a placed piece with its castle-eligibility state
//! - `Square` - board square as (rank, file)
//! - `CandidateMove` and `MoveList` - candidate destination representation

mod moves;
mod occupant;
mod piece;
mod square;

// Re-export all public types
pub use moves::{CandidateMove, MoveList, MoveListIntoIter};
pub use occupant::Occupant;
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
