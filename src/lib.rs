pub mod board;

pub use board::{Board, BoardBuilder, CandidateMove, Color, MoveList, Occupant, Piece, Square};
