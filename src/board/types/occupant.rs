//! Placed-piece state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};

/// A piece standing on a board square.
///
/// Besides its kind and color, an occupant carries the castle-eligibility
/// flag required by the castling rule. The flag starts true and the rule
/// engine never clears it: the move-execution layer must call
/// [`Board::mark_moved`](crate::board::Board::mark_moved) the first time a
/// rook or king moves (or castles). For other kinds the flag is meaningless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Occupant {
    color: Color,
    piece: Piece,
    castle_eligible: bool,
}

impl Occupant {
    /// Create a freshly placed piece. Rooks and kings start castle-eligible.
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Occupant {
            color,
            piece,
            castle_eligible: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// True until the move-execution layer reports this piece as moved.
    #[inline]
    #[must_use]
    pub const fn can_castle(self) -> bool {
        self.castle_eligible
    }

    /// Clear castle eligibility. Called (via the board) by the
    /// move-execution layer on this piece's first move.
    #[inline]
    pub fn set_moved(&mut self) {
        self.castle_eligible = false;
    }

    /// Point value with the color's sign applied (White positive).
    #[inline]
    #[must_use]
    pub const fn signed_value(self) -> i32 {
        self.piece.value() * self.color.sign()
    }

    /// FEN character for this occupant (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        self.piece.to_fen_char(self.color)
    }
}
