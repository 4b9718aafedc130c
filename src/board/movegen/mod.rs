//! Candidate-move generation, one submodule per piece category.

mod check;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, MoveList, Piece, Square};

#[cfg(test)]
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use sliders::{DIAGONAL_RAYS, ORTHOGONAL_RAYS};

impl Board {
    /// Generate the candidate destinations for the piece on `from`.
    ///
    /// Candidates respect movement, blocking, capture, promotion, and
    /// castling rules, but not whether the move would leave the mover's own
    /// king in check; that filtering belongs to the calling layer.
    ///
    /// Calling this for an empty square is a caller bug; the release build
    /// returns an empty list.
    #[must_use]
    pub fn candidate_moves(&self, from: Square) -> MoveList {
        let Some(occ) = self.occupant_at(from) else {
            debug_assert!(false, "candidate_moves called for empty square {from}");
            return MoveList::new();
        };
        let color = occ.color();
        match occ.piece() {
            Piece::Pawn => self.pawn_moves(from, color),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.slider_moves(from, color, &DIAGONAL_RAYS),
            Piece::Rook => self.slider_moves(from, color, &ORTHOGONAL_RAYS),
            Piece::Queen => self.queen_moves(from, color),
            Piece::King => self.king_moves(from, color),
        }
    }
}
