use super::super::{Board, CandidateMove, Color, MoveList, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
];

impl Board {
    /// One-step moves in the eight directions, plus castling.
    ///
    /// Castling requires: king castle-eligible and on its home square, the
    /// squares between king and rook empty, a same-colored castle-eligible
    /// rook on its home corner, and the side not currently in check. The
    /// squares the king crosses are NOT tested for attack; callers wanting
    /// strict legality must filter the candidate themselves. Executing the
    /// castle (moving the rook, clearing flags) is the calling layer's job.
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let r = from.rank() as isize;
        let f = from.file() as isize;

        for (dr, df) in KING_OFFSETS {
            if self.is_available(r + dr, f + df, color) {
                moves.push(CandidateMove::to(Square((r + dr) as usize, (f + df) as usize)));
            }
        }

        let home = color.back_rank();
        let eligible = self
            .occupant_at(from)
            .is_some_and(|occ| occ.can_castle());
        if eligible && from == Square(home, 4) {
            if self.is_empty(Square(home, 1))
                && self.is_empty(Square(home, 2))
                && self.is_empty(Square(home, 3))
                && self.rook_can_castle(Square(home, 0), color)
                && self.checked_king(color).is_none()
            {
                moves.push(CandidateMove::to(Square(home, 2)));
            }
            if self.is_empty(Square(home, 5))
                && self.is_empty(Square(home, 6))
                && self.rook_can_castle(Square(home, 7), color)
                && self.checked_king(color).is_none()
            {
                moves.push(CandidateMove::to(Square(home, 6)));
            }
        }

        moves
    }

    fn rook_can_castle(&self, corner: Square, color: Color) -> bool {
        self.occupant_at(corner).is_some_and(|occ| {
            occ.color() == color && occ.piece() == Piece::Rook && occ.can_castle()
        })
    }
}
