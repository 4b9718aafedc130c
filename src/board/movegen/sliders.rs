use super::super::{Board, CandidateMove, Color, MoveList, Square};

/// Rook rays: left, right, down, up
pub(crate) const ORTHOGONAL_RAYS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Bishop rays
pub(crate) const DIAGONAL_RAYS: [(isize, isize); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

impl Board {
    /// Walk each ray outward from `from`, stopping at the board edge, at a
    /// same-color piece (excluded), or at an opponent piece (included).
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        self.slide_rays(from, color, rays, &mut moves);
        moves
    }

    /// Queen moves are the rook and bishop ray sets combined.
    pub(crate) fn queen_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.slide_rays(from, color, &ORTHOGONAL_RAYS, &mut moves);
        self.slide_rays(from, color, &DIAGONAL_RAYS, &mut moves);
        moves
    }

    fn slide_rays(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in rays {
            let mut r = from.rank() as isize + dr;
            let mut f = from.file() as isize + df;
            while self.is_available(r, f, color) {
                let sq = Square(r as usize, f as usize);
                moves.push(CandidateMove::to(sq));
                if !self.is_empty(sq) {
                    // Capture square ends the ray
                    break;
                }
                r += dr;
                f += df;
            }
        }
    }
}
