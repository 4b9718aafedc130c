use super::super::{Board, CandidateMove, Color, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.direction();
        let promotion_rank = color.promotion_rank();

        let r = from.rank() as isize;
        let f = from.file() as isize;

        // A pawn on the terminal rank should already have promoted; guard
        // the forward index instead of assuming it.
        let forward_r = r + dir;
        if (0..8).contains(&forward_r) {
            let forward_sq = Square(forward_r as usize, f as usize);
            if self.is_empty(forward_sq) {
                push_pawn_dest(&mut moves, forward_sq, promotion_rank);

                // Double step only from the start rank, and only when the
                // single step was open.
                if from.rank() == color.pawn_start_rank() {
                    let double_sq = Square((r + 2 * dir) as usize, f as usize);
                    if self.is_empty(double_sq) {
                        moves.push(CandidateMove::to(double_sq));
                    }
                }
            }

            for df in [-1, 1] {
                let capture_f = f + df;
                // Diagonals are captures only: the square must hold an
                // opponent, never be merely empty. En passant is not
                // modeled.
                if self.is_available(forward_r, capture_f, color)
                    && !self.is_empty(Square(forward_r as usize, capture_f as usize))
                {
                    let target_sq = Square(forward_r as usize, capture_f as usize);
                    push_pawn_dest(&mut moves, target_sq, promotion_rank);
                }
            }
        }

        moves
    }
}

/// Append `to` as a candidate, splitting into the four promotion choices
/// when it lies on the promotion rank.
fn push_pawn_dest(moves: &mut MoveList, to: Square, promotion_rank: usize) {
    if to.rank() == promotion_rank {
        for promo in PROMOTION_PIECES {
            moves.push(CandidateMove::promotes(to, promo));
        }
    } else {
        moves.push(CandidateMove::to(to));
    }
}
