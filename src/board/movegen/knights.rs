use super::super::{Board, CandidateMove, Color, MoveList, Square};

/// The eight knight offsets; knights jump, so no blocking applies
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let r = from.rank() as isize;
        let f = from.file() as isize;

        for (dr, df) in KNIGHT_OFFSETS {
            if self.is_available(r + dr, f + df, color) {
                moves.push(CandidateMove::to(Square((r + dr) as usize, (f + df) as usize)));
            }
        }
        moves
    }
}
