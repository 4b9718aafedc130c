//! Check detection.
//!
//! A side is in check when its king's square shows up among the candidate
//! moves of some opposing non-king piece. The opposing king is always
//! skipped: castling legality asks "am I in check?", so letting one king's
//! generator probe the other king's moves would recurse forever. A king
//! adjacent to the enemy king is an illegal position the calling layer never
//! produces, so the exclusion loses nothing.

use super::super::{Board, Color, Piece, Square};

impl Board {
    /// Return the king square of `side` if some opposing piece attacks it.
    ///
    /// Scans the board once for the opposing side's pieces; use
    /// [`checked_king_among`](Board::checked_king_among) to supply a
    /// precomputed list instead. Querying a side with no king on the board
    /// is a caller bug; the release build returns `None`.
    #[must_use]
    pub fn checked_king(&self, side: Color) -> Option<Square> {
        let attackers = self.piece_squares(side.opponent());
        self.checked_king_among(side, &attackers)
    }

    /// [`checked_king`](Board::checked_king) with a caller-supplied list of
    /// the opposing side's piece squares, for callers that already track
    /// piece locations.
    #[must_use]
    pub fn checked_king_among(&self, side: Color, attackers: &[Square]) -> Option<Square> {
        let king = self.find_king(side);
        debug_assert!(king.is_some(), "checked_king: no {side} king on the board");
        let king = king?;

        for &from in attackers {
            let Some(occ) = self.occupant_at(from) else {
                debug_assert!(false, "checked_king: attacker list names empty square {from}");
                continue;
            };
            debug_assert!(
                occ.color() == side.opponent(),
                "checked_king: attacker list names {} piece on {from}",
                occ.color()
            );
            // Kings never probe each other; see module docs.
            if occ.piece() == Piece::King {
                continue;
            }
            if self.candidate_moves(from).contains_dest(king) {
                #[cfg(feature = "logging")]
                log::trace!("{side} king on {king} is attacked from {from}");
                return Some(king);
            }
        }
        None
    }

    /// Returns true if `side`'s king is currently attacked.
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, side: Color) -> bool {
        self.checked_king(side).is_some()
    }
}
