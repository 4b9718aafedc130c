//! Candidate move type and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A candidate destination for one piece, ignoring whether moving there
/// would leave the mover's own king in check (that filtering belongs to the
/// calling layer).
///
/// A pawn reaching its promotion rank yields one candidate per promotion
/// choice, all sharing the destination square. Every other candidate,
/// castling included, carries no promotion tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateMove {
    to: Square,
    promotion: Option<Piece>,
}

impl CandidateMove {
    /// Create a plain candidate for a destination square
    #[inline]
    #[must_use]
    pub const fn to(to: Square) -> Self {
        CandidateMove {
            to,
            promotion: None,
        }
    }

    /// Create a promotion candidate
    #[inline]
    #[must_use]
    pub const fn promotes(to: Square, piece: Piece) -> Self {
        CandidateMove {
            to,
            promotion: Some(piece),
        }
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn dest(self) -> Square {
        self.to
    }

    /// Get the promotion piece, if this is a promotion candidate
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Returns true if this candidate promotes the moving pawn
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Debug for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateMove({self})")
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

// A queen in the open peaks at 27 destinations; a pawn at 12 promotion
// candidates; a castle-eligible king at 10.
pub(crate) const MAX_MOVES: usize = 32;

const EMPTY_MOVE: CandidateMove = CandidateMove::to(Square(0, 0));

/// List of candidate moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [CandidateMove; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: CandidateMove) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CandidateMove] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateMove> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<CandidateMove> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    /// True if any candidate lands on `square`, promotion-tagged or not
    #[must_use]
    pub fn contains_dest(&self, square: Square) -> bool {
        self.iter().any(|m| m.dest() == square)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a CandidateMove;
    type IntoIter = std::slice::Iter<'a, CandidateMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owned iterator over a `MoveList`.
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = CandidateMove;

    fn next(&mut self) -> Option<CandidateMove> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }
}

impl IntoIterator for MoveList {
    type Item = CandidateMove;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}
