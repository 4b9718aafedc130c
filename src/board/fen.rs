//! FEN position parsing.
//!
//! Only the fields this engine models are used: the piece-placement field
//! populates the board, and the castling-rights field (when present) is
//! mapped onto per-piece castle eligibility. Side-to-move, en passant, and
//! the clocks are accepted but ignored; this crate tracks none of them.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// A bare placement field is enough (`"8/8/8/8/8/8/8/4K3"`); a full FEN
    /// string also works. When a castling-rights field is supplied, rooks
    /// and kings it grants no right to are marked as moved, as is any rook
    /// or king standing away from its home square. Without the field, every
    /// piece keeps its construction default (eligible).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() {
            return Err(FenError::Empty);
        }

        // Parse piece placement
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        // Parse castling rights into per-piece eligibility
        if let Some(castling) = parts.get(2) {
            let mut white_k = false;
            let mut white_q = false;
            let mut black_k = false;
            let mut black_q = false;
            for c in castling.chars() {
                match c {
                    'K' => white_k = true,
                    'Q' => white_q = true,
                    'k' => black_k = true,
                    'q' => black_q = true,
                    '-' => {}
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
            board.apply_castling_rights(Color::White, white_k, white_q);
            board.apply_castling_rights(Color::Black, black_k, black_q);
        }

        Ok(board)
    }

    fn apply_castling_rights(&mut self, color: Color, kingside: bool, queenside: bool) {
        let home = color.back_rank();
        if !kingside {
            self.mark_moved_if(Square(home, 7), color, Piece::Rook);
        }
        if !queenside {
            self.mark_moved_if(Square(home, 0), color, Piece::Rook);
        }
        if !kingside && !queenside {
            self.mark_moved_if(Square(home, 4), color, Piece::King);
        }

        // Displaced rooks and kings have necessarily moved
        for from in self.piece_squares(color) {
            match self.piece_at(from) {
                Some((_, Piece::King)) if from != Square(home, 4) => self.mark_moved(from),
                Some((_, Piece::Rook))
                    if from != Square(home, 0) && from != Square(home, 7) =>
                {
                    self.mark_moved(from)
                }
                _ => {}
            }
        }
    }

    fn mark_moved_if(&mut self, square: Square, color: Color, piece: Piece) {
        if self.piece_at(square) == Some((color, piece)) {
            self.mark_moved(square);
        }
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
