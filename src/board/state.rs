use std::fmt;

use super::{Color, Occupant, Piece, Square};

/// An 8x8 chess board snapshot.
///
/// Cells are indexed `[rank][file]`, rank 0 being White's back rank. The
/// rule-engine entry points ([`candidate_moves`](Board::candidate_moves),
/// [`checked_king`](Board::checked_king), [`is_available`](Board::is_available))
/// all take `&self`: the engine reads a snapshot, never writes one. The
/// mutating methods below exist for the move-execution collaborator that
/// owns the board between queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Option<Occupant>; 8]; 8],
}

impl Board {
    /// Create a board with the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Get the occupant of a square, if any
    #[inline]
    #[must_use]
    pub fn occupant_at(&self, square: Square) -> Option<&Occupant> {
        self.cells[square.rank()][square.file()].as_ref()
    }

    /// Get the color and kind of the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.occupant_at(square).map(|occ| (occ.color(), occ.piece()))
    }

    /// Returns true if the square holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.rank()][square.file()].is_none()
    }

    /// Landing-square test: true iff `(rank, file)` is on-board and either
    /// empty or held by an opponent of `side`.
    ///
    /// Coordinates are signed so ray walks and offset sums can probe past
    /// the edge; out-of-range input yields false, never an error.
    #[must_use]
    pub fn is_available(&self, rank: isize, file: isize, side: Color) -> bool {
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            return false;
        }
        match self.occupant_at(Square(rank as usize, file as usize)) {
            None => true,
            Some(occ) => occ.color() != side,
        }
    }

    /// Place a freshly constructed piece (castle-eligible for rooks/kings),
    /// replacing whatever stood on the square.
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.cells[square.rank()][square.file()] = Some(Occupant::new(color, piece));
    }

    /// Place an occupant as-is, preserving its castle-eligibility state.
    pub fn place(&mut self, square: Square, occupant: Occupant) {
        self.cells[square.rank()][square.file()] = Some(occupant);
    }

    /// Remove and return the occupant of a square.
    pub fn remove_piece(&mut self, square: Square) -> Option<Occupant> {
        self.cells[square.rank()][square.file()].take()
    }

    /// Clear the castle eligibility of the piece on `square`.
    ///
    /// Contract for the move-execution layer: call this the first time a
    /// rook or king moves (or castles). The rule engine itself never clears
    /// the flag. No-op on an empty square or a kind the flag is
    /// meaningless for.
    pub fn mark_moved(&mut self, square: Square) {
        if let Some(occ) = self.cells[square.rank()][square.file()].as_mut() {
            occ.set_moved();
        }
    }

    /// Squares holding pieces of `color`, scanning rank 0 upward.
    #[must_use]
    pub fn piece_squares(&self, color: Color) -> Vec<Square> {
        let mut squares = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.occupant_at(sq).is_some_and(|occ| occ.color() == color) {
                    squares.push(sq);
                }
            }
        }
        squares
    }

    /// Find the king of `color`, if present on the board.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Sum of signed point values over all pieces (White positive), for an
    /// external evaluation layer.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        let mut total = 0;
        for rank in &self.cells {
            for cell in rank.iter().flatten() {
                total += cell.signed_value();
            }
        }
        total
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.cells[rank][file] {
                    Some(occ) => occ.to_fen_char(),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f, "\n  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
