//! FEN parsing tests.

use crate::board::{Board, Color, FenError, Piece, Square};

#[test]
fn test_starting_position_roundtrip() {
    let board =
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("valid fen");
    assert_eq!(board, Board::new());
}

#[test]
fn test_placement_only_is_enough() {
    let board = Board::try_from_fen("8/8/8/8/8/8/8/4K3").expect("valid fen");
    assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_squares(Color::White).len(), 1);
    assert!(board.piece_squares(Color::Black).is_empty());
}

#[test]
fn test_castling_field_maps_to_eligibility() {
    let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("valid fen");

    // White: kingside only
    assert!(board.occupant_at(Square(0, 7)).unwrap().can_castle());
    assert!(!board.occupant_at(Square(0, 0)).unwrap().can_castle());
    assert!(board.occupant_at(Square(0, 4)).unwrap().can_castle());
    // Black: queenside only
    assert!(!board.occupant_at(Square(7, 7)).unwrap().can_castle());
    assert!(board.occupant_at(Square(7, 0)).unwrap().can_castle());
    assert!(board.occupant_at(Square(7, 4)).unwrap().can_castle());
}

#[test]
fn test_no_rights_marks_home_pieces_moved() {
    let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("valid fen");

    for sq in [Square(0, 0), Square(0, 4), Square(0, 7)] {
        assert!(!board.occupant_at(sq).unwrap().can_castle());
    }
    for sq in [Square(7, 0), Square(7, 4), Square(7, 7)] {
        assert!(!board.occupant_at(sq).unwrap().can_castle());
    }
}

#[test]
fn test_displaced_rook_marked_moved() {
    // The h-rook sits on g1; whatever the rights say, it has moved
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K1R1 w KQkq - 0 1").expect("valid fen");
    assert!(!board.occupant_at(Square(0, 6)).unwrap().can_castle());
    assert!(board.occupant_at(Square(0, 0)).unwrap().can_castle());
}

#[test]
fn test_parsed_rights_feed_castling() {
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("valid fen");
    let moves = board.candidate_moves(Square(0, 4));
    assert!(moves.contains_dest(Square(0, 6)));
    assert!(moves.contains_dest(Square(0, 2)));

    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1").expect("valid fen");
    let moves = board.candidate_moves(Square(0, 4));
    assert!(!moves.contains_dest(Square(0, 6)));
    assert!(moves.contains_dest(Square(0, 2)));
}

#[test]
fn test_from_str_impl() {
    let board: Board = "8/8/8/8/8/8/8/4K3".parse().expect("valid fen");
    assert_eq!(board.find_king(Color::White), Some(Square(0, 4)));
}

#[test]
fn test_empty_fen_rejected() {
    assert_eq!(Board::try_from_fen("   "), Err(FenError::Empty));
}

#[test]
fn test_invalid_piece_rejected() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/4X3"),
        Err(FenError::InvalidPiece { char: 'X' })
    );
}

#[test]
fn test_invalid_castling_rejected() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/4K3 w x - 0 1"),
        Err(FenError::InvalidCastling { char: 'x' })
    );
}

#[test]
fn test_too_many_ranks_rejected() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/8/8"),
        Err(FenError::InvalidRank { rank: 8 })
    );
}

#[test]
fn test_too_many_files_rejected() {
    assert_eq!(
        Board::try_from_fen("ppppppppp/8/8/8/8/8/8/8"),
        Err(FenError::TooManyFiles { rank: 0, files: 9 })
    );
}
