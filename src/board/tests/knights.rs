//! Knight move generation tests.

use super::{dests, kings_only};
use crate::board::{Color, Piece, Square};

#[test]
fn test_center_knight_has_eight_moves() {
    let mut board = kings_only();
    board.set_piece(Square(4, 4), Color::White, Piece::Knight);

    let moves = board.candidate_moves(Square(4, 4));
    assert_eq!(
        dests(&moves),
        vec![
            Square(2, 3),
            Square(2, 5),
            Square(3, 2),
            Square(3, 6),
            Square(5, 2),
            Square(5, 6),
            Square(6, 3),
            Square(6, 5),
        ]
    );
}

#[test]
fn test_corner_knight_has_two_moves() {
    let mut board = kings_only();
    board.set_piece(Square(7, 0), Color::White, Piece::Knight);

    let moves = board.candidate_moves(Square(7, 0));
    assert_eq!(dests(&moves), vec![Square(5, 1), Square(6, 2)]);
}

#[test]
fn test_knight_jumps_over_blockers() {
    let mut board = kings_only();
    board.set_piece(Square(4, 4), Color::White, Piece::Knight);
    // Box the knight in completely
    for dr in -1..=1isize {
        for df in -1..=1isize {
            if dr != 0 || df != 0 {
                let sq = Square((4 + dr) as usize, (4 + df) as usize);
                board.set_piece(sq, Color::White, Piece::Pawn);
            }
        }
    }

    let moves = board.candidate_moves(Square(4, 4));
    assert_eq!(moves.len(), 8, "adjacent pieces never block a knight");
}

#[test]
fn test_knight_landing_squares_filtered_by_color() {
    let mut board = kings_only();
    board.set_piece(Square(4, 4), Color::White, Piece::Knight);
    board.set_piece(Square(6, 5), Color::White, Piece::Pawn);
    board.set_piece(Square(6, 3), Color::Black, Piece::Pawn);

    let moves = board.candidate_moves(Square(4, 4));
    assert!(!moves.contains_dest(Square(6, 5)), "own piece excluded");
    assert!(moves.contains_dest(Square(6, 3)), "opponent capturable");
    assert_eq!(moves.len(), 7);
}
