//! Serde round-trips for the public types (requires the `serde` feature).

#![cfg(feature = "serde")]

use chess_rules::board::{CandidateMove, Color, Occupant, Piece, Square};

#[test]
fn square_roundtrip() {
    let sq = Square(4, 2);
    let json = serde_json::to_string(&sq).expect("serialize");
    let back: Square = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(sq, back);
}

#[test]
fn occupant_roundtrip() {
    let occ = Occupant::new(Color::Black, Piece::Rook);
    let json = serde_json::to_string(&occ).expect("serialize");
    let back: Occupant = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(occ, back);
    assert!(back.can_castle());
}

#[test]
fn candidate_move_roundtrip() {
    let mv = CandidateMove::promotes(Square(7, 3), Piece::Knight);
    let json = serde_json::to_string(&mv).expect("serialize");
    let back: CandidateMove = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(mv, back);
    assert_eq!(back.promotion(), Some(Piece::Knight));
}
