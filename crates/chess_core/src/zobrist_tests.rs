use super::*;
use crate::board::Position;
use crate::types::{Color, PieceKind};

#[test]
fn keys_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for color in 0..2 {
        for kind in 0..6 {
            for sq in 0..64 {
                assert!(seen.insert(ZOBRIST.pieces[color][kind][sq]), "duplicate piece key");
            }
        }
    }
    assert!(seen.insert(ZOBRIST.side_to_move));
    for key in ZOBRIST.castling {
        assert!(seen.insert(key), "castling key collision");
    }
    for key in ZOBRIST.en_passant {
        assert!(seen.insert(key), "en passant key collision");
    }
}

#[test]
fn piece_key_depends_on_square_and_colour() {
    let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    assert_ne!(ZOBRIST.piece_key(white_pawn, 8), ZOBRIST.piece_key(white_pawn, 9));
    assert_ne!(ZOBRIST.piece_key(white_pawn, 8), ZOBRIST.piece_key(black_pawn, 8));
}

#[test]
fn knight_shuffle_returns_to_the_same_hash() {
    let mut pos = Position::startpos();
    let start = pos.position_hash();
    for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        let mv = crate::parse_uci_move(&pos, text).unwrap();
        pos.make_move(mv);
    }
    assert_eq!(pos.position_hash(), start);
    assert_ne!(pos.fullmove_number, 1);
}
