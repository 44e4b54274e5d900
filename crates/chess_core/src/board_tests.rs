use super::*;
use crate::movegen::legal_moves;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn startpos_serializes_to_standard_fen() {
    assert_eq!(Position::startpos().to_fen(), START_FEN);
    assert_eq!(Position::from_fen(START_FEN).unwrap(), Position::startpos());
}

#[test]
fn fen_round_trips_for_positions_reached_by_play() {
    let mut pos = Position::startpos();
    // A few plies including a double push (en-passant square) and castling rights changes.
    for text in ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6", "g1f3", "c6b5", "e1g1"] {
        let mv = crate::parse_uci_move(&pos, text).unwrap();
        pos.make_move(mv);
        let fen = pos.to_fen();
        assert_eq!(Position::from_fen(&fen).unwrap(), pos, "round trip failed for {fen}");
    }
    assert_eq!(pos.side_to_move, Color::Black);
    assert!(!pos.castling.wk && !pos.castling.wq);
}

#[test]
fn clock_fields_are_optional() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - -").unwrap();
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
}

#[test]
fn malformed_fen_is_rejected_with_a_reason() {
    assert_eq!(Position::from_fen("").unwrap_err(), FenError::FieldCount(0));
    assert_eq!(
        Position::from_fen("8/8/8/8 w - -").unwrap_err(),
        FenError::RankCount(4)
    );
    assert_eq!(
        Position::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap_err(),
        FenError::InvalidPiece('x')
    );
    assert_eq!(
        Position::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap_err(),
        FenError::RankLength { rank: 7 }
    );
    assert_eq!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").unwrap_err(),
        FenError::SideToMove("x".to_string())
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err(),
        FenError::KingCount(Color::Black)
    );
    assert!(matches!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e5 0 1"),
        Err(FenError::EnPassant(_))
    ));
    assert!(matches!(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1".parse::<Position>(),
        Err(FenError::Counter(_))
    ));
}

#[test]
fn inconsistent_positions_are_rejected() {
    // Target on White's own side with White to move.
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1").unwrap_err(),
        FenError::EnPassant("e3".to_string())
    );
    // Right rank, but no black pawn went past it.
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - e6 0 1").unwrap_err(),
        FenError::EnPassant("e6".to_string())
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/4p3/8/8/8/4K3 b - e6 0 1").unwrap_err(),
        FenError::EnPassant("e6".to_string())
    );
    assert_eq!(
        Position::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err(),
        FenError::PawnOnBackRank("a8".to_string())
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K2p b - - 0 1").unwrap_err(),
        FenError::PawnOnBackRank("h1".to_string())
    );
    // Black is in check with White to move.
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/4R3/Q3K3 w - - 0 1").unwrap_err(),
        FenError::OpponentInCheck(Color::Black)
    );

    // A real en-passant target on either side is kept.
    let white_to_move = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert_eq!(white_to_move.en_passant, coord_to_sq("d6"));
    let black_to_move = Position::from_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").unwrap();
    assert_eq!(black_to_move.en_passant, coord_to_sq("d3"));
}

#[test]
fn castling_rights_without_king_and_rook_at_home_are_dropped() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2n w K - 0 1").unwrap();
    assert_eq!(pos.castling, CastlingRights::NONE);
    assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/4K2n w - - 0 1");
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle));

    // Only the a1 rook is missing; the other three rights stay.
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1").unwrap();
    assert_eq!(
        pos.castling,
        CastlingRights { wk: true, wq: false, bk: true, bq: true }
    );

    // A king away from e8 loses both black rights.
    let pos = Position::from_fen("r2k3r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(pos.to_fen(), "r2k3r/8/8/8/8/8/8/R3K2R w KQ - 0 1");
}

#[test]
fn make_unmake_restores_every_legal_move() {
    for fen in [
        START_FEN,
        KIWIPETE,
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        // White to move with an en-passant capture and a promotion available.
        "4k3/1P6/8/3pP3/8/8/8/4K3 w - d6 0 1",
    ] {
        let mut pos = Position::from_fen(fen).unwrap();
        let before = pos.clone();
        for mv in legal_moves(&before) {
            let undo = pos.make_move(mv);
            pos.unmake_move(mv, undo);
            assert_eq!(pos.to_fen(), before.to_fen(), "{mv} did not unmake in {fen}");
            assert_eq!(pos, before);
        }
    }
}

#[test]
fn try_make_move_rejects_moves_from_another_position() {
    let mut pos = Position::startpos();
    let stale = crate::parse_uci_move(&pos, "e2e4").unwrap();
    pos.make_move(stale);

    let before = pos.clone();
    assert!(matches!(pos.try_make_move(stale), Err(MoveError::Illegal(_))));
    assert_eq!(pos, before);
}

#[test]
fn try_make_move_rejects_forged_flags() {
    let mut pos = Position::startpos();
    let mut forged = Move::new(coord_to_sq("e2").unwrap(), coord_to_sq("e4").unwrap());
    forged.is_castle = true;
    assert!(pos.try_make_move(forged).is_err());
    assert_eq!(pos, Position::startpos());
}

#[test]
fn mirrored_is_an_involution() {
    let pos = Position::from_fen(KIWIPETE).unwrap();
    let mirror = pos.mirrored();
    assert_eq!(mirror.side_to_move, Color::Black);
    assert_eq!(mirror.piece_at(60), Some(Piece::new(Color::Black, PieceKind::King)));
    assert_eq!(mirror.mirrored(), pos);
    assert_eq!(Position::startpos().mirrored().board, Position::startpos().board);
}

#[test]
fn checkmate_and_stalemate_queries() {
    let mate = Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
        .unwrap();
    assert!(mate.is_checkmate());
    assert!(!mate.is_stalemate());

    let stale = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stale.is_stalemate());
    assert!(!stale.is_checkmate());
}
