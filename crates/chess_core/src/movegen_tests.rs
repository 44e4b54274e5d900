use super::*;

fn sq_of(name: &str) -> u8 {
    coord_to_sq(name).unwrap()
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn moves_from_a_single_square() {
    let pos = Position::startpos();
    let knight: Vec<String> = legal_moves_from(&pos, sq_of("g1"))
        .into_iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(knight.len(), 2);
    assert!(knight.contains(&"g1f3".to_string()));
    assert!(knight.contains(&"g1h3".to_string()));

    // Empty square and opponent's piece both yield nothing.
    assert!(legal_moves_from(&pos, sq_of("e4")).is_empty());
    assert!(legal_moves_from(&pos, sq_of("e7")).is_empty());
}

#[test]
fn promotions_list_queen_first() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let promos: Vec<Option<PieceKind>> = legal_moves_from(&pos, sq_of("a7"))
        .into_iter()
        .map(|m| m.promo)
        .collect();
    assert_eq!(
        promos,
        vec![
            Some(PieceKind::Queen),
            Some(PieceKind::Rook),
            Some(PieceKind::Bishop),
            Some(PieceKind::Knight)
        ]
    );
}

#[test]
fn castling_through_an_attacked_square_is_illegal() {
    // Black rook on f8 covers f1.
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let castles: Vec<String> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.is_castle)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(castles, vec!["e1c1".to_string()]);
}

#[test]
fn castling_needs_our_own_rook_on_the_corner() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().any(|m| m.is_castle));

    // Keep the right but put an enemy knight where the rook stood.
    pos.set_piece(sq_of("h1"), Some(Piece::new(Color::Black, PieceKind::Knight)));
    assert!(pos.castling.wk);
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle));
}

#[test]
fn en_passant_capture_is_generated_and_flagged() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep: Vec<Move> = legal_moves(&pos).into_iter().filter(|m| m.is_en_passant).collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to_string(), "e5d6");
}

#[test]
fn pinned_piece_cannot_leave_the_pin_line() {
    // White knight on e2 is pinned against the king by the rook on e8.
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(legal_moves_from(&pos, sq_of("e2")).is_empty());
}
