use super::*;

fn eval_fen(fen: &str) -> i32 {
    evaluate_position(&Position::from_fen(fen).unwrap())
}

#[test]
fn start_position_is_balanced() {
    assert_eq!(evaluate(&Game::new()), 0);
}

#[test]
fn centre_distance_is_integral() {
    let d = |name: &str| centre_distance(chess_core::coord_to_sq(name).unwrap());
    assert_eq!(d("d4"), 1);
    assert_eq!(d("e5"), 1);
    assert_eq!(d("c3"), 3);
    assert_eq!(d("a1"), 7);
    assert_eq!(d("h8"), 7);
}

#[test]
fn piece_placement_bonuses() {
    // Lone kings cancel, each extra piece shows up with its bonus.
    let base = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
    assert_eq!(material(&Position::from_fen(base).unwrap()), 0);

    // Knight on d4: 30 + (5 - 1)
    assert_eq!(material(&Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap()), 34);
    // Knight on a1: 30 + (5 - 7)
    assert_eq!(material(&Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap()), 28);
    // Queen: 90 + 2 anywhere
    assert_eq!(material(&Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap()), 92);
    // Rook: no bonus
    assert_eq!(material(&Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap()), 50);
    // White pawn on e2 (one rank advanced) against black pawn on e7
    assert_eq!(material(&Position::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1").unwrap()), 0);
    // White pawn on e6 (five ranks advanced)
    assert_eq!(material(&Position::from_fen("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1").unwrap()), 15);
}

#[test]
fn black_material_is_negative() {
    assert_eq!(eval_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1"), -92);
}

#[test]
fn colour_mirror_negates_the_score() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(
            evaluate_position(&pos),
            -evaluate_position(&pos.mirrored()),
            "{fen}"
        );
    }
}

#[test]
fn fools_mate_scores_minus_mate() {
    let mut game = Game::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.play_uci(text).unwrap();
    }
    assert_eq!(evaluate(&game), -MATE_SCORE);
}

#[test]
fn mate_against_black_scores_plus_mate() {
    assert_eq!(
        eval_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4"),
        MATE_SCORE
    );
}

#[test]
fn every_kind_of_draw_scores_zero() {
    // Stalemate with White a queen up
    assert_eq!(eval_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"), 0);
    // Fifty-move rule with White a rook up
    assert_eq!(eval_fen("8/8/8/4k3/8/4K3/8/4R3 w - - 100 80"), 0);
    // Insufficient material with a bishop
    assert_eq!(eval_fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1"), 0);

    // Repetition only shows with history.
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    for _ in 0..2 {
        for text in ["a1a2", "e8d8", "a2a1", "d8e8"] {
            game.play_uci(text).unwrap();
        }
    }
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(evaluate(&game), 0);
    assert_eq!(evaluate_position(game.position()), 50);
}

#[test]
fn material_never_outscores_a_mate() {
    // Nine queens, two rooks and four minors against a thin black camp.
    let fen = "kn6/pp6/8/8/8/QQQQQQQQ/RRBBNN2/Q3K3 w - - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert!(material(&pos) > MATE_SCORE);
    assert_eq!(evaluate_position(&pos), MAX_STATIC_SCORE);
    assert_eq!(evaluate_position(&pos.mirrored()), -MAX_STATIC_SCORE);
}
