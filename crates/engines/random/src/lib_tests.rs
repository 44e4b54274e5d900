use std::collections::HashSet;

use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::seeded(7);
    let game = Game::new();

    let result = engine.search(&game, 1);

    let mv = result.best_move.unwrap();
    assert!(game.legal_moves().contains(&mv));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::seeded(7);
    let game =
        Game::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();

    assert!(engine.search(&game, 1).best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::seeded(7);
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(engine.search(&game, 1).best_move.is_none());
}

#[test]
fn same_seed_same_moves() {
    let moves = Game::new().legal_moves();
    let mut a = RandomEngine::seeded(42);
    let mut b = RandomEngine::seeded(42);
    for _ in 0..32 {
        assert_eq!(a.pick(&moves), b.pick(&moves));
    }
}

#[test]
fn every_start_move_eventually_comes_up() {
    let moves = Game::new().legal_moves();
    let mut engine = RandomEngine::seeded(1);
    let seen: HashSet<Move> = (0..2_000).filter_map(|_| engine.pick(&moves)).collect();
    assert_eq!(seen.len(), moves.len());
}

#[test]
fn gamble_respects_the_extremes() {
    let mut engine = RandomEngine::seeded(3);
    for _ in 0..100 {
        assert!(!engine.gamble(0.0));
        assert!(!engine.gamble(-1.0));
        assert!(!engine.gamble(f64::NAN));
        assert!(engine.gamble(1.0));
        assert!(engine.gamble(2.5));
    }
}

#[test]
fn gamble_hits_roughly_the_requested_rate() {
    let mut engine = RandomEngine::seeded(11);
    let hits = (0..10_000).filter(|_| engine.gamble(0.3)).count();
    assert!((2_500..3_500).contains(&hits), "{hits} hits");
}
