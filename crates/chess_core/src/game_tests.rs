use super::*;
use crate::types::Color;

#[test]
fn e2e4_is_accepted_and_passes_the_turn() {
    let mut game = Game::new();
    game.play_uci("e2e4").unwrap();
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(
        game.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn e2e5_is_rejected_without_touching_the_game() {
    let mut game = Game::new();
    let before = game.fen();
    assert_eq!(game.play_uci("e2e5"), Err(MoveError::Illegal("e2e5".to_string())));
    assert_eq!(game.fen(), before);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.ply_count(), 0);
}

#[test]
fn fools_mate_is_checkmate_for_black() {
    let mut game = Game::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        assert_eq!(game.status(), GameStatus::Ongoing);
        game.play_uci(text).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Checkmate { winner: Color::Black });
    assert_eq!(game.status().describe(), "black wins by checkmate");
}

#[test]
fn undo_steps_back_one_ply_at_a_time() {
    let mut game = Game::new();
    game.play_uci("e2e4").unwrap();
    game.play_uci("e7e5").unwrap();
    assert_eq!(game.undo().unwrap().to_string(), "e7e5");
    assert_eq!(game.undo().unwrap().to_string(), "e2e4");
    assert_eq!(game.fen(), crate::START_FEN);
    assert_eq!(game.undo(), Err(MoveError::NothingToUndo));
}

#[test]
fn threefold_repetition_is_a_draw() {
    let mut game = Game::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    for text in shuffle {
        game.play_uci(text).unwrap();
    }
    assert_eq!(game.repetition_count(), 2);
    assert_eq!(game.status(), GameStatus::Ongoing);

    for text in shuffle {
        game.play_uci(text).unwrap();
    }
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::ThreefoldRepetition));
}

#[test]
fn insufficient_material_and_fifty_moves_are_draws() {
    let bare = Game::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert_eq!(bare.status(), GameStatus::Draw(DrawReason::InsufficientMaterial));

    let slow = Game::from_fen("8/8/8/4k3/8/4K3/8/4R3 w - - 100 80").unwrap();
    assert_eq!(slow.status(), GameStatus::Draw(DrawReason::FiftyMoveRule));
    assert!(slow.status().is_draw());
}

#[test]
fn applied_guard_reverts_on_drop() {
    let mut game = Game::new();
    let before = game.fen();
    let moves = game.legal_moves();
    for mv in moves {
        {
            let mut child = game.apply(mv);
            assert_eq!(child.ply_count(), 1);
            let replies = child.legal_moves();
            if let Some(&reply) = replies.first() {
                let grandchild = child.apply(reply);
                assert_eq!(grandchild.ply_count(), 2);
            }
            assert_eq!(child.ply_count(), 1);
        }
        assert_eq!(game.fen(), before);
        assert_eq!(game.repetition_count(), 1);
    }
}

#[test]
fn reset_returns_to_the_start() {
    let mut game = Game::new();
    game.play_uci("d2d4").unwrap();
    game.reset();
    assert_eq!(game.fen(), crate::START_FEN);
    assert_eq!(game.history().count(), 0);
}
