use super::*;

fn offline(mode: Mode, difficulty: Difficulty) -> OfflineGame {
    OfflineGame::with_ai(AiPlayer::seeded(DifficultyTable::offline(), 17), mode, difficulty)
}

fn lines(reply: Reply) -> Vec<String> {
    match reply {
        Reply::Say(lines) => lines,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn computer_answers_in_ai_mode() {
    let mut app = offline(Mode::Ai, Difficulty::Expert);
    let out = lines(app.handle("e2e4"));

    assert_eq!(out[0], "You played e2e4");
    assert!(out[1].starts_with("Computer played "), "{out:?}");
    assert_eq!(app.game().ply_count(), 2);
    assert_eq!(app.game().side_to_move(), Color::White);
}

#[test]
fn undo_in_ai_mode_takes_back_the_reply_too() {
    let mut app = offline(Mode::Ai, Difficulty::Easy);
    app.handle("d2d4");
    app.handle("undo");
    assert_eq!(app.game().ply_count(), 0);
    assert_eq!(lines(app.handle("undo")), vec!["No move to take back.".to_string()]);
}

#[test]
fn local_mode_alternates_humans() {
    let mut app = offline(Mode::Local, Difficulty::Medium);
    assert_eq!(lines(app.handle("e2e4"))[0], "White played e2e4");
    assert_eq!(lines(app.handle("pawn to e5"))[0], "Black played e7e5");
    assert_eq!(lines(app.handle("knight to f3"))[0], "White played g1f3");

    app.handle("undo");
    assert_eq!(app.game().ply_count(), 2);
}

#[test]
fn bad_input_leaves_the_game_alone() {
    let mut app = offline(Mode::Local, Difficulty::Medium);
    assert_eq!(lines(app.handle("e2e5")), vec!["Illegal move e2e5.".to_string()]);
    assert!(lines(app.handle("how about no"))[0].starts_with("could not understand"));
    assert!(lines(app.handle("bishop to c4"))[0].starts_with("Illegal move"));
    assert_eq!(app.game().ply_count(), 0);
}

#[test]
fn checkmate_is_reported_and_ends_play() {
    let mut app = offline(Mode::Local, Difficulty::Medium);
    for text in ["f2f3", "e7e5", "g2g4"] {
        app.handle(text);
    }
    let out = lines(app.handle("queen to h4"));
    assert_eq!(out.last().unwrap(), "Game over: black wins by checkmate.");

    let after = lines(app.handle("a2a3"));
    assert!(after[0].starts_with("The game is over"));

    app.handle("new");
    assert_eq!(app.game().ply_count(), 0);
}

#[test]
fn switching_to_ai_on_its_turn_makes_it_move() {
    let mut app = offline(Mode::Local, Difficulty::Hard);
    app.handle("e2e4");
    let out = lines(app.handle("mode ai"));
    assert_eq!(out[0], "Mode: ai");
    assert!(out[1].starts_with("Computer played"));
    assert_eq!(app.mode(), Mode::Ai);
    assert_eq!(app.game().side_to_move(), Color::White);
}

#[test]
fn settings_commands() {
    let mut app = offline(Mode::Ai, Difficulty::Medium);
    assert_eq!(lines(app.handle("difficulty HARD")), vec!["Difficulty: hard".to_string()]);
    assert_eq!(app.difficulty(), Difficulty::Hard);
    assert!(lines(app.handle("difficulty nightmare"))[0].contains("unknown difficulty"));
    assert!(lines(app.handle("mode online"))[0].contains("unknown mode"));
    assert_eq!(app.mode(), Mode::Ai);
}

#[test]
fn information_commands() {
    let mut app = offline(Mode::Local, Difficulty::Medium);
    assert_eq!(lines(app.handle("fen")), vec![chess_core::START_FEN.to_string()]);
    assert_eq!(lines(app.handle("moves g1")), vec!["g1h3 g1f3".to_string()]);
    assert_eq!(lines(app.handle("moves e4")), vec!["No legal moves.".to_string()]);
    assert!(lines(app.handle("moves z9"))[0].contains("not a square"));
    assert_eq!(lines(app.handle("moves"))[0].split(' ').count(), 20);
    assert!(lines(app.handle("board"))[0].ends_with("a b c d e f g h"));
    assert!(lines(app.handle("help"))[0].starts_with("Commands:"));
    assert_eq!(lines(app.handle("   ")), Vec::<String>::new());
    assert_eq!(app.handle("quit"), Reply::Quit);
}

#[test]
fn mode_parsing() {
    assert_eq!("AI".parse::<Mode>(), Ok(Mode::Ai));
    assert_eq!(" local ".parse::<Mode>(), Ok(Mode::Local));
    assert!("online".parse::<Mode>().is_err());
}
