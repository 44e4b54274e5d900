//! Requests answered from the message alone. Neither touches the shared
//! game; the client says which position it means.

use chess_core::{parse_command, resolve, Position};
use chess_session::ServerMessage;
use minimax_engine::{AiMoveRequest, AiPlayer, DifficultyTable};
use tracing::{info, warn};

const VOICE_HINT: &str =
    "could not understand the command; try something like \"pawn to e4\" or \"knight to f3\"";

/// Pick the computer's move. Runs a search, so call it off the async
/// workers.
pub fn ai_move(table: &DifficultyTable, request: &AiMoveRequest) -> ServerMessage {
    let mut ai = AiPlayer::new(table.clone());
    match ai.respond(request) {
        Ok(response) => {
            info!(
                difficulty = %response.difficulty,
                mv = %response.mv,
                evaluation = response.evaluation,
                "ai move"
            );
            ServerMessage::AiMove(response)
        }
        Err(err) => {
            warn!(fen = %request.fen, difficulty = %request.difficulty, %err, "ai move refused");
            ServerMessage::error(err.to_string())
        }
    }
}

/// Turn a spoken or typed phrase into a legal move in `fen`.
pub fn voice_command(command: &str, fen: &str) -> ServerMessage {
    let rejected = |reason: String| {
        warn!(command, %reason, "voice command rejected");
        ServerMessage::VoiceRejected {
            command: command.to_string(),
            reason,
        }
    };

    let position = match Position::from_fen(fen) {
        Ok(position) => position,
        Err(err) => return rejected(format!("invalid position: {err}")),
    };
    let Some(text) = parse_command(command) else {
        return rejected(VOICE_HINT.to_string());
    };
    match resolve(&position, &text) {
        Ok(mv) => ServerMessage::VoiceMove {
            command: command.to_string(),
            mv: mv.to_string(),
            notation: text.to_string(),
        },
        Err(err) => rejected(err.to_string()),
    }
}

#[cfg(test)]
#[path = "requests_tests.rs"]
mod requests_tests;
