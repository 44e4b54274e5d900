//! Messages exchanged with clients. One JSON object per message with a
//! `type` tag, field names in camelCase.

use minimax_engine::{AiMoveRequest, AiMoveResponse};
use serde::{Deserialize, Serialize};

use crate::seat::Seat;

/// A move as the client sends it: two squares plus an optional promotion
/// letter (`q`, `r`, `b`, `n`). Queen is assumed when a pawn reaches the
/// last rank without one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<char>,
}

impl MoveRequest {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Move(MoveRequest),
    AiMove(AiMoveRequest),
    #[serde(rename_all = "camelCase")]
    VoiceCommand { command: String, fen: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    PlayerRole {
        seat: Seat,
    },
    SpectatorRole,
    /// A move accepted by the session, as played.
    #[serde(rename_all = "camelCase")]
    Move {
        seat: Seat,
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<char>,
    },
    BoardState {
        fen: String,
    },
    /// Sent only to the connection whose move was refused.
    #[serde(rename_all = "camelCase")]
    InvalidMove {
        from: String,
        to: String,
        reason: String,
    },
    #[serde(rename_all = "camelCase")]
    GameOver {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        winner: Option<Seat>,
        reason: String,
    },
    AiMove(AiMoveResponse),
    #[serde(rename_all = "camelCase")]
    VoiceMove {
        command: String,
        #[serde(rename = "move")]
        mv: String,
        notation: String,
    },
    #[serde(rename_all = "camelCase")]
    VoiceRejected {
        command: String,
        reason: String,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
