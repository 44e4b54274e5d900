//! The arbitrator for one shared game: who sits where, whose turn it is,
//! and which messages a move produces.

use std::collections::BTreeSet;

use chess_core::{parse_uci_move, Game, GameStatus, Move, MoveError, PieceKind};
use tracing::{debug, info, warn};

use crate::protocol::{MoveRequest, ServerMessage};
use crate::seat::{ConnectionId, Role, Seat, SeatState};

/// Who a message is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    All,
    Only(ConnectionId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outbound {
    pub target: Target,
    pub message: ServerMessage,
}

impl Outbound {
    pub fn all(message: ServerMessage) -> Self {
        Self {
            target: Target::All,
            message,
        }
    }

    pub fn only(id: ConnectionId, message: ServerMessage) -> Self {
        Self {
            target: Target::Only(id),
            message,
        }
    }
}

/// One game shared by every connection. The game is never reset; a new
/// game needs a new session.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    white: Option<ConnectionId>,
    black: Option<ConnectionId>,
    connections: BTreeSet<ConnectionId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session continuing from an existing game.
    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Bind a new connection: White first, then Black, then spectators.
    /// A connection that is already known keeps its role.
    pub fn connect(&mut self, id: ConnectionId) -> Role {
        if !self.connections.insert(id) {
            return self.role_of(id).unwrap_or(Role::Spectator);
        }
        let role = if self.white.is_none() {
            self.white = Some(id);
            Role::Player(Seat::White)
        } else if self.black.is_none() {
            self.black = Some(id);
            Role::Player(Seat::Black)
        } else {
            Role::Spectator
        };
        debug!(%id, ?role, seats = ?self.seat_state(), "connection bound");
        role
    }

    /// Forget a connection, vacating its seat if it held one.
    pub fn disconnect(&mut self, id: ConnectionId) -> Option<Seat> {
        if !self.connections.remove(&id) {
            return None;
        }
        let vacated = if self.white == Some(id) {
            self.white = None;
            Some(Seat::White)
        } else if self.black == Some(id) {
            self.black = None;
            Some(Seat::Black)
        } else {
            None
        };
        if let Some(seat) = vacated {
            debug!(%id, %seat, seats = ?self.seat_state(), "seat vacated");
        }
        vacated
    }

    pub fn role_of(&self, id: ConnectionId) -> Option<Role> {
        if self.white == Some(id) {
            Some(Role::Player(Seat::White))
        } else if self.black == Some(id) {
            Some(Role::Player(Seat::Black))
        } else if self.connections.contains(&id) {
            Some(Role::Spectator)
        } else {
            None
        }
    }

    pub fn holder(&self, seat: Seat) -> Option<ConnectionId> {
        match seat {
            Seat::White => self.white,
            Seat::Black => self.black,
        }
    }

    pub fn seat_state(&self) -> SeatState {
        match (self.white.is_some(), self.black.is_some()) {
            (false, false) => SeatState::Empty,
            (true, true) => SeatState::TwoBound,
            _ => SeatState::OneBound,
        }
    }

    pub fn connections(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        self.connections.iter().copied()
    }

    /// Arbitrate a move from `id`.
    ///
    /// Moves out of turn, or from connections without the seat to move,
    /// produce nothing. Refused moves produce an `invalidMove` for the
    /// sender alone and leave the game as it was. Accepted moves are
    /// broadcast followed by the new board, and by `gameOver` when the
    /// move ended the game.
    pub fn submit_move(&mut self, id: ConnectionId, request: &MoveRequest) -> Vec<Outbound> {
        let seat = Seat::from(self.game.side_to_move());
        if self.holder(seat) != Some(id) {
            debug!(%id, to_move = %seat, "move out of turn ignored");
            return Vec::new();
        }

        let status = self.game.status();
        if status.is_over() {
            return vec![self.refuse(id, request, status.describe())];
        }

        let mv = match self.resolve(request) {
            Ok(mv) => mv,
            Err(err) => return vec![self.refuse(id, request, err.to_string())],
        };
        if let Err(err) = self.game.play(mv) {
            return vec![self.refuse(id, request, err.to_string())];
        }
        info!(%id, %seat, %mv, fen = %self.game.fen(), "move accepted");

        let mut out = vec![
            Outbound::all(ServerMessage::Move {
                seat,
                from: request.from.to_ascii_lowercase(),
                to: request.to.to_ascii_lowercase(),
                promotion: mv.promo.map(PieceKind::to_char),
            }),
            Outbound::all(ServerMessage::BoardState {
                fen: self.game.fen(),
            }),
        ];
        let status = self.game.status();
        if status.is_over() {
            info!(result = %status.describe(), "game over");
            out.push(Outbound::all(game_over(status)));
        }
        out
    }

    fn resolve(&self, request: &MoveRequest) -> Result<Move, MoveError> {
        let mut text = format!("{}{}", request.from, request.to);
        if let Some(c) = request.promotion {
            text.push(c);
        }
        if request.from.len() != 2 || request.to.len() != 2 {
            return Err(MoveError::Unparseable(text));
        }
        parse_uci_move(self.game.position(), &text)
    }

    fn refuse(&self, id: ConnectionId, request: &MoveRequest, reason: String) -> Outbound {
        warn!(%id, from = %request.from, to = %request.to, %reason, "move refused");
        Outbound::only(
            id,
            ServerMessage::InvalidMove {
                from: request.from.clone(),
                to: request.to.clone(),
                reason,
            },
        )
    }
}

fn game_over(status: GameStatus) -> ServerMessage {
    let winner = match status {
        GameStatus::Checkmate { winner } => Some(Seat::from(winner)),
        _ => None,
    };
    ServerMessage::GameOver {
        winner,
        reason: status.describe(),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
