//! A game in progress: the current position plus everything needed to take
//! moves back and to detect repetition.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::board::{Position, Undo};
use crate::error::MoveError;
use crate::movegen::{legal_moves, legal_moves_into};
use crate::notation::parse_uci_move;
use crate::types::{Color, Move};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    ThreefoldRepetition,
    InsufficientMaterial,
    FiftyMoveRule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// Stalemate or any other draw.
    pub fn is_draw(self) -> bool {
        matches!(self, GameStatus::Stalemate | GameStatus::Draw(_))
    }

    pub fn describe(self) -> String {
        match self {
            GameStatus::Ongoing => "game in progress".to_string(),
            GameStatus::Checkmate { winner } => format!("{winner} wins by checkmate"),
            GameStatus::Stalemate => "draw by stalemate".to_string(),
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => "draw by repetition".to_string(),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                "draw by insufficient material".to_string()
            }
            GameStatus::Draw(DrawReason::FiftyMoveRule) => "draw by 50-move rule".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
struct Ply {
    mv: Move,
    undo: Undo,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    plies: Vec<Ply>,
    /// Hash of every position since the start, current one last.
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        let keys = vec![position.position_hash()];
        Self {
            position,
            plies: Vec::new(),
            keys,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, crate::FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Moves played since the game (or the loaded position) started.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.plies.iter().map(|p| p.mv)
    }

    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Same as [`Game::legal_moves`] but reuses `out`.
    pub fn legal_moves_into(&mut self, out: &mut Vec<Move>) {
        legal_moves_into(&mut self.position, out);
    }

    /// Back to the standard starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Validate and play a move. The game is unchanged on error.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        let undo = self.position.try_make_move(mv)?;
        self.record(mv, undo);
        Ok(())
    }

    /// Parse coordinate notation and play it.
    pub fn play_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        let mv = parse_uci_move(&self.position, text)?;
        self.play(mv)?;
        Ok(mv)
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        self.pop().ok_or(MoveError::NothingToUndo)
    }

    /// Apply a generator move and get a guard that takes it back when
    /// dropped. The move is not validated; it must come from this game's
    /// legal move list.
    pub fn apply(&mut self, mv: Move) -> Applied<'_> {
        let undo = self.position.make_move(mv);
        self.record(mv, undo);
        Applied { game: self }
    }

    fn record(&mut self, mv: Move, undo: Undo) {
        self.plies.push(Ply { mv, undo });
        self.keys.push(self.position.position_hash());
    }

    fn pop(&mut self) -> Option<Move> {
        let ply = self.plies.pop()?;
        self.keys.pop();
        self.position.unmake_move(ply.mv, ply.undo);
        Some(ply.mv)
    }

    /// How many times the current position has occurred, itself included.
    pub fn repetition_count(&self) -> usize {
        match self.keys.last() {
            Some(&current) => self.keys.iter().filter(|&&k| k == current).count(),
            None => 0,
        }
    }

    /// A draw that does not depend on the legal-move list.
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.position.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.position.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.repetition_count() >= 3 {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        let mut pos = self.position.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut pos, &mut moves);
        self.status_with_moves(&moves)
    }

    /// Status when the caller already generated the legal moves.
    pub fn status_with_moves(&self, moves: &[Move]) -> GameStatus {
        let stm = self.position.side_to_move;
        if moves.is_empty() {
            if self.position.in_check(stm) {
                return GameStatus::Checkmate { winner: stm.other() };
            }
            return GameStatus::Stalemate;
        }
        match self.draw_reason() {
            Some(reason) => GameStatus::Draw(reason),
            None => GameStatus::Ongoing,
        }
    }
}

/// A move applied to a [`Game`] for the lifetime of the guard. Dropping
/// it takes the move back, so a search can never leak a hypothetical move
/// into a sibling branch, even while unwinding.
pub struct Applied<'a> {
    game: &'a mut Game,
}

impl Deref for Applied<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for Applied<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for Applied<'_> {
    fn drop(&mut self) {
        if self.game.pop().is_none() {
            debug!("applied-move guard dropped with an empty ply stack");
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
