//! The computer opponent: a difficulty policy on top of the search and
//! the random picker, plus the request/response pair served to clients.

use chess_core::{FenError, Game, Move, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::difficulty::{Difficulty, DifficultyError, DifficultyTable};
use crate::eval::evaluate;
use crate::search::{search, Pruning};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] FenError),

    #[error(transparent)]
    UnknownDifficulty(#[from] DifficultyError),

    #[error("no legal moves in the requested position")]
    NoLegalMoves,
}

/// A client asking for the computer's move in an arbitrary position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMoveRequest {
    pub fen: String,
    pub difficulty: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMoveResponse {
    /// Coordinate notation, e.g. `e7e5`.
    #[serde(rename = "move")]
    pub mv: String,
    /// Static evaluation of the requested position, White-relative.
    pub evaluation: i32,
    pub difficulty: Difficulty,
}

/// Why the AI played the move it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    /// The only legal move.
    Forced,
    Random,
    Search { score: i32, nodes: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiChoice {
    pub mv: Move,
    pub source: MoveSource,
}

pub struct AiPlayer<R = StdRng> {
    table: DifficultyTable,
    random: RandomEngine<R>,
}

impl AiPlayer<StdRng> {
    pub fn new(table: DifficultyTable) -> Self {
        Self::with_rng(table, StdRng::from_entropy())
    }

    pub fn seeded(table: DifficultyTable, seed: u64) -> Self {
        Self::with_rng(table, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AiPlayer<R> {
    pub fn with_rng(table: DifficultyTable, rng: R) -> Self {
        Self {
            table,
            random: RandomEngine::with_rng(rng),
        }
    }

    pub fn table(&self) -> &DifficultyTable {
        &self.table
    }

    /// Pick a move for the side to move at `level`; `None` when the game
    /// has no legal moves.
    pub fn choose(&mut self, game: &Game, level: Difficulty) -> Option<AiChoice> {
        let moves = game.legal_moves();
        match moves.as_slice() {
            [] => return None,
            [only] => {
                return Some(AiChoice {
                    mv: *only,
                    source: MoveSource::Forced,
                })
            }
            _ => {}
        }

        let policy = self.table.policy(level);
        if self.random.gamble(policy.random_move_chance) {
            let mv = self.random.pick(&moves)?;
            debug!(%level, %mv, "random move");
            return Some(AiChoice {
                mv,
                source: MoveSource::Random,
            });
        }

        let outcome = search(game, policy.depth, Pruning::AlphaBeta);
        outcome.best.map(|best| AiChoice {
            mv: best.mv,
            source: MoveSource::Search {
                score: best.score,
                nodes: outcome.nodes,
            },
        })
    }

    /// Answer a client request. Nothing outside the request is touched.
    pub fn respond(&mut self, request: &AiMoveRequest) -> Result<AiMoveResponse, AiError> {
        let difficulty: Difficulty = request.difficulty.parse()?;
        let game = Game::from_position(Position::from_fen(&request.fen)?);
        let choice = self
            .choose(&game, difficulty)
            .ok_or(AiError::NoLegalMoves)?;
        Ok(AiMoveResponse {
            mv: choice.mv.to_string(),
            evaluation: evaluate(&game),
            difficulty,
        })
    }
}

#[cfg(test)]
#[path = "ai_tests.rs"]
mod ai_tests;
