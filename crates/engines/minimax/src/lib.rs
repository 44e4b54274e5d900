//! Minimax Chess Engine
//!
//! Minimax search with alpha-beta pruning over a material-and-placement
//! evaluation, the difficulty levels built on it, and the AI move
//! request served to clients.

pub mod ai;
pub mod difficulty;
pub mod eval;
pub mod search;

use chess_core::{Engine, Game, SearchResult};

pub use ai::{AiChoice, AiError, AiMoveRequest, AiMoveResponse, AiPlayer, MoveSource};
pub use difficulty::{Difficulty, DifficultyError, DifficultyPolicy, DifficultyTable, MAX_DEPTH};
pub use eval::{evaluate, evaluate_position, MATE_SCORE, MAX_STATIC_SCORE};
pub use search::{best_move, search, Pruning, ScoredMove, SearchOutcome};

/// Fixed-depth minimax engine.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    pruning: Pruning,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same moves and scores either way; only the node count differs.
    pub fn with_pruning(pruning: Pruning) -> Self {
        Self { pruning, nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, game: &Game, depth: u8) -> SearchResult {
        let outcome = search::search(game, depth, self.pruning);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best.map(|b| b.mv),
            score: outcome.best.map_or_else(|| evaluate(game), |b| b.score),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        match self.pruning {
            Pruning::AlphaBeta => "Minimax (alpha-beta)",
            Pruning::None => "Minimax",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
