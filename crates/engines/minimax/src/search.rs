//! Minimax search with optional alpha-beta pruning.
//!
//! White maximises and Black minimises the White-relative score from
//! [`evaluate`]. Every hypothetical move goes through [`Game::apply`], so
//! the game is back in its original state whenever a child returns.

use chess_core::{Color, Game, Move};
use tracing::debug;

use crate::eval::{evaluate, evaluate_with_moves};

/// How the tree is searched. Both variants return the same move and score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Full minimax; kept to check the pruned search against.
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Result of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found (if any legal moves exist)
    pub best: Option<ScoredMove>,
    /// Moves applied during the search
    pub nodes: u64,
}

/// Picks the best move for the side to move, `None` when there is none.
pub fn best_move(game: &Game, depth: u8, pruning: Pruning) -> Option<ScoredMove> {
    search(game, depth, pruning).best
}

/// Searches `depth` plies below the root.
///
/// Ties keep the earliest move in generation order. A depth of zero
/// scores each root move by its resulting position.
pub fn search(game: &Game, depth: u8, pruning: Pruning) -> SearchOutcome {
    let mut game = game.clone();
    let moves = game.legal_moves();
    let maximizing = game.side_to_move() == Color::White;

    let mut nodes = 0u64;
    let mut best: Option<ScoredMove> = None;
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;

    for mv in moves {
        let score = {
            let mut child = game.apply(mv);
            nodes += 1;
            match pruning {
                Pruning::AlphaBeta => {
                    alphabeta(&mut child, depth.saturating_sub(1), alpha, beta, &mut nodes)
                }
                Pruning::None => minimax(&mut child, depth.saturating_sub(1), &mut nodes),
            }
        };

        let improves = match best {
            None => true,
            Some(b) if maximizing => score > b.score,
            Some(b) => score < b.score,
        };
        if improves {
            best = Some(ScoredMove { mv, score });
            if maximizing {
                alpha = score;
            } else {
                beta = score;
            }
        }
    }

    if let Some(b) = best {
        debug!(depth, nodes, score = b.score, best = %b.mv, ?pruning, "search finished");
    }
    SearchOutcome { best, nodes }
}

/// Plain minimax value of `game`.
pub fn minimax(game: &mut Game, depth: u8, nodes: &mut u64) -> i32 {
    if depth == 0 {
        return evaluate(game);
    }

    let moves = game.legal_moves();
    if moves.is_empty() || game.draw_reason().is_some() {
        return evaluate_with_moves(game, &moves);
    }

    let maximizing = game.side_to_move() == Color::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let mut child = game.apply(mv);
        *nodes += 1;
        let score = minimax(&mut child, depth - 1, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Fail-soft alpha-beta. Exact whenever the true value lies strictly
/// inside `(alpha, beta)`; otherwise a bound on the same side as the
/// window edge it crossed.
pub fn alphabeta(game: &mut Game, depth: u8, mut alpha: i32, mut beta: i32, nodes: &mut u64) -> i32 {
    if depth == 0 {
        return evaluate(game);
    }

    let moves = game.legal_moves();
    if moves.is_empty() || game.draw_reason().is_some() {
        return evaluate_with_moves(game, &moves);
    }

    if game.side_to_move() == Color::White {
        let mut best = i32::MIN;
        for mv in moves {
            let score = {
                let mut child = game.apply(mv);
                *nodes += 1;
                alphabeta(&mut child, depth - 1, alpha, beta, nodes)
            };
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let score = {
                let mut child = game.apply(mv);
                *nodes += 1;
                alphabeta(&mut child, depth - 1, alpha, beta, nodes)
            };
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
