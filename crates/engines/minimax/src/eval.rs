//! Static position evaluation.
//!
//! Scores are always from White's point of view: positive is good for
//! White, negative for Black. One pawn is worth 10.

use chess_core::{file_of, rank_of, Color, Game, GameStatus, Move, PieceKind, Position};

/// Score of a won game.
pub const MATE_SCORE: i32 = 1000;

/// Bound on any score that is not a mate. Heavily promoted armies can
/// outweigh `MATE_SCORE` in raw material, so static scores are clamped.
pub const MAX_STATIC_SCORE: i32 = MATE_SCORE - 1;

/// Material values indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 900];

const QUEEN_BONUS: i32 = 2;

/// Evaluates a game, taking repetition history into account.
pub fn evaluate(game: &Game) -> i32 {
    score_status(game.status()).unwrap_or_else(|| static_score(game.position()))
}

/// Same as [`evaluate`] when the caller already has the legal moves.
pub(crate) fn evaluate_with_moves(game: &Game, moves: &[Move]) -> i32 {
    score_status(game.status_with_moves(moves)).unwrap_or_else(|| static_score(game.position()))
}

/// Evaluates a bare position as if it had no history.
pub fn evaluate_position(pos: &Position) -> i32 {
    evaluate(&Game::from_position(pos.clone()))
}

fn score_status(status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Checkmate { winner } => Some(winner.sign() * MATE_SCORE),
        GameStatus::Stalemate | GameStatus::Draw(_) => Some(0),
    }
}

fn static_score(pos: &Position) -> i32 {
    material(pos).clamp(-MAX_STATIC_SCORE, MAX_STATIC_SCORE)
}

/// Material plus placement bonuses, ignoring whether the game is over.
pub fn material(pos: &Position) -> i32 {
    let mut score = 0;
    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            let value = PIECE_VALUES[pc.kind.idx()] + placement_bonus(pc.kind, pc.color, sq);
            score += pc.color.sign() * value;
        }
    }
    score
}

fn placement_bonus(kind: PieceKind, color: Color, sq: u8) -> i32 {
    match kind {
        // Ranks advanced from the pawn's own back rank.
        PieceKind::Pawn => match color {
            Color::White => rank_of(sq) as i32,
            Color::Black => 7 - rank_of(sq) as i32,
        },
        PieceKind::Knight | PieceKind::Bishop => 5 - centre_distance(sq),
        PieceKind::Queen => QUEEN_BONUS,
        PieceKind::Rook | PieceKind::King => 0,
    }
}

/// Manhattan distance from the point between d4, e4, d5 and e5.
/// Always a whole number: both half-offsets are odd.
fn centre_distance(sq: u8) -> i32 {
    let file = file_of(sq) as i32;
    let rank = rank_of(sq) as i32;
    ((2 * file - 7).abs() + (2 * rank - 7).abs()) / 2
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
