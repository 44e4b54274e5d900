pub mod board;
pub mod command;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use command::{CastleSide, MoveText, command_to_move, parse_command, resolve};
pub use error::{FenError, MoveError};
pub use game::{Applied, DrawReason, Game, GameStatus};
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait, implemented by the minimax and random move pickers
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen line, positive favours White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that all move pickers implement.
///
/// Engines receive the whole [`Game`] rather than a bare position so that
/// repetition draws are visible to the search.
pub trait Engine: Send {
    /// Pick a move for the side to move.
    ///
    /// # Arguments
    /// * `game` - The current game; engines search on their own copy
    /// * `depth` - Search depth in plies (ignored by engines that do not search)
    fn search(&mut self, game: &Game, depth: u8) -> SearchResult;

    /// Returns the engine's name for logs and protocol replies
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
