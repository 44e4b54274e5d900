//! Error types for position parsing and move application.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks in the board field, found {0}")]
    RankCount(usize),

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankLength { rank: usize },

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling character '{0}'")]
    Castling(char),

    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    Counter(String),

    #[error("{0} must have exactly one king")]
    KingCount(crate::types::Color),

    #[error("pawn on the first or last rank at {0}")]
    PawnOnBackRank(String),

    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(crate::types::Color),
}

/// Reasons a move cannot be produced or applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The text does not describe a move at all.
    #[error("could not understand '{0}'")]
    Unparseable(String),

    /// Well-formed, but not legal in the current position.
    #[error("illegal move {0}")]
    Illegal(String),

    /// A destination-only command matched more than one legal move.
    #[error("'{text}' matches {count} legal moves")]
    Ambiguous { text: String, count: usize },

    #[error("no move to take back")]
    NothingToUndo,
}
