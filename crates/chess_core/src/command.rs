//! Free-text move commands, as produced by speech recognition or typed by
//! a player: "pawn to e4", "knight f3", "e2 e4", "castle queen side".
//!
//! Parsing never looks at the board. [`resolve`] then matches the parsed
//! command against the legal moves of a position.

use std::fmt;

use crate::{
    board::Position,
    error::MoveError,
    movegen::legal_moves,
    notation::find_legal,
    types::*,
};

const FILLER_WORDS: [&str; 4] = ["to", "the", "a", "an"];

/// Checked in this order; the first name found wins.
const PIECE_NAMES: [(&str, PieceKind); 6] = [
    ("pawn", PieceKind::Pawn),
    ("knight", PieceKind::Knight),
    ("bishop", PieceKind::Bishop),
    ("rook", PieceKind::Rook),
    ("queen", PieceKind::Queen),
    ("king", PieceKind::King),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveText {
    /// Both squares given.
    FromTo { from: u8, to: u8 },
    /// Only the destination, optionally with the piece that goes there.
    Destination { piece: Option<PieceKind>, to: u8 },
    Castle(CastleSide),
}

impl fmt::Display for MoveText {
    /// Short algebraic-style rendering: `e2e4`, `Nf3`, `e4`, `O-O-O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MoveText::FromTo { from, to } => write!(f, "{}{}", sq_to_coord(from), sq_to_coord(to)),
            MoveText::Destination { piece, to } => {
                if let Some(kind) = piece.filter(|k| *k != PieceKind::Pawn) {
                    write!(f, "{}", kind.to_char().to_ascii_uppercase())?;
                }
                write!(f, "{}", sq_to_coord(to))
            }
            MoveText::Castle(CastleSide::King) => write!(f, "O-O"),
            MoveText::Castle(CastleSide::Queen) => write!(f, "O-O-O"),
        }
    }
}

/// Turn a spoken or typed phrase into a move description. Returns `None`
/// for anything that is not a move, resignations included.
pub fn parse_command(text: &str) -> Option<MoveText> {
    let lower = text.to_lowercase();
    let cleaned = lower
        .split_whitespace()
        .filter(|w| !FILLER_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.contains("castle") || cleaned.contains("castling") {
        if cleaned.contains("king") || cleaned.contains("short") {
            return Some(MoveText::Castle(CastleSide::King));
        }
        if cleaned.contains("queen") || cleaned.contains("long") {
            return Some(MoveText::Castle(CastleSide::Queen));
        }
        return Some(MoveText::Castle(CastleSide::King));
    }

    if cleaned.contains("resign") || cleaned.contains("surrender") {
        return None;
    }

    let squares = find_squares(&cleaned);
    match squares.as_slice() {
        [] => None,
        [to] => {
            let piece = PIECE_NAMES
                .iter()
                .find(|(name, _)| cleaned.contains(name))
                .map(|&(_, kind)| kind);
            Some(MoveText::Destination { piece, to: *to })
        }
        [from, to, ..] => Some(MoveText::FromTo { from: *from, to: *to }),
    }
}

/// Every `[a-h][1-8]` pair in the text, left to right, non-overlapping.
fn find_squares(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        let (f, r) = (bytes[i], bytes[i + 1]);
        if (b'a'..=b'h').contains(&f) && (b'1'..=b'8').contains(&r) {
            out.push((r - b'1') * 8 + (f - b'a'));
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

/// Find the legal move a command refers to.
///
/// A destination without a piece prefers pawn moves (as in algebraic
/// notation) and otherwise accepts any single piece that can get there.
pub fn resolve(pos: &Position, cmd: &MoveText) -> Result<Move, MoveError> {
    let text = cmd.to_string();
    let illegal = || MoveError::Illegal(text.clone());
    match *cmd {
        MoveText::FromTo { from, to } => find_legal(pos, from, to, None).ok_or_else(illegal),
        MoveText::Castle(side) => {
            let target_file = match side {
                CastleSide::King => 6,
                CastleSide::Queen => 2,
            };
            legal_moves(pos)
                .into_iter()
                .find(|m| m.is_castle && file_of(m.to) == target_file)
                .ok_or_else(illegal)
        }
        MoveText::Destination { piece, to } => {
            let kind_of = |m: &Move| pos.piece_at(m.from).map(|pc| pc.kind);
            // One entry per from-square: promotions collapse to the queen.
            let reaching: Vec<Move> = legal_moves(pos)
                .into_iter()
                .filter(|m| m.to == to && matches!(m.promo, None | Some(PieceKind::Queen)))
                .collect();
            let candidates: Vec<Move> = match piece {
                Some(kind) => reaching.into_iter().filter(|m| kind_of(m) == Some(kind)).collect(),
                None => {
                    let pawns: Vec<Move> = reaching
                        .iter()
                        .copied()
                        .filter(|m| kind_of(m) == Some(PieceKind::Pawn))
                        .collect();
                    if pawns.is_empty() { reaching } else { pawns }
                }
            };
            match candidates.as_slice() {
                [] => Err(illegal()),
                [only] => Ok(*only),
                many => Err(MoveError::Ambiguous {
                    text,
                    count: many.len(),
                }),
            }
        }
    }
}

/// Parse and resolve in one step.
pub fn command_to_move(pos: &Position, text: &str) -> Result<Move, MoveError> {
    let cmd = parse_command(text).ok_or_else(|| MoveError::Unparseable(text.to_string()))?;
    resolve(pos, &cmd)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
