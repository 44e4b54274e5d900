//! Coordinate notation (`e2e4`, `e7e8q`) in both directions.

use crate::{board::Position, error::MoveError, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parse coordinate notation and match it against the legal moves of `pos`
/// so the castle/en-passant flags come from the generator. A missing
/// promotion letter on a promoting move selects the queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, MoveError> {
    let txt = txt.trim();
    let unparseable = || MoveError::Unparseable(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(unparseable());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(unparseable)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(unparseable)?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(k @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(k)
            }
            _ => return Err(unparseable()),
        },
    };
    find_legal(pos, from, to, promo).ok_or_else(|| MoveError::Illegal(txt.to_string()))
}

/// Look up the legal move `from -> to`. Promotions default to the queen,
/// which the generator lists first.
pub fn find_legal(pos: &Position, from: u8, to: u8, promo: Option<PieceKind>) -> Option<Move> {
    legal_moves(pos)
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .find(|m| promo.is_none() || m.promo == promo)
}
