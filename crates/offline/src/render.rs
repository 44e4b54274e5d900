//! Text board for the terminal. White at the bottom, FEN letters for
//! pieces, `.` for empty squares.

use chess_core::{sq, Position};

pub fn board_diagram(pos: &Position) -> String {
    let mut out = String::with_capacity(200);
    for rank in (0..8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8 {
            let piece = sq(file, rank).and_then(|s| pos.piece_at(s));
            out.push(' ');
            out.push(piece.map_or('.', |p| p.to_fen_char()));
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_diagram() {
        let diagram = board_diagram(&Position::startpos());
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
