//! Plain-text board dump for logs and test failure messages.
//!
//! Row 0 is printed first. White pieces are uppercase, black lowercase, empty
//! squares are `.`. Rows and columns are labeled with the engine's own
//! zero-based indices.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;

pub fn render_game_state(board: &Board) -> String {
    let mut out = String::with_capacity(9 * 18);

    out.push_str("  0 1 2 3 4 5 6 7");
    for pos in Position::all() {
        if pos.col() == 0 {
            out.push('\n');
            out.push(char::from(b'0' + pos.row()));
        }
        out.push(' ');
        out.push(board.piece_at(pos).map_or('.', |piece| piece.symbol()));
    }

    out
}
