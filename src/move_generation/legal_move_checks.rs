//! Attack and check queries.
//!
//! A square is attacked by a side when any of that side's pieces has it in its
//! attack set. For every kind but the pawn that set is the pseudo-legal move
//! set; pawns attack their two forward diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Position};
use crate::moves::piece_moves::attacked_squares;

impl Board {
    pub fn is_square_attacked(&self, square: Position, attacker_color: Color) -> bool {
        self.pieces_of(attacker_color)
            .any(|piece| attacked_squares(self, piece).contains(&square))
    }

    /// Every `attacker_color` piece attacking `square`.
    pub fn attackers_of(&self, square: Position, attacker_color: Color) -> Vec<Piece> {
        self.pieces_of(attacker_color)
            .filter(|piece| attacked_squares(self, piece).contains(&square))
            .copied()
            .collect()
    }

    /// True if an opposing piece attacks this color's king. A color without a
    /// king is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.king_position(color) else {
            return false;
        };
        self.is_square_attacked(king_sq, color.opposite())
    }
}
