//! Legal move filtering.
//!
//! Each pseudo-legal destination is tried on a cloned board and dropped if
//! the mover's king is attacked afterwards. Destinations holding a king are
//! dropped outright: the engine never captures a king.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CASTLING_KING_DISTANCE;
use crate::game_state::chess_types::{ChessMove, Color, Piece, PieceKind, Position};
use crate::moves::piece_moves::pseudo_legal_moves;

impl Board {
    #[inline]
    pub fn pseudo_legal_moves(&self, piece: &Piece) -> Vec<Position> {
        pseudo_legal_moves(self, piece)
    }

    /// Destinations of `piece` that do not leave its own king attacked.
    pub fn legal_moves(&self, piece: &Piece) -> Vec<Position> {
        pseudo_legal_moves(self, piece)
            .into_iter()
            .filter(|&end| self.keeps_king_safe(piece, end))
            .collect()
    }

    /// Legal destinations of whatever stands on `pos`; empty for an empty square.
    pub fn legal_moves_at(&self, pos: Position) -> Vec<Position> {
        match self.piece_at(pos) {
            Some(piece) => self.legal_moves(piece),
            None => Vec::new(),
        }
    }

    pub(crate) fn is_legal_destination(&self, piece: &Piece, end: Position) -> bool {
        pseudo_legal_moves(self, piece).contains(&end) && self.keeps_king_safe(piece, end)
    }

    /// Every legal move of `color`, castling included as a two-square king move.
    pub fn legal_moves_for_color(&self, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::with_capacity(48);
        for piece in self.pieces_of(color) {
            for end in self.legal_moves(piece) {
                moves.push(ChessMove::new(piece.position, end));
            }
        }
        if let Some(king_sq) = self.king_position(color) {
            for side in self.castling_options(color) {
                let d_col = side.direction() * CASTLING_KING_DISTANCE as i8;
                if let Some(end) = king_sq.offset(0, d_col) {
                    moves.push(ChessMove::new(king_sq, end));
                }
            }
        }
        moves
    }

    /// Stops at the first legal move found.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|piece| !self.legal_moves(piece).is_empty())
            || !self.castling_options(color).is_empty()
    }

    fn keeps_king_safe(&self, piece: &Piece, end: Position) -> bool {
        if self.piece_at(end).map(|target| target.kind) == Some(PieceKind::King) {
            return false;
        }
        let safe = !self.simulate_move(piece.position, end).in_check(piece.color);
        log::trace!(
            "{} {} {} -> {}: {}",
            piece.color,
            piece.kind,
            piece.position,
            end,
            if safe { "legal" } else { "exposes king" }
        );
        safe
    }
}
