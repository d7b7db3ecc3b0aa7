//! Castling legality and execution.
//!
//! The king travels two squares toward the chosen rook and the rook lands on
//! the square the king crossed. Preconditions are checked in a fixed order and
//! the first failure is reported:
//!
//! 1. king and rook of the castling color stand on their home squares,
//! 2. neither has moved,
//! 3. every square strictly between them is empty,
//! 4. the king is not in check,
//! 5. each square the king steps onto is safe, tested by simulating the king
//!    on a cloned board one step at a time.
//!
//! Squares the rook crosses but the king does not (b1/b8 when castling
//! queenside) may be attacked.

use crate::chess_errors::{CastlingBlock, ChessResult, InvalidMove};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_rank, castling_rook_col, CASTLING_KING_DISTANCE, KING_HOME_COL,
};
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Position};

impl Board {
    /// The first unmet castling precondition, or `None` if castling is allowed.
    pub fn castling_block(&self, color: Color, side: CastleSide) -> Option<CastlingBlock> {
        let row = back_rank(color);
        let king_sq = Position::new(row, KING_HOME_COL);
        let rook_sq = Position::new(row, castling_rook_col(side));

        let king = match self.piece_at(king_sq) {
            Some(piece) if piece.kind == PieceKind::King && piece.color == color => piece,
            _ => return Some(CastlingBlock::KingNotHome),
        };
        let rook = match self.piece_at(rook_sq) {
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == color => piece,
            _ => return Some(CastlingBlock::RookNotHome),
        };
        if king.has_moved {
            return Some(CastlingBlock::KingHasMoved);
        }
        if rook.has_moved {
            return Some(CastlingBlock::RookHasMoved);
        }

        let (low, high) = (king_sq.col().min(rook_sq.col()), king_sq.col().max(rook_sq.col()));
        if (low + 1..high).any(|col| self.occupied(Position::new(row, col))) {
            return Some(CastlingBlock::PathBlocked);
        }

        if self.in_check(color) {
            return Some(CastlingBlock::KingInCheck);
        }
        for step in 1..=CASTLING_KING_DISTANCE as i8 {
            let Some(through) = king_sq.offset(0, side.direction() * step) else {
                return Some(CastlingBlock::PathBlocked);
            };
            if self.simulate_move(king_sq, through).in_check(color) {
                return Some(CastlingBlock::PassesThroughCheck);
            }
        }
        None
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling_block(color, side).is_none()
    }

    /// Sides `color` may castle toward right now.
    pub fn castling_options(&self, color: Color) -> Vec<CastleSide> {
        CastleSide::ALL
            .into_iter()
            .filter(|&side| self.can_castle(color, side))
            .collect()
    }

    pub fn castle(&mut self, color: Color, side: CastleSide) -> ChessResult<()> {
        if let Some(block) = self.castling_block(color, side) {
            log::debug!("rejected {color} {side} castle: {block}");
            return Err(InvalidMove::CastlingUnavailable(block));
        }

        let row = back_rank(color);
        let king_sq = Position::new(row, KING_HOME_COL);
        let rook_sq = Position::new(row, castling_rook_col(side));
        let distance = CASTLING_KING_DISTANCE as i8;
        let (Some(king_to), Some(rook_to)) = (
            king_sq.offset(0, side.direction() * distance),
            king_sq.offset(0, side.direction() * (distance - 1)),
        ) else {
            return Err(InvalidMove::CastlingUnavailable(CastlingBlock::PathBlocked));
        };

        self.relocate(king_sq, king_to);
        self.relocate(rook_sq, rook_to);
        log::debug!("{color} castles {side}: king to {king_to}, rook to {rook_to}");
        Ok(())
    }
}
