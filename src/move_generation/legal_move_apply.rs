//! Validated move execution.
//!
//! `move_piece` checks everything before touching the grid, so a rejected
//! move leaves the board exactly as it was.

use crate::chess_errors::{ChessResult, InvalidMove};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::CASTLING_KING_DISTANCE;
use crate::game_state::chess_types::{CastleSide, ChessMove, Piece, PieceKind, Position};

impl Board {
    /// A copy of the board with the piece on `start` moved to `end`, no rules
    /// applied. The source board is untouched.
    pub fn simulate_move(&self, start: Position, end: Position) -> Board {
        let mut next = self.deep_dup();
        next.relocate(start, end);
        next
    }

    /// Moves the piece on `start` to `end` if that is one of its legal moves.
    ///
    /// Returns the captured piece, if any.
    pub fn move_piece(&mut self, start: Position, end: Position) -> ChessResult<Option<Piece>> {
        let Some(piece) = self.piece_at(start).copied() else {
            let err = InvalidMove::NoPieceAtStart(start);
            log::debug!("rejected {start} -> {end}: {err}");
            return Err(err);
        };
        if !self.is_legal_destination(&piece, end) {
            let err = InvalidMove::IllegalDestination {
                kind: piece.kind,
                start,
                end,
            };
            log::debug!("rejected {start} -> {end}: {err}");
            return Err(err);
        }

        let captured = self.relocate(start, end);
        match &captured {
            Some(victim) => log::debug!(
                "{} {} {start} -> {end} captures {} {}",
                piece.color,
                piece.kind,
                victim.color,
                victim.kind
            ),
            None => log::debug!("{} {} {start} -> {end}", piece.color, piece.kind),
        }
        Ok(captured)
    }

    /// Plays a move as produced by `legal_moves_for_color`: a two-square king
    /// move is a castle, anything else goes through `move_piece`.
    pub fn play(&mut self, mv: ChessMove) -> ChessResult<Option<Piece>> {
        if let Some(side) = self.castle_side_of(mv) {
            let Some(piece) = self.piece_at(mv.start).copied() else {
                return Err(InvalidMove::NoPieceAtStart(mv.start));
            };
            self.castle(piece.color, side)?;
            return Ok(None);
        }
        self.move_piece(mv.start, mv.end)
    }

    fn castle_side_of(&self, mv: ChessMove) -> Option<CastleSide> {
        let piece = self.piece_at(mv.start)?;
        if piece.kind != PieceKind::King || mv.start.row() != mv.end.row() {
            return None;
        }
        let d_col = mv.end.col() as i8 - mv.start.col() as i8;
        match d_col {
            d if d == CASTLING_KING_DISTANCE as i8 => Some(CastleSide::Kingside),
            d if d == -(CASTLING_KING_DISTANCE as i8) => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}
