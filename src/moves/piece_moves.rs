//! Dispatch from piece kind to movement rule.
//!
//! `pseudo_legal_moves` answers "where may this piece go, ignoring king
//! safety". `attacked_squares` answers "which squares does this piece
//! threaten", which is the same set for every kind except the pawn.

use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::movement::Occupancy;
use crate::moves::pawn_moves::{pawn_attacks, pawn_moves};
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn pseudo_legal_moves<O: Occupancy + ?Sized>(occupancy: &O, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    let (from, color) = (piece.position, piece.color);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(occupancy, from, color, &mut out),
        PieceKind::Knight => knight_moves(occupancy, from, color, &mut out),
        PieceKind::Bishop => bishop_moves(occupancy, from, color, &mut out),
        PieceKind::Rook => rook_moves(occupancy, from, color, &mut out),
        PieceKind::Queen => queen_moves(occupancy, from, color, &mut out),
        PieceKind::King => king_moves(occupancy, from, color, &mut out),
    }
    out
}

pub fn attacked_squares<O: Occupancy + ?Sized>(occupancy: &O, piece: &Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => {
            let mut out = Vec::with_capacity(2);
            pawn_attacks(piece.position, piece.color, &mut out);
            out
        }
        _ => pseudo_legal_moves(occupancy, piece),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves_per_side() {
        let board = Board::new_game();
        for color in Color::ALL {
            let total: usize = board
                .pieces_of(color)
                .map(|piece| pseudo_legal_moves(&board, piece).len())
                .sum();
            assert_eq!(total, 20, "{color} should have 20 opening moves");
        }
    }

    #[test]
    fn pawn_attacks_differ_from_pawn_moves() {
        let board = Board::new_game();
        let pawn = board.piece_at(Position::new(6, 4)).unwrap();
        let moves = pseudo_legal_moves(&board, pawn);
        let attacks = attacked_squares(&board, pawn);
        assert_eq!(moves, vec![Position::new(5, 4), Position::new(4, 4)]);
        assert_eq!(attacks, vec![Position::new(5, 3), Position::new(5, 5)]);
    }

    #[test]
    fn non_pawn_attacks_equal_moves() {
        let board = Board::new_game();
        let knight = board.piece_at(Position::new(7, 1)).unwrap();
        assert_eq!(attacked_squares(&board, knight), pseudo_legal_moves(&board, knight));
    }

    #[test]
    fn generation_does_not_touch_the_board() {
        let board = Board::new_game();
        let before = board.clone();
        for piece in board.pieces() {
            let _ = pseudo_legal_moves(&board, piece);
            let _ = attacked_squares(&board, piece);
        }
        assert_eq!(board, before);
    }
}
