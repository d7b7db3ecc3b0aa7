use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::movement::Occupancy;
use crate::moves::rook_moves::rook_moves;

/// Union of the rook and bishop rays.
#[inline]
pub fn queen_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    rook_moves(occupancy, from, color, out);
    bishop_moves(occupancy, from, color, out);
}
