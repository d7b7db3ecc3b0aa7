use crate::game_state::chess_types::{Color, Position};
use crate::moves::movement::{sliding_moves, Occupancy};

/// Orthogonal unit directions.
pub const STRAIGHT: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    sliding_moves(occupancy, from, color, &STRAIGHT, out);
}
