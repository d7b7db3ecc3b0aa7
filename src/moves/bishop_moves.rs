use crate::game_state::chess_types::{Color, Position};
use crate::moves::movement::{sliding_moves, Occupancy};

/// Diagonal unit directions.
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    sliding_moves(occupancy, from, color, &DIAGONAL, out);
}
