use crate::game_state::chess_types::{Color, Position};
use crate::moves::movement::{stepping_moves, Occupancy};

pub const KNIGHT_HOPS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

#[inline]
pub fn knight_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    stepping_moves(occupancy, from, color, &KNIGHT_HOPS, out);
}
