//! King stepping table.
//!
//! Only the one-square hops live here. Castling is a separate board command
//! (see `move_generation::castling`) and never appears in pseudo-legal output.

use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::DIAGONAL;
use crate::moves::movement::{stepping_moves, Occupancy};
use crate::moves::rook_moves::STRAIGHT;

pub const KING_HOPS: [(i8, i8); 8] = [
    STRAIGHT[0],
    STRAIGHT[1],
    STRAIGHT[2],
    STRAIGHT[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

#[inline]
pub fn king_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    stepping_moves(occupancy, from, color, &KING_HOPS, out);
}
