//! Pawn pushes, captures and attack squares.
//!
//! Pawns are the one kind whose movement and attack geometry differ. Pushes
//! go straight ahead and never capture; captures go diagonally forward and
//! need an enemy on the target. Check detection must use `pawn_attacks`,
//! which reports both forward diagonals whether or not anything stands there.
//! En passant and promotion are not modeled.

use crate::game_state::chess_rules::pawn_rank;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::movement::Occupancy;

const CAPTURE_COLS: [i8; 2] = [-1, 1];

pub fn pawn_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if occupancy.color_at(one).is_none() {
            out.push(one);
            if from.row() == pawn_rank(color) {
                if let Some(two) = one.offset(forward, 0) {
                    if occupancy.color_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in CAPTURE_COLS {
        if let Some(to) = from.offset(forward, d_col) {
            if occupancy.color_at(to) == Some(color.opposite()) {
                out.push(to);
            }
        }
    }
}

/// Squares a pawn of `color` on `from` threatens, occupied or not.
pub fn pawn_attacks(from: Position, color: Color, out: &mut Vec<Position>) {
    for d_col in CAPTURE_COLS {
        if let Some(to) = from.offset(color.forward(), d_col) {
            out.push(to);
        }
    }
}
