//! Stepping and sliding movement strategies.
//!
//! Both strategies read occupancy through the `Occupancy` trait so they can be
//! driven by the real board or by a bare test fixture. They produce
//! pseudo-legal destinations only: whether a move exposes the mover's king is
//! decided later by `move_generation`.

use crate::game_state::chess_types::{Color, Position};

/// Read-only view of which side, if any, holds a square.
pub trait Occupancy {
    fn color_at(&self, pos: Position) -> Option<Color>;
}

/// One atomic hop per offset. A hop is kept if it lands on the board and not
/// on a piece of `color`.
pub fn stepping_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    hops: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in hops {
        if let Some(to) = from.offset(d_row, d_col) {
            if occupancy.color_at(to) != Some(color) {
                out.push(to);
            }
        }
    }
}

/// Repeated unit steps per direction until the edge, a friendly piece
/// (excluded) or an enemy piece (included, then stop).
pub fn sliding_moves<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match occupancy.color_at(to) {
                None => out.push(to),
                Some(other) => {
                    if other != color {
                        out.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Occupancy fixture keyed by square.
    #[derive(Default)]
    pub(crate) struct Squares(pub HashMap<Position, Color>);

    impl Squares {
        pub(crate) fn with(mut self, row: u8, col: u8, color: Color) -> Self {
            self.0.insert(Position::new(row, col), color);
            self
        }
    }

    impl Occupancy for Squares {
        fn color_at(&self, pos: Position) -> Option<Color> {
            self.0.get(&pos).copied()
        }
    }

    #[test]
    fn stepping_skips_friendly_and_off_board() {
        let squares = Squares::default()
            .with(1, 1, Color::White)
            .with(0, 1, Color::Black);
        let mut out = Vec::new();
        stepping_moves(
            &squares,
            Position::new(0, 0),
            Color::White,
            &[(1, 1), (0, 1), (-1, 0), (1, 0)],
            &mut out,
        );
        assert_eq!(out, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn sliding_stops_at_blockers() {
        let squares = Squares::default()
            .with(4, 6, Color::Black)
            .with(4, 1, Color::White);
        let mut out = Vec::new();
        sliding_moves(
            &squares,
            Position::new(4, 4),
            Color::White,
            &[(0, 1), (0, -1)],
            &mut out,
        );
        assert_eq!(
            out,
            vec![
                Position::new(4, 5),
                Position::new(4, 6),
                Position::new(4, 3),
                Position::new(4, 2),
            ]
        );
    }

    #[test]
    fn sliding_runs_to_the_edge_on_an_empty_board() {
        let mut out = Vec::new();
        sliding_moves(
            &Squares::default(),
            Position::new(7, 0),
            Color::Black,
            &[(-1, 1)],
            &mut out,
        );
        assert_eq!(out.len(), 7);
        assert_eq!(out.last(), Some(&Position::new(0, 7)));
    }
}
