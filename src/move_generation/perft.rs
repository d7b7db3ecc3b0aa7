//! Leaf counting over alternating plies.
//!
//! Used as a regression check for the legality filter and as the benchmark
//! workload. Counts diverge from published perft tables only once en passant
//! or promotion becomes reachable, which does not happen before depth 5 from
//! the initial position.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts the positions reached after `depth` plies, `side` moving first.
pub fn perft(board: &Board, side: Color, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in board.legal_moves_for_color(side) {
        let mut next = board.deep_dup();
        let castles = next.king_position(side) == Some(mv.start)
            && mv.start.col().abs_diff(mv.end.col()) == 2;
        let captured = next.play(mv)?;

        if depth == 1 {
            let gives_check = next.in_check(side.opposite());
            total.merge(PerftCounts {
                nodes: 1,
                captures: captured.is_some() as u64,
                castles: castles as u64,
                checks: gives_check as u64,
                checkmates: (gives_check && !next.has_any_legal_move(side.opposite())) as u64,
            });
        } else {
            total.merge(perft(&next, side.opposite(), depth - 1)?);
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Position};

    #[test]
    fn depth_zero_is_one_node() {
        let counts = perft(&Board::new_game(), Color::White, 0).unwrap();
        assert_eq!(counts.nodes, 1);
    }

    #[test]
    fn initial_position_matches_reference_counts() {
        let board = Board::new_game();

        let d1 = perft(&board, Color::White, 1).unwrap();
        assert_eq!(d1, PerftCounts { nodes: 20, ..PerftCounts::default() });

        let d2 = perft(&board, Color::White, 2).unwrap();
        assert_eq!(d2, PerftCounts { nodes: 400, ..PerftCounts::default() });

        let d3 = perft(&board, Color::White, 3).unwrap();
        assert_eq!(d3.nodes, 8902);
        assert_eq!(d3.captures, 34);
        assert_eq!(d3.checks, 12);
        assert_eq!(d3.checkmates, 0);
    }

    #[test]
    fn castles_are_counted() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Position::new(7, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Position::new(7, 0)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Position::new(7, 7)));
        board.place(Piece::new(PieceKind::King, Color::Black, Position::new(0, 4)));

        let counts = perft(&board, Color::White, 1).unwrap();
        assert_eq!(counts.castles, 2);
        // 5 king steps, 10 + 9 rook moves, 2 castles
        assert_eq!(counts.nodes, 26);
    }
}
