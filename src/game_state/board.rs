//! Board state container.
//!
//! `Board` owns an 8x8 grid of optional pieces plus a color-to-king index that
//! is kept in step with every placement, relocation and removal, so king
//! lookup never scans the grid. Legality, status and castling live in
//! `move_generation` as further `impl Board` blocks; this module only stores
//! and answers occupancy questions.
//!
//! Hypothetical moves are evaluated on a `deep_dup` of the board and the clone
//! is thrown away afterwards. The engine never unmakes a move.

use std::fmt;

use crate::game_state::chess_rules::{back_rank, pawn_rank, RulesConfig, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::moves::movement::Occupancy;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    // [color]
    kings: [Option<Position>; 2],
    rules: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_rules(RulesConfig::default())
    }
}

impl Board {
    /// An empty board with the default rules.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty board with the given rules.
    pub fn with_rules(rules: RulesConfig) -> Self {
        Board {
            grid: [[None; 8]; 8],
            kings: [None; 2],
            rules,
        }
    }

    /// A board holding the standard 32-piece starting layout.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        board.set_up_pieces();
        board
    }

    /// Places the standard layout for both colors. Intended for an empty board;
    /// pieces already on the home ranks are replaced.
    pub fn set_up_pieces(&mut self) {
        for color in Color::ALL {
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let col = col as u8;
                self.put(Piece::new(*kind, color, Position::new(back_rank(color), col)));
                self.put(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Position::new(pawn_rank(color), col),
                ));
            }
        }
        log::debug!("standard layout placed");
    }

    #[inline]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.grid[pos.row() as usize][pos.col() as usize].as_ref()
    }

    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    #[inline]
    pub fn occupied(&self, pos: Position) -> bool {
        self.piece_at(pos).is_some()
    }

    /// Puts `piece` on the square named by its own `position`, returning
    /// whatever stood there.
    ///
    /// This is a setup tool and applies no rules. Placing a second king of one
    /// color moves the king index to the newer king.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.put(piece)
    }

    /// Clears a square, returning its piece.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.take(pos)
    }

    /// All pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// Where this color's king stands, if it has one.
    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.kings[color.index()]
    }

    /// An independent copy: same pieces, positions and moved flags, no shared
    /// state with `self`.
    #[inline]
    pub fn deep_dup(&self) -> Board {
        self.clone()
    }

    /// Moves whatever stands on `start` to `end` without any rule checking,
    /// marking it as moved. Returns the captured piece, if any.
    pub(crate) fn relocate(&mut self, start: Position, end: Position) -> Option<Piece> {
        let Some(mut piece) = self.take(start) else {
            log::warn!("relocate from empty square {start} ignored");
            return None;
        };
        piece.position = end;
        piece.has_moved = true;
        self.put(piece)
    }

    fn put(&mut self, piece: Piece) -> Option<Piece> {
        let displaced = self.take(piece.position);
        if piece.kind == PieceKind::King {
            self.kings[piece.color.index()] = Some(piece.position);
        }
        self.grid[piece.position.row() as usize][piece.position.col() as usize] = Some(piece);
        displaced
    }

    fn take(&mut self, pos: Position) -> Option<Piece> {
        let taken = self.grid[pos.row() as usize][pos.col() as usize].take();
        if let Some(piece) = &taken {
            if piece.kind == PieceKind::King && self.kings[piece.color.index()] == Some(pos) {
                self.kings[piece.color.index()] = None;
            }
        }
        taken
    }
}

impl Occupancy for Board {
    #[inline]
    fn color_at(&self, pos: Position) -> Option<Color> {
        Board::color_at(self, pos)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_places_thirty_two_pieces() {
        let board = Board::new_game();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert!(board.pieces().all(|piece| !piece.has_moved));
    }

    #[test]
    fn setup_mirrors_the_back_ranks() {
        let board = Board::new_game();
        for col in 0..8 {
            let white = board.piece_at(Position::new(7, col)).unwrap();
            let black = board.piece_at(Position::new(0, col)).unwrap();
            assert_eq!(white.kind, black.kind);
            assert_eq!(white.color, Color::White);
            assert_eq!(black.color, Color::Black);
            assert_eq!(board.piece_at(Position::new(6, col)).unwrap().kind, PieceKind::Pawn);
            assert_eq!(board.piece_at(Position::new(1, col)).unwrap().kind, PieceKind::Pawn);
        }
        for row in 2..6 {
            for col in 0..8 {
                assert!(!board.occupied(Position::new(row, col)));
            }
        }
        assert_eq!(board.king_position(Color::White), Some(Position::new(7, 4)));
        assert_eq!(board.king_position(Color::Black), Some(Position::new(0, 4)));
    }

    #[test]
    fn color_at_reports_owner() {
        let board = Board::new_game();
        assert_eq!(board.color_at(Position::new(6, 0)), Some(Color::White));
        assert_eq!(board.color_at(Position::new(1, 0)), Some(Color::Black));
        assert_eq!(board.color_at(Position::new(4, 4)), None);
    }

    #[test]
    fn relocate_tracks_king_and_captures() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Position::new(7, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Position::new(6, 4)));

        let captured = board.relocate(Position::new(7, 4), Position::new(6, 4));

        assert_eq!(captured.map(|piece| piece.kind), Some(PieceKind::Rook));
        assert_eq!(board.king_position(Color::White), Some(Position::new(6, 4)));
        let king = board.piece_at(Position::new(6, 4)).unwrap();
        assert!(king.has_moved);
        assert_eq!(king.position, Position::new(6, 4));
        assert!(!board.occupied(Position::new(7, 4)));
    }

    #[test]
    fn removing_a_king_clears_the_index() {
        let mut board = Board::new_game();
        let king = board.remove(Position::new(0, 4));
        assert_eq!(king.map(|piece| piece.kind), Some(PieceKind::King));
        assert_eq!(board.king_position(Color::Black), None);
        assert_eq!(board.king_position(Color::White), Some(Position::new(7, 4)));
    }

    #[test]
    fn deep_dup_shares_nothing_with_the_original() {
        let original = Board::new_game();
        let mut clone = original.deep_dup();
        clone.relocate(Position::new(6, 4), Position::new(4, 4));
        clone.remove(Position::new(0, 0));

        assert_eq!(original, Board::new_game());
        assert!(original.occupied(Position::new(6, 4)));
        assert!(!original.piece_at(Position::new(6, 4)).unwrap().has_moved);
        assert!(original.occupied(Position::new(0, 0)));
        assert_ne!(original, clone);
    }
}
