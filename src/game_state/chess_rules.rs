//! Canonical chess-rule constants and rule options.
//!
//! Stores the starting layout, home ranks and castling geometry used to set up
//! and validate boards, plus the `RulesConfig` a `Board` is built with.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind};

/// Back-rank layout from column 0 to column 7, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;

/// Squares the king travels when castling.
pub const CASTLING_KING_DISTANCE: u8 = 2;

/// Row holding this side's pieces at setup.
#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row holding this side's pawns at setup. Pawns on it may double step.
#[inline]
pub const fn pawn_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Column of the rook castling uses on the given side.
#[inline]
pub const fn castling_rook_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::Kingside => 7,
        CastleSide::Queenside => 0,
    }
}

/// How stalemate is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalemateRule {
    /// A side that is not in check and has no legal move is stalemated. Draw.
    #[default]
    Standard,
    /// Either side having no legal move counts as stalemate, in check or not.
    Legacy,
}

/// Rule options a board is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    pub stalemate_rule: StalemateRule,
}

impl RulesConfig {
    pub const fn legacy() -> Self {
        RulesConfig {
            stalemate_rule: StalemateRule::Legacy,
        }
    }
}
