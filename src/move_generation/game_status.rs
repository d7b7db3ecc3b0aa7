//! Checkmate, stalemate and game-over queries.
//!
//! Under `StalemateRule::Standard` a side is stalemated when it is not in
//! check and has no legal move; that is a draw and names no winner. Under
//! `StalemateRule::Legacy` any side without a legal move counts as
//! stalemated, checkmated sides included. `winner` only ever reports a
//! checkmate.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::StalemateRule;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate { side: Color },
}

impl Board {
    /// In check with no legal move anywhere on that side.
    pub fn checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_any_legal_move(color)
    }

    pub fn is_stalemated(&self, color: Color) -> bool {
        match self.rules().stalemate_rule {
            StalemateRule::Standard => !self.in_check(color) && !self.has_any_legal_move(color),
            StalemateRule::Legacy => !self.has_any_legal_move(color),
        }
    }

    /// True if either side is stalemated.
    pub fn stalemate(&self) -> bool {
        Color::ALL.into_iter().any(|color| self.is_stalemated(color))
    }

    pub fn over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// The side that delivered checkmate, if any.
    pub fn winner(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.checkmate(color))
            .map(Color::opposite)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            log::info!("{} is checkmated", winner.opposite());
            return GameStatus::Checkmate { winner };
        }
        match Color::ALL.into_iter().find(|&color| self.is_stalemated(color)) {
            Some(side) => {
                log::info!(
                    "{side} has no legal move ({:?} stalemate rule)",
                    self.rules().stalemate_rule
                );
                GameStatus::Stalemate { side }
            }
            None => GameStatus::Ongoing,
        }
    }
}
