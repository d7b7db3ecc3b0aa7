//! Errors returned by the rules engine.
//!
//! Every failure the engine reports is an `InvalidMove`: the caller asked for
//! something the rules forbid and can retry with corrected input. A rejected
//! command never mutates the board. Out-of-range coordinates are not modeled
//! here; `Position` refuses to construct them.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Position};

pub type ChessResult<T> = Result<T, InvalidMove>;

/// A command the rules do not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// The start square is empty.
    #[error("no piece in starting position {0}")]
    NoPieceAtStart(Position),

    /// The destination is not among the piece's legal moves.
    #[error("the {kind} at {start} can't move to {end}")]
    IllegalDestination {
        kind: PieceKind,
        start: Position,
        end: Position,
    },

    /// A castling precondition failed.
    #[error("castling unavailable: {0}")]
    CastlingUnavailable(CastlingBlock),
}

/// The first castling precondition found to be unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastlingBlock {
    #[error("the king is not on its home square")]
    KingNotHome,
    #[error("the rook is not on its home square")]
    RookNotHome,
    #[error("the king has already moved")]
    KingHasMoved,
    #[error("the rook has already moved")]
    RookHasMoved,
    #[error("pieces stand between the king and the rook")]
    PathBlocked,
    #[error("the king is in check")]
    KingInCheck,
    #[error("the king would pass through or land on an attacked square")]
    PassesThroughCheck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = InvalidMove::NoPieceAtStart(Position::new(4, 4));
        assert_eq!(err.to_string(), "no piece in starting position (4, 4)");

        let err = InvalidMove::IllegalDestination {
            kind: PieceKind::Rook,
            start: Position::new(7, 0),
            end: Position::new(5, 2),
        };
        assert_eq!(err.to_string(), "the rook at (7, 0) can't move to (5, 2)");

        let err = InvalidMove::CastlingUnavailable(CastlingBlock::PathBlocked);
        assert_eq!(
            err.to_string(),
            "castling unavailable: pieces stand between the king and the rook"
        );
    }
}
