//! Crate root module declarations for the Plum rules engine.
//!
//! The engine answers two questions for a two-player chess game: is this move
//! legal, and what is the game's status. Board state lives in `game_state`,
//! per-piece movement rules in `moves`, and legality filtering, castling and
//! check/mate detection in `move_generation`.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}

pub use chess_errors::{CastlingBlock, ChessResult, InvalidMove};
pub use game_state::board::Board;
pub use game_state::chess_rules::{RulesConfig, StalemateRule};
pub use game_state::chess_types::{CastleSide, ChessMove, Color, Piece, PieceKind, Position};
pub use move_generation::game_status::GameStatus;

#[cfg(test)]
pub(crate) mod test_support {
    /// Routes engine logs to the test harness; `RUST_LOG=plum_rules=trace`
    /// shows every legality decision.
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
