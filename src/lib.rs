//! Crate root module declarations for the power_chess rules engine.
//!
//! Exposes the piece encoding and state model, the per-kind move generators
//! and engine orchestration, the RL-facing action/observation layer and
//! small utilities so binaries, tests and external tooling can import stable
//! module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_code;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
    pub mod special_moves;
}

pub mod rl {
    pub mod action_mapper;
    pub mod environment;
    pub mod observation;
    pub mod self_play;
}

pub mod utils {
    pub mod render_game_state;
}

pub use errors::{ActionId, EngineError, EngineResult};
pub use game_state::chess_types::{
    Color, Move, MoveKind, PieceCode, PieceKind, Square, State, StepResult, BOARD_N,
    BOARD_SQUARES,
};
pub use move_generation::legal_move_generator::Engine;
