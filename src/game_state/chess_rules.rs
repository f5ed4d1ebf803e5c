//! Rule constants for the 6x6 variant.
//!
//! Board size, the ply cap used as a draw cutoff, the mirrored back-rank
//! layout and the default size of the discrete action space.

use crate::game_state::chess_types::PieceKind;

/// Board dimension; the board has `BOARD_N * BOARD_N` squares.
pub const BOARD_N: usize = 6;

/// Ply count at which a game is cut off as a draw.
pub const MAX_PLY: u32 = 200;

/// Back rank from column 0, identical for both sides.
pub const BACK_RANK: [PieceKind; 6] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Rook,
];

/// Default capacity of the discrete action space used by the RL surface.
pub const DEFAULT_MAX_ACTIONS: usize = 4096;

const _: () = assert!(BACK_RANK.len() <= BOARD_N, "back rank wider than the board");
const _: () = assert!(BOARD_N >= 4, "board too small for two back ranks and two pawn ranks");
