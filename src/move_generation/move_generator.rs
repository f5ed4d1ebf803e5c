//! Kind-keyed dispatch from a piece code to its move generator.
//!
//! Generators are plain functions; the table is indexed by the raw kind bits
//! of a [`PieceCode`], so empty squares and unassigned kinds map to `None`.

use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Appends the pseudo-legal moves of the piece on `from` to `out`.
pub type GenerateFn = fn(&State, Square, &mut Vec<Move>);

pub const GENERATORS: [Option<GenerateFn>; 8] = [
    None,
    Some(generate_pawn_moves as GenerateFn),
    Some(generate_knight_moves as GenerateFn),
    Some(generate_bishop_moves as GenerateFn),
    Some(generate_rook_moves as GenerateFn),
    Some(generate_queen_moves as GenerateFn),
    Some(generate_king_moves as GenerateFn),
    None,
];

#[inline]
pub fn generator_for(code: PieceCode) -> Option<GenerateFn> {
    GENERATORS[code.kind_code() as usize]
}
