use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_shared::{generate_step_moves, KING_STEPS};

pub fn generate_king_moves(state: &State, from: Square, out: &mut Vec<Move>) {
    generate_step_moves(state, from, &KING_STEPS, out);
}
