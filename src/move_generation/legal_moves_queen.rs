use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_shared::{
    generate_ray_moves, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

pub fn generate_queen_moves(state: &State, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(state, from, &ORTHOGONAL_DIRECTIONS, out);
    generate_ray_moves(state, from, &DIAGONAL_DIRECTIONS, out);
}
