use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_shared::{generate_ray_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(state: &State, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(state, from, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::{chess_types::*, game_state::State};

    #[test]
    fn rook_from_corner_sees_two_files() {
        let from = square_at(0, 0);
        let state = State::empty().with_piece(from, PieceCode::fresh(PieceKind::Rook, Color::Light));
        let mut out = Vec::new();
        generate_rook_moves(&state, from, &mut out);
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let from = square_at(0, 0);
        let state = State::empty()
            .with_piece(from, PieceCode::fresh(PieceKind::Rook, Color::Light))
            .with_piece(square_at(3, 0), PieceCode::fresh(PieceKind::Knight, Color::Dark))
            .with_piece(square_at(0, 2), PieceCode::fresh(PieceKind::Knight, Color::Light));
        let mut out = Vec::new();
        generate_rook_moves(&state, from, &mut out);

        assert_eq!(
            out,
            vec![
                Move::new(from, square_at(1, 0), MoveKind::Quiet),
                Move::new(from, square_at(2, 0), MoveKind::Quiet),
                Move::new(from, square_at(3, 0), MoveKind::Capture),
                Move::new(from, square_at(0, 1), MoveKind::Quiet),
            ]
        );
    }
}
