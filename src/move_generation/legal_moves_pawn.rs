use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_shared::{build_move, offset_square};

/// Pawn candidates in order: single push, double push, diagonal captures
/// towards col + 1 then col - 1. Landing on the far row promotes to a queen.
pub fn generate_pawn_moves(state: &State, from: Square, out: &mut Vec<Move>) {
    let pawn = state.piece_at(from);
    if pawn.is_empty() {
        return;
    }
    let color = pawn.color();
    let forward = color.forward();

    if let Some(one_step) = offset_square(from, (forward, 0)) {
        if state.piece_at(one_step).is_empty() {
            out.push(build_move(state, from, one_step));

            if !pawn.has_moved() {
                if let Some(two_step) = offset_square(from, (2 * forward, 0)) {
                    if state.piece_at(two_step).is_empty() {
                        out.push(build_move(state, from, two_step));
                    }
                }
            }
        }
    }

    for col_delta in [1, -1] {
        let Some(to) = offset_square(from, (forward, col_delta)) else {
            continue;
        };
        if state.piece_at(to).is_enemy_of(color) {
            out.push(build_move(state, from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_rules::BOARD_N;
    use crate::game_state::{chess_types::*, game_state::State};
    use crate::move_generation::legal_move_shared::promotion_target;

    fn moves_from(state: &State, from: Square) -> Vec<Move> {
        let mut out = Vec::new();
        generate_pawn_moves(state, from, &mut out);
        out
    }

    #[test]
    fn unmoved_pawn_has_single_and_double_push() {
        let state = State::new_game();
        let from = square_at(BOARD_N - 2, 2);
        let moves = moves_from(&state, from);

        assert_eq!(
            moves,
            vec![
                Move::new(from, square_at(BOARD_N - 3, 2), MoveKind::Quiet),
                Move::new(from, square_at(BOARD_N - 4, 2), MoveKind::Quiet),
            ]
        );
    }

    #[test]
    fn moved_pawn_has_no_double_push() {
        let from = square_at(3, 2);
        let state = State::empty()
            .with_piece(from, PieceCode::new(PieceKind::Pawn, Color::Light, true, 0));
        let moves = moves_from(&state, from);
        assert_eq!(moves, vec![Move::new(from, square_at(2, 2), MoveKind::Quiet)]);
    }

    #[test]
    fn blocked_intermediate_square_stops_both_pushes() {
        let from = square_at(1, 3);
        let state = State::empty()
            .with_piece(from, PieceCode::fresh(PieceKind::Pawn, Color::Dark))
            .with_piece(square_at(2, 3), PieceCode::fresh(PieceKind::Knight, Color::Light))
            .with_side_to_move(Color::Dark);
        assert!(moves_from(&state, from).is_empty());
    }

    #[test]
    fn blocked_destination_keeps_single_push_only() {
        let from = square_at(1, 3);
        let state = State::empty()
            .with_piece(from, PieceCode::fresh(PieceKind::Pawn, Color::Dark))
            .with_piece(square_at(3, 3), PieceCode::fresh(PieceKind::Knight, Color::Dark))
            .with_side_to_move(Color::Dark);
        assert_eq!(
            moves_from(&state, from),
            vec![Move::new(from, square_at(2, 3), MoveKind::Quiet)]
        );
    }

    #[test]
    fn diagonals_only_capture_enemies() {
        let from = square_at(3, 2);
        let state = State::empty()
            .with_piece(from, PieceCode::new(PieceKind::Pawn, Color::Light, true, 0))
            .with_piece(square_at(2, 2), PieceCode::fresh(PieceKind::Rook, Color::Dark))
            .with_piece(square_at(2, 3), PieceCode::fresh(PieceKind::Bishop, Color::Dark))
            .with_piece(square_at(2, 1), PieceCode::fresh(PieceKind::Bishop, Color::Light));
        assert_eq!(
            moves_from(&state, from),
            vec![Move::new(from, square_at(2, 3), MoveKind::Capture)]
        );
    }

    #[test]
    fn dark_pawn_promotes_with_and_without_capture() {
        let from = square_at(BOARD_N - 2, 1);
        let state = State::empty()
            .with_piece(from, PieceCode::new(PieceKind::Pawn, Color::Dark, true, 0))
            .with_piece(
                square_at(BOARD_N - 1, 0),
                PieceCode::fresh(PieceKind::Rook, Color::Light),
            )
            .with_side_to_move(Color::Dark);
        let queen = promotion_target(Color::Dark);

        assert_eq!(
            moves_from(&state, from),
            vec![
                Move::new(from, square_at(BOARD_N - 1, 1), MoveKind::Promote).with_promotion(queen),
                Move::new(from, square_at(BOARD_N - 1, 0), MoveKind::CapturePromote)
                    .with_promotion(queen),
            ]
        );
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let from = square_at(0, 4);
        let state = State::empty()
            .with_piece(from, PieceCode::new(PieceKind::Pawn, Color::Light, true, 0));
        assert!(moves_from(&state, from).is_empty());
    }
}
