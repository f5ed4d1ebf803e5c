//! Geometry tables and helpers shared by the per-kind generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::State;

/// (row, col) offset on the grid.
pub type Offset = (i32, i32);

pub const ORTHOGONAL_DIRECTIONS: [Offset; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub const DIAGONAL_DIRECTIONS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KING_STEPS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_JUMPS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Destination reached from `from` by `offset`, if it stays on the board.
#[inline]
pub fn offset_square(from: Square, offset: Offset) -> Option<Square> {
    let (dr, dc) = offset;
    try_square_at(row_of(from) as i32 + dr, col_of(from) as i32 + dc)
}

/// The fixed promotion target: a queen of `color`, already marked as moved.
#[inline]
pub const fn promotion_target(color: Color) -> PieceCode {
    PieceCode::new(PieceKind::Queen, color, true, 0)
}

/// Classify a from/to pair against `state`.
///
/// A non-zero `special_code` wins over everything else, then pawn promotion
/// (with or without capture), then plain capture.
pub fn classify_move(state: &State, from: Square, to: Square, special_code: u16) -> MoveKind {
    if special_code != 0 {
        return MoveKind::Special;
    }

    let mover = state.piece_at(from);
    let is_capture = !mover.is_empty() && state.piece_at(to).is_enemy_of(mover.color());
    let promotes =
        mover.is_kind(PieceKind::Pawn) && row_of(to) == mover.color().promotion_row();

    match (promotes, is_capture) {
        (true, true) => MoveKind::CapturePromote,
        (true, false) => MoveKind::Promote,
        (false, true) => MoveKind::Capture,
        (false, false) => MoveKind::Quiet,
    }
}

/// Build a fully classified candidate move, attaching the promotion target
/// when the classification calls for one.
#[inline]
pub fn build_move(state: &State, from: Square, to: Square) -> Move {
    let kind = classify_move(state, from, to, 0);
    let mv = Move::new(from, to, kind);
    if kind.is_promotion() {
        mv.with_promotion(promotion_target(state.piece_at(from).color()))
    } else {
        mv
    }
}

/// Single-step movers (knight, king): every on-board offset whose target is
/// empty or enemy-occupied.
pub fn generate_step_moves(state: &State, from: Square, offsets: &[Offset], out: &mut Vec<Move>) {
    let color = state.piece_at(from).color();
    for &offset in offsets {
        let Some(to) = offset_square(from, offset) else {
            continue;
        };
        let target = state.piece_at(to);
        if target.is_empty() || target.is_enemy_of(color) {
            out.push(build_move(state, from, to));
        }
    }
}

/// Sliding movers: walk each ray until the edge or the first occupied
/// square, which is included only when it holds an enemy.
pub fn generate_ray_moves(
    state: &State,
    from: Square,
    directions: &[Offset],
    out: &mut Vec<Move>,
) {
    let color = state.piece_at(from).color();
    for &direction in directions {
        let mut cursor = from;
        while let Some(to) = offset_square(cursor, direction) {
            let target = state.piece_at(to);
            if target.is_empty() {
                out.push(build_move(state, from, to));
                cursor = to;
                continue;
            }
            if target.is_enemy_of(color) {
                out.push(build_move(state, from, to));
            }
            break;
        }
    }
}
