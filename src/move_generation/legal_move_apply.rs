//! State transitions.
//!
//! `apply_move` is the unchecked fast path used by simulation loops: it trusts
//! the move's classification and never consults legality. `apply_move_checked`
//! layers a legality gate on top of it.

use tracing::debug;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::MAX_PLY;
use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_generator::Engine;

impl Engine {
    /// Apply `mv` in place and report termination.
    ///
    /// The move is not validated. Applying a move that was not generated from
    /// `state` leaves the board in an unspecified (but well-formed) position.
    pub fn apply_move(&self, state: &mut State, mv: &Move) -> StepResult {
        let mover = state.piece_at(mv.from);

        let placed = match mv.kind {
            MoveKind::Promote | MoveKind::CapturePromote => mv.promotion.unwrap_or(mover),
            MoveKind::Quiet | MoveKind::Capture | MoveKind::Special => mover,
        };
        // An empty origin stays empty rather than becoming a flagged blank.
        let placed = if placed.is_empty() { placed } else { placed.with_moved() };
        state.set(mv.to, placed);
        state.set(mv.from, PieceCode::EMPTY);

        if mv.kind == MoveKind::Special {
            if let Some(handler) = self.special_moves().handler_for(mv.special_code) {
                handler(state, mv);
            }
        }

        state.ply = state.ply.saturating_add(1);
        state.side_to_move = state.side_to_move.opposite();

        let result = evaluate_termination(state);
        if result.done {
            debug!(
                ply = state.ply,
                reward_p0 = result.reward_p0,
                reason = result.info.as_deref().unwrap_or_default(),
                "game finished"
            );
        }
        result
    }

    /// Apply `mv` only if it is in `legal_moves(state)`; otherwise report
    /// `EngineError::IllegalMove` and leave `state` untouched.
    pub fn apply_move_checked(&self, state: &mut State, mv: &Move) -> EngineResult<StepResult> {
        if !self.is_legal(state, mv) {
            return Err(EngineError::IllegalMove {
                from: mv.from,
                to: mv.to,
                kind: mv.kind,
            });
        }
        Ok(self.apply_move(state, mv))
    }
}

/// Terminal check by full board scan: a missing king ends the game, and so
/// does reaching `MAX_PLY`, which counts as a draw.
pub fn evaluate_termination(state: &State) -> StepResult {
    let [light_king, dark_king] = state.king_presence();

    let (reward_p0, reason) = match (light_king, dark_king) {
        (true, false) => (1, Some("dark king captured")),
        (false, true) => (-1, Some("light king captured")),
        (false, false) => (0, Some("both kings missing")),
        (true, true) if state.ply >= MAX_PLY => (0, Some("ply cap reached")),
        (true, true) => (0, None),
    };

    StepResult {
        done: reason.is_some(),
        reward_p0,
        info: reason.map(str::to_owned),
    }
}
